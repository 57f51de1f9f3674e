//! BEM class-name composition for UI component attribute bags.
//!
//! Components declare a base class, modifiers and extra classes; the crate
//! merges them with whatever `modifier`/`modifiers`/`class` values arrived
//! through the component's attribute store and renders one deduplicated,
//! lexicographically sorted class attribute of the form
//! `base base--modifier1 base--modifier2 extraClass`.
//!
//! ```
//! use bem_classes::{AttributeBag, ClassAccumulator};
//!
//! let mut attributes = AttributeBag::new().with("modifiers", "dark");
//! let mut classes = ClassAccumulator::new();
//! classes.modifier("active").classes("spotlight");
//!
//! let rendered = classes.bem("card", &mut attributes).unwrap();
//! assert_eq!(rendered, "card card--active card--dark spotlight");
//! ```

pub mod accumulator;
pub mod class_list;
pub mod component;
pub mod errors;
pub mod expander;
pub mod render;
pub mod store;
pub mod value;

pub use accumulator::ClassAccumulator;
pub use class_list::{process_class_list, sanitize_token};
pub use component::BemClasses;
pub use errors::{BemError, Result};
pub use expander::build_modifier_classes;
pub use store::{AttributeBag, AttributeStore};
pub use value::ClassValue;
