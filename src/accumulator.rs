use crate::class_list::process_class_list;
use crate::errors::Result;
use crate::expander::build_modifier_classes;
use crate::store::AttributeStore;
use crate::value::ClassValue;
use indexmap::IndexSet;

/// Running modifier/class state for one component instance.
///
/// A component owns one accumulator for its lifetime: it is filled with
/// fluent [`modifiers`](Self::modifiers)/[`classes`](Self::classes) calls
/// during setup, reconciled once with the component's attribute store at
/// render time, and discarded with the component. Duplicates are allowed
/// while declaring; deduplication and the final lexicographic sort happen
/// in [`get_all_classes`](Self::get_all_classes).
#[derive(Debug, Clone, Default)]
pub struct ClassAccumulator {
    modifiers: Vec<String>,
    classes: Vec<String>,
}

impl ClassAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge modifiers into the owned list, order preserved.
    pub fn modifiers(&mut self, input: impl Into<ClassValue>) -> &mut Self {
        self.modifiers.extend(process_class_list(&input.into()));
        self
    }

    /// Add a single modifier.
    pub fn modifier(&mut self, modifier: &str) -> &mut Self {
        self.modifiers([modifier])
    }

    /// Merge additional plain classes into the owned list.
    pub fn classes(&mut self, input: impl Into<ClassValue>) -> &mut Self {
        self.classes.extend(process_class_list(&input.into()));
        self
    }

    /// Check if a modifier has been declared or pulled so far.
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    /// Check if a plain class has been declared or pulled so far.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Consume the store's `modifier`/`modifiers` keys into the owned list.
    ///
    /// Both keys are sanitized, merged in that key order, and removed from
    /// the store. A value is consumed exactly once: after the first pull
    /// the keys are gone, so repeat calls are no-ops. That is what keeps a
    /// second render pass from re-applying the same attribute values.
    pub fn pull_modifiers<S: AttributeStore>(&mut self, store: &mut S) -> &[String] {
        for key in ["modifier", "modifiers"] {
            if let Some(value) = store.remove(key) {
                self.modifiers.extend(process_class_list(&value));
            }
        }
        &self.modifiers
    }

    /// Consume the store's `class` key into the owned list.
    pub fn pull_classes<S: AttributeStore>(&mut self, store: &mut S) -> &[String] {
        if let Some(value) = store.remove("class") {
            self.classes.extend(process_class_list(&value));
        }
        &self.classes
    }

    /// Resolve the full class list for the given base.
    ///
    /// Pulls any pending store values, expands modifiers against the base,
    /// unions in the plain classes, deduplicates, and returns the tokens
    /// lexicographically sorted. The sort is an observable contract: final
    /// output order is alphabetical, not declaration order. Calling this
    /// again after the store keys were consumed reproduces the same list
    /// from the now-stable owned state.
    pub fn get_all_classes<S: AttributeStore>(
        &mut self,
        base: &str,
        store: &mut S,
    ) -> Result<Vec<String>> {
        self.pull_modifiers(store);
        let expanded = build_modifier_classes(base, &self.modifiers)?;
        self.pull_classes(store);

        let mut all: IndexSet<String> = expanded.into_iter().collect();
        all.extend(self.classes.iter().cloned());

        let mut sorted: Vec<String> = all.into_iter().collect();
        sorted.sort_unstable();

        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AttributeBag;

    #[test]
    fn test_fluent_declaration() {
        let mut acc = ClassAccumulator::new();
        acc.modifiers("active large").modifier("dark").classes(["extra"]);

        assert!(acc.has_modifier("active"));
        assert!(acc.has_modifier("dark"));
        assert!(acc.has_class("extra"));
        assert!(!acc.has_modifier("extra"));
    }

    #[test]
    fn test_has_modifier_before_render() {
        let mut acc = ClassAccumulator::new();
        assert!(!acc.has_modifier("x"));
        acc.modifier("x");
        assert!(acc.has_modifier("x"));
    }

    #[test]
    fn test_get_all_classes_sorted_and_deduped() {
        let mut store = AttributeBag::new();
        let mut acc = ClassAccumulator::new();
        acc.modifiers(["large", "active"]).classes(["zeta", "alpha"]);

        let all = acc.get_all_classes("btn", &mut store).unwrap();
        assert_eq!(all, vec!["alpha", "btn", "btn--active", "btn--large", "zeta"]);
    }

    #[test]
    fn test_duplicate_modifier_not_duplicated_in_output() {
        let mut store = AttributeBag::new();
        let mut acc = ClassAccumulator::new();
        acc.modifier("active").modifier("active");

        let all = acc.get_all_classes("btn", &mut store).unwrap();
        assert_eq!(all, vec!["btn", "btn--active"]);
    }

    #[test]
    fn test_base_collision_with_class_deduped() {
        let mut store = AttributeBag::new();
        let mut acc = ClassAccumulator::new();
        acc.classes("btn custom");

        let all = acc.get_all_classes("btn", &mut store).unwrap();
        assert_eq!(all, vec!["btn", "custom"]);
    }

    #[test]
    fn test_pull_modifiers_consumes_both_keys() {
        let mut store = AttributeBag::new()
            .with("modifier", "dark")
            .with("modifiers", vec!["wide", "dark"]);
        let mut acc = ClassAccumulator::new();

        let pulled = acc.pull_modifiers(&mut store).to_vec();
        assert_eq!(pulled, vec!["dark", "wide", "dark"]);
        assert!(!store.has("modifier"));
        assert!(!store.has("modifiers"));
    }

    #[test]
    fn test_second_pull_is_noop() {
        let mut store = AttributeBag::new().with("modifiers", "dark");
        let mut acc = ClassAccumulator::new();

        acc.pull_modifiers(&mut store);
        let before = acc.pull_modifiers(&mut store).to_vec();
        let after = acc.pull_modifiers(&mut store).to_vec();
        assert_eq!(before, after);
        assert_eq!(after, vec!["dark"]);
    }

    #[test]
    fn test_pull_classes_consumes_class_key() {
        let mut store = AttributeBag::new().with("class", "zeta  alpha!");
        let mut acc = ClassAccumulator::new();
        acc.classes("owned");

        let pulled = acc.pull_classes(&mut store).to_vec();
        assert_eq!(pulled, vec!["owned", "zeta", "alpha"]);
        assert!(!store.has("class"));
    }

    #[test]
    fn test_resolution_is_repeatable_after_consumption() {
        let mut store = AttributeBag::new()
            .with("modifiers", "dark")
            .with("class", "extra");
        let mut acc = ClassAccumulator::new();
        acc.modifier("active");

        let first = acc.get_all_classes("card", &mut store).unwrap();
        let second = acc.get_all_classes("card", &mut store).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["card", "card--active", "card--dark", "extra"]);
    }

    #[test]
    fn test_missing_store_keys_are_empty_not_errors() {
        let mut store = AttributeBag::new().with("id", "header");
        let mut acc = ClassAccumulator::new();

        assert!(acc.pull_modifiers(&mut store).is_empty());
        assert!(acc.pull_classes(&mut store).is_empty());
        assert_eq!(acc.get_all_classes("btn", &mut store).unwrap(), vec!["btn"]);
    }

    #[test]
    fn test_empty_base_surfaces_invalid_base() {
        let mut store = AttributeBag::new();
        let mut acc = ClassAccumulator::new();
        assert!(acc.get_all_classes(" !", &mut store).is_err());
    }
}
