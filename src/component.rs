use crate::accumulator::ClassAccumulator;
use crate::errors::Result;
use crate::store::AttributeStore;
use crate::value::ClassValue;

/// Mixin for component types that carry BEM class state.
///
/// Any component that owns a [`ClassAccumulator`] and an attribute store
/// gets the whole fluent surface by implementing the single
/// [`bem_state`](Self::bem_state) accessor; the default methods delegate.
/// This keeps the accumulator logic shared across otherwise unrelated
/// component base types without an inheritance hierarchy.
pub trait BemClasses {
    type Attributes: AttributeStore;

    /// Access the owned accumulator and attribute store together.
    fn bem_state(&mut self) -> (&mut ClassAccumulator, &mut Self::Attributes);

    /// Define the component's modifiers.
    fn modifiers(&mut self, input: impl Into<ClassValue>) -> &mut Self
    where
        Self: Sized,
    {
        self.bem_state().0.modifiers(input);
        self
    }

    /// Add a single component modifier.
    fn modifier(&mut self, modifier: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.bem_state().0.modifier(modifier);
        self
    }

    /// Define the component's eventual additional classes.
    fn classes(&mut self, input: impl Into<ClassValue>) -> &mut Self
    where
        Self: Sized,
    {
        self.bem_state().0.classes(input);
        self
    }

    /// Check if a modifier is defined.
    fn has_modifier(&mut self, modifier: &str) -> bool {
        self.bem_state().0.has_modifier(modifier)
    }

    /// Check if an additional class is defined.
    fn has_class(&mut self, class: &str) -> bool {
        self.bem_state().0.has_class(class)
    }

    /// Generate the full class attribute for the given base.
    fn bem(&mut self, base: &str) -> Result<String> {
        let (accumulator, store) = self.bem_state();
        accumulator.bem(base, store)
    }

    /// Generate the class attribute with extra modifiers merged in.
    fn bem_with(&mut self, base: &str, extra_modifiers: impl Into<ClassValue>) -> Result<String>
    where
        Self: Sized,
    {
        let (accumulator, store) = self.bem_state();
        accumulator.bem_with(base, extra_modifiers, store)
    }

    /// Resolve and merge the class attribute into the component's store.
    fn merge_all_classes(&mut self, base: &str) -> Result<String> {
        let (accumulator, store) = self.bem_state();
        accumulator.merge_all_classes(base, store)
    }
}
