use crate::accumulator::ClassAccumulator;
use crate::errors::Result;
use crate::store::AttributeStore;
use crate::value::ClassValue;

/// Rendering entry points.
///
/// `bem`/`bem_with` compute the final class string without writing it
/// anywhere; `merge_all_classes`/`merge_all_classes_with` additionally
/// store the result under the `class` key, which is the once-per-render
/// entry point framework glue calls before emitting the attribute set.
impl ClassAccumulator {
    /// Render the full class attribute for the given base.
    pub fn bem<S: AttributeStore>(&mut self, base: &str, store: &mut S) -> Result<String> {
        Ok(self.get_all_classes(base, store)?.join(" "))
    }

    /// Render with extra modifiers merged in first.
    ///
    /// The extras go through the same merge semantics as
    /// [`modifiers`](Self::modifiers).
    pub fn bem_with<S: AttributeStore>(
        &mut self,
        base: &str,
        extra_modifiers: impl Into<ClassValue>,
        store: &mut S,
    ) -> Result<String> {
        self.modifiers(extra_modifiers);
        self.bem(base, store)
    }

    /// Render and write the result back into the store's `class` key.
    ///
    /// The `modifier`/`modifiers` keys have already been consumed by the
    /// pull, so after this call the store carries the single resolved
    /// `class` attribute.
    pub fn merge_all_classes<S: AttributeStore>(
        &mut self,
        base: &str,
        store: &mut S,
    ) -> Result<String> {
        let rendered = self.bem(base, store)?;
        store.set("class", ClassValue::Str(rendered.clone()));
        Ok(rendered)
    }

    /// [`merge_all_classes`](Self::merge_all_classes) with extra modifiers.
    pub fn merge_all_classes_with<S: AttributeStore>(
        &mut self,
        base: &str,
        extra_modifiers: impl Into<ClassValue>,
        store: &mut S,
    ) -> Result<String> {
        self.modifiers(extra_modifiers);
        self.merge_all_classes(base, store)
    }
}
