use crate::class_list::sanitize_token;
use crate::errors::{BemError, Result};

/// Expand a base class plus modifier tokens into fully qualified classes.
///
/// Returns `[base, base--m1, base--m2, …]` in the given modifier order,
/// without deduplication. The base is sanitized with the same rules as
/// any other token; a base that sanitizes to nothing is fatal for the
/// render call.
pub fn build_modifier_classes(base: &str, modifiers: &[String]) -> Result<Vec<String>> {
    let base = sanitize_token(base).ok_or_else(|| BemError::InvalidBase(base.to_string()))?;

    let mut classes = Vec::with_capacity(modifiers.len() + 1);
    classes.push(base.clone());
    classes.extend(modifiers.iter().map(|modifier| format!("{}--{}", base, modifier)));

    Ok(classes)
}
