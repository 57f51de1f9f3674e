use crate::value::ClassValue;

/// Sanitize a single raw class name.
///
/// Keeps only `[A-Za-z0-9_-]` characters (ASCII, no locale-aware class
/// names) and returns `None` when nothing is left.
pub fn sanitize_token(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Transform a raw class attribute value into a flat list of usable tokens.
///
/// Strings split on single-space boundaries, so consecutive or edge spaces
/// yield empty segments that sanitization drops — that splitting rule is
/// contractual, not an accident. Nested lists flatten depth-first in
/// encounter order, non-string scalars are coerced to their display form,
/// and empty tokens never survive. First-seen order is preserved;
/// deduplication happens later, at merge time.
pub fn process_class_list(input: &ClassValue) -> Vec<String> {
    let mut tokens = Vec::new();
    collect_tokens(input, &mut tokens);
    tokens
}

fn collect_tokens(value: &ClassValue, tokens: &mut Vec<String>) {
    match value {
        ClassValue::Str(s) => {
            tokens.extend(s.split(' ').filter_map(sanitize_token));
        }
        ClassValue::Int(n) => tokens.extend(sanitize_token(&n.to_string())),
        ClassValue::Float(n) => tokens.extend(sanitize_token(&n.to_string())),
        ClassValue::Bool(b) => tokens.extend(sanitize_token(&b.to_string())),
        ClassValue::List(items) => {
            for item in items {
                collect_tokens(item, tokens);
            }
        }
    }
}
