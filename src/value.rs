use serde::{Deserialize, Serialize};

/// A raw class-attribute value as declared on a component.
///
/// Template attributes arrive either as a space-separated string
/// (`class="card card--wide"`), as a list that may nest further lists,
/// or as a stray scalar that a template expression produced (a number,
/// a boolean). All of these are accepted and coerced; sanitization
/// happens later in [`crate::class_list::process_class_list`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// An empty value, equivalent to an absent attribute.
    pub fn empty() -> Self {
        ClassValue::List(Vec::new())
    }

    /// Whether this value contributes no scalars at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Str(s) => s.is_empty(),
            ClassValue::List(items) => items.iter().all(ClassValue::is_empty),
            _ => false,
        }
    }
}

impl Default for ClassValue {
    fn default() -> Self {
        ClassValue::empty()
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Int(value)
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Float(value)
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue> + Clone> From<&[T]> for ClassValue {
    fn from(values: &[T]) -> Self {
        ClassValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ClassValue {
    /// Coerce an arbitrary JSON attribute value.
    ///
    /// Non-string scalars are kept as scalars (their display form is
    /// sanitized later), `null` and objects degrade to an empty value
    /// rather than erroring.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => ClassValue::Str(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ClassValue::Int(i)
                } else {
                    ClassValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::Bool(b) => ClassValue::Bool(b),
            serde_json::Value::Array(items) => {
                ClassValue::List(items.into_iter().map(ClassValue::from).collect())
            }
            serde_json::Value::Null | serde_json::Value::Object(_) => ClassValue::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nested_vec() {
        let value: ClassValue = vec![ClassValue::from("a"), ClassValue::from(vec!["b", "c"])].into();
        match value {
            ClassValue::List(items) => assert_eq!(items.len(), 2),
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_detection() {
        assert!(ClassValue::empty().is_empty());
        assert!(ClassValue::from("").is_empty());
        assert!(ClassValue::List(vec![ClassValue::from(""), ClassValue::empty()]).is_empty());
        assert!(!ClassValue::from("card").is_empty());
        assert!(!ClassValue::from(0_i64).is_empty());
    }

    #[test]
    fn test_json_coercion() {
        let json: serde_json::Value = serde_json::json!(["active", 7, null, ["wide"]]);
        let value = ClassValue::from(json);
        assert_eq!(
            value,
            ClassValue::List(vec![
                ClassValue::Str("active".to_string()),
                ClassValue::Int(7),
                ClassValue::empty(),
                ClassValue::List(vec![ClassValue::Str("wide".to_string())]),
            ])
        );
    }

    #[test]
    fn test_untagged_deserialization() {
        let value: ClassValue = serde_json::from_str(r#""card card--wide""#).unwrap();
        assert_eq!(value, ClassValue::Str("card card--wide".to_string()));

        let value: ClassValue = serde_json::from_str(r#"["a", ["b"]]"#).unwrap();
        match value {
            ClassValue::List(items) => assert_eq!(items.len(), 2),
            other => panic!("Expected list, got {:?}", other),
        }
    }
}
