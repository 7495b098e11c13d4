//! Node parameter values.
//!
//! Parameters arrive from the external tree-builder as a loosely typed
//! bag. The bag itself never drives emission directly; the style and
//! border resolvers convert it into typed deltas at the boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Num(f64),
    Str(String),
    /// Structured sub-map, used by border specifications.
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Whether a present value counts as "switched on". Bare flags from
    /// the tree-builder arrive as `true`; everything except an explicit
    /// `false` counts.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

/// The parameter bag of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether the parameter is present and truthy (`bold`, `not bold`
    /// and friends are bare flags).
    pub fn is_set(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(Value::truthy)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn num(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_num)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        let mut params = Params::new();
        params.insert("bold", true);
        params.insert("not bold", false);
        params.insert("font", "Georgia");
        assert!(params.is_set("bold"));
        assert!(!params.is_set("not bold"));
        assert!(params.is_set("font"));
        assert!(!params.is_set("absent"));
    }

    #[test]
    fn untagged_values_deserialize() {
        let params: Params = serde_json::from_str(
            r#"{"bold": true, "size": 14, "font": "Georgia", "border": {"all": "single"}}"#,
        )
        .unwrap();
        assert_eq!(params.get("bold"), Some(&Value::Bool(true)));
        assert_eq!(params.num("size"), Some(14.0));
        assert_eq!(params.str("font"), Some("Georgia"));
        assert!(params.get("border").unwrap().as_map().is_some());
    }
}
