//! `serde_json::Value` as a host value.
//!
//! JSON has no constructors, so `Constructor` is uninhabited and every
//! declaration is a plain descriptor. Field order follows the document
//! because the workspace enables `serde_json`'s `preserve_order`.

use std::convert::Infallible;

use serde_json::{Map, Value};

use super::HostValue;

impl HostValue for Value {
    type Constructor = Infallible;

    fn is_object(&self) -> bool {
        Self::is_object(self)
    }

    fn is_array(&self) -> bool {
        Self::is_array(self)
    }

    fn as_constructor(&self) -> Option<&Infallible> {
        None
    }

    fn as_str(&self) -> Option<&str> {
        Self::as_str(self)
    }

    fn as_bool(&self) -> Option<bool> {
        Self::as_bool(self)
    }

    fn get_property(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn property_names(&self) -> Vec<&str> {
        self.as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn length(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn from_entries(entries: Vec<(String, Self)>) -> Self {
        Self::Object(entries.into_iter().collect::<Map<_, _>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_names_follow_document_order() {
        let value = json!({ "zeta": 1, "alpha": 2, "mid": 3 });
        assert_eq!(HostValue::property_names(&value), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn arrays_are_not_objects() {
        let value = json!([1, 2]);
        assert!(!HostValue::is_object(&value));
        assert_eq!(HostValue::length(&value), Some(2));
        assert!(HostValue::get_property(&value, "length").is_none());
    }

    #[test]
    fn from_entries_keeps_insertion_order() {
        let value = <Value as HostValue>::from_entries(vec![
            ("b".into(), json!(1)),
            ("a".into(), json!(2)),
        ]);
        assert_eq!(HostValue::property_names(&value), ["b", "a"]);
    }

    #[test]
    fn json_values_are_never_constructors() {
        assert!(HostValue::as_constructor(&json!({ "schema": {} })).is_none());
    }
}
