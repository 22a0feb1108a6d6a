//! Query parameter assembly and encoding.
//!
//! # Design
//! `Params` is the one mapping every endpoint feeds into
//! [`MeetupClient::get`](crate::MeetupClient::get). The `set_*` methods carry
//! the API's omission rule: an unset or falsy optional (zero, empty string,
//! empty list) never appears in the mapping at all — it is skipped, not
//! encoded as an empty value. A fresh `Params` is built per call; nothing is
//! shared between requests. `BTreeMap` keeps keys unique and the encoded
//! order deterministic (the remote does not care about order).
//!
//! List-valued parameters are sent as a single comma-and-space-joined value
//! (`category=34, 242`), never as repeated keys. `CsvList` models that, and
//! its scalar `From` impls make a lone value interchangeable with a
//! one-element list.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Number(u64),
    List(Vec<String>),
}

impl ParamValue {
    /// The string sent on the wire, before percent-encoding.
    fn wire_value(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Number(n) => n.to_string(),
            ParamValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&CsvList> for ParamValue {
    fn from(value: &CsvList) -> Self {
        ParamValue::List(value.0.clone())
    }
}

/// The query parameters attached to a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts unconditionally, replacing any existing value for `name`.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Inserts a text parameter unless it is unset or empty.
    pub fn set_text(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.insert(name, value);
            }
        }
    }

    /// Inserts a numeric parameter unless it is unset or zero.
    pub fn set_number(&mut self, name: &str, value: Option<u64>) {
        if let Some(value) = value {
            if value != 0 {
                self.insert(name, value);
            }
        }
    }

    /// Inserts a list parameter unless it is unset or empty.
    pub fn set_list(&mut self, name: &str, value: Option<&CsvList>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.insert(name, value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-encodes the mapping into a query string (no leading `?`).
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.0 {
            serializer.append_pair(name, &value.wire_value());
        }
        serializer.finish()
    }
}

/// An ordered list sent as one comma-and-space-joined parameter value.
///
/// Converts from scalars as well as sequences, so a caller holding a single
/// category id or field name does not have to wrap it:
///
/// ```
/// use meetup_core::CsvList;
/// assert_eq!(CsvList::from(34u64), CsvList::from(vec![34u64]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvList(Vec<String>);

impl CsvList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self) -> String {
        self.0.join(", ")
    }
}

impl From<&str> for CsvList {
    fn from(value: &str) -> Self {
        CsvList(vec![value.to_string()])
    }
}

impl From<String> for CsvList {
    fn from(value: String) -> Self {
        CsvList(vec![value])
    }
}

impl From<u64> for CsvList {
    fn from(value: u64) -> Self {
        CsvList(vec![value.to_string()])
    }
}

impl From<Vec<String>> for CsvList {
    fn from(items: Vec<String>) -> Self {
        CsvList(items)
    }
}

impl From<Vec<&str>> for CsvList {
    fn from(items: Vec<&str>) -> Self {
        CsvList(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for CsvList {
    fn from(items: &[&str]) -> Self {
        CsvList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<u64>> for CsvList {
    fn from(items: Vec<u64>) -> Self {
        CsvList(items.into_iter().map(|n| n.to_string()).collect())
    }
}

impl From<&[u64]> for CsvList {
    fn from(items: &[u64]) -> Self {
        CsvList(items.iter().map(|n| n.to_string()).collect())
    }
}

/// Accepts a JSON scalar or an array of scalars, mirroring the scalar→list
/// coercion of the `From` impls.
impl<'de> serde::Deserialize<'de> for CsvList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        csv_list_from_json(&value)
            .ok_or_else(|| serde::de::Error::custom("expected a scalar or an array of scalars"))
    }
}

fn json_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn csv_list_from_json(value: &serde_json::Value) -> Option<CsvList> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(json_scalar)
            .collect::<Option<Vec<_>>>()
            .map(CsvList),
        other => json_scalar(other).map(|s| CsvList(vec![s])),
    }
}
