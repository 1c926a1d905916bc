use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a graph node
///
/// Clients may send node identifiers either as JSON strings or as JSON
/// numbers. Both are normalized to their textual form so that `1` and `"1"`
/// name the same node.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True for an empty identifier (`""`), which the API treats as missing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

struct NodeIdVisitor;

impl<'de> Visitor<'de> for NodeIdVisitor {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a node identifier (string or number)")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
        Ok(NodeId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NodeId, E> {
        Ok(NodeId(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
        Ok(NodeId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
        Ok(NodeId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<NodeId, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("non-finite node identifier {}", v)));
        }
        // Keep "2.0" distinct from "2" the same way the JSON text does
        if v.fract() == 0.0 {
            Ok(NodeId(format!("{:.1}", v)))
        } else {
            Ok(NodeId(v.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeIdVisitor)
    }
}
