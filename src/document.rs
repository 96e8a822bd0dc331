//! Generic YAML document tree used by every annotation check.
//!
//! Manifests and the nested documents stored inside annotation values are both
//! parsed into a [`Node`]. Validators match on the variant instead of probing
//! dynamic types, so a wrong shape is just another match arm.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A parsed YAML value.
///
/// Tags (`!foo bar`) are dropped and the tagged value is kept. Mapping keys
/// are rendered to text so lookups by field name stay simple.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_yaml::Value")]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Node>),
    Mapping(BTreeMap<String, Node>),
}

impl Node {
    /// Name of the variant as shown in shape-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::List(_) => "list",
            Node::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Null, `false`, zero, and empty strings, lists or mappings. Such a
    /// value counts as "not set" for optional sections.
    pub fn is_falsy(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Bool(b) => !b,
            Node::Integer(i) => *i == 0,
            Node::Float(x) => *x == 0.0,
            Node::String(s) => s.is_empty(),
            Node::List(items) => items.is_empty(),
            Node::Mapping(map) => map.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a field on a mapping node. Always `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Whether a mapping node carries `key`, regardless of its value.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Integer(i)
                } else {
                    // u64 beyond i64::MAX, or a real float
                    Node::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Value::Mapping(mapping) => Node::Mapping(
                mapping
                    .into_iter()
                    .map(|(k, v)| (Node::from(k).to_string(), Node::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Integer(i) => write!(f, "{}", i),
            Node::Float(x) => write!(f, "{:?}", x),
            Node::String(s) => write!(f, "{}", s),
            Node::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Node::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Parse a single YAML document. Empty or comment-only input yields
/// [`Node::Null`].
pub fn parse_document(text: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_list_of_mappings() {
        let node = parse_document("- kind: added\n  description: x\n- plain entry").unwrap();
        let Node::List(items) = node else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("kind"), Some(&Node::String("added".to_string())));
        assert_eq!(items[1], Node::String("plain entry".to_string()));
    }

    #[test]
    fn test_parse_empty_document_is_null() {
        assert!(parse_document("").unwrap().is_null());
        assert!(parse_document("# only a comment\n").unwrap().is_null());
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_document("true").unwrap(), Node::Bool(true));
        assert_eq!(parse_document("42").unwrap(), Node::Integer(42));
        assert_eq!(parse_document("1.5").unwrap(), Node::Float(1.5));
        assert_eq!(
            parse_document("'true'").unwrap(),
            Node::String("true".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_document("key: [unclosed").is_err());
        assert!(parse_document("a: b\n  c: d\n").is_err());
    }

    #[test]
    fn test_non_string_keys_are_rendered() {
        let node = parse_document("1: one\ntrue: yes-value\n").unwrap();
        assert!(node.has("1"));
        assert!(node.has("true"));
    }

    #[test]
    fn test_tagged_value_is_unwrapped() {
        let node = parse_document("!custom hello").unwrap();
        assert_eq!(node, Node::String("hello".to_string()));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Node::Null.type_name(), "null");
        assert_eq!(Node::Bool(false).type_name(), "boolean");
        assert_eq!(Node::Integer(1).type_name(), "integer");
        assert_eq!(Node::Float(1.0).type_name(), "float");
        assert_eq!(Node::String(String::new()).type_name(), "string");
        assert_eq!(Node::List(vec![]).type_name(), "list");
        assert_eq!(Node::Mapping(BTreeMap::new()).type_name(), "mapping");
    }

    #[test]
    fn test_display() {
        let node = parse_document("{b: [1, 2.5], a: null}").unwrap();
        assert_eq!(node.to_string(), "{a: null, b: [1, 2.5]}");
        assert_eq!(Node::Float(1.0).to_string(), "1.0");
        assert_eq!(Node::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_is_falsy() {
        for yaml in ["", "false", "0", "0.0", "''", "[]", "{}"] {
            assert!(parse_document(yaml).unwrap().is_falsy(), "{:?} not falsy", yaml);
        }
        for yaml in ["true", "1", "x", "[0]", "{a: 1}"] {
            assert!(!parse_document(yaml).unwrap().is_falsy(), "{:?} falsy", yaml);
        }
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let err = parse_document("name: a\nname: b\n").unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{}", err);
    }

    #[test]
    fn test_get_on_non_mapping() {
        let node = Node::List(vec![]);
        assert!(node.get("anything").is_none());
        assert!(!node.has("anything"));
    }
}
