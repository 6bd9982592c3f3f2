//! Author tree: the input to compilation.
//!
//! Trees are built either with the builder methods on [`ComponentNode`] or
//! deserialized from JSON:
//!
//! ```json
//! {
//!   "component": "Body",
//!   "attributes": { "ws:id": "root", "data-count": 2 },
//!   "children": ["text", { "placeholder": "sample" }, [{ "component": "Box" }]]
//! }
//! ```
//!
//! Strings are text nodes, `{"placeholder": ..}` objects are placeholder text,
//! arrays are fragments. Attribute objects carrying a `"$type"` key are value
//! wrappers (`expression`, `parameter`, `asset`, `page`).

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Attribute that overrides the generated instance id
pub const ID_ATTRIBUTE: &str = "ws:id";

/// Attribute holding the style block
pub const STYLE_ATTRIBUTE: &str = "ws:style";

/// Key marking a JSON attribute object as a value wrapper
pub const WRAPPER_TAG: &str = "$type";

/// Node of the author tree
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorNode {
    Component(ComponentNode),
    Text { value: String, placeholder: bool },
    Fragment(Vec<AuthorNode>),
}

impl AuthorNode {
    pub fn component(component: impl Into<String>) -> ComponentNode {
        ComponentNode::new(component)
    }

    pub fn text(value: impl Into<String>) -> Self {
        AuthorNode::Text {
            value: value.into(),
            placeholder: false,
        }
    }

    pub fn placeholder(value: impl Into<String>) -> Self {
        AuthorNode::Text {
            value: value.into(),
            placeholder: true,
        }
    }

    pub fn fragment(children: impl IntoIterator<Item = AuthorNode>) -> Self {
        AuthorNode::Fragment(children.into_iter().collect())
    }
}

impl From<ComponentNode> for AuthorNode {
    fn from(node: ComponentNode) -> Self {
        AuthorNode::Component(node)
    }
}

impl From<&str> for AuthorNode {
    fn from(value: &str) -> Self {
        AuthorNode::text(value)
    }
}

/// Component node with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub component: String,
    pub attributes: Vec<(String, RawValue)>,
    pub children: Vec<AuthorNode>,
}

impl ComponentNode {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Setting an existing name replaces its value in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Override the generated id
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr(ID_ATTRIBUTE, id.into())
    }

    /// Attach a style block
    pub fn style(self, css: impl Into<String>) -> Self {
        self.attr(STYLE_ATTRIBUTE, css.into())
    }

    pub fn child(mut self, child: impl Into<AuthorNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = AuthorNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&RawValue> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }
}

/// Raw attribute value as authored
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Any JSON-like literal: string, number, boolean, mapping, array, null
    Literal(Value),
    Expression(String),
    Parameter(String),
    Asset(String),
    Page {
        page_id: String,
        instance_id: Option<String>,
    },
    /// JSON wrapper of a kind the compiler does not know
    Unsupported { kind: String },
}

impl RawValue {
    pub fn expression(code: impl Into<String>) -> Self {
        RawValue::Expression(code.into())
    }

    pub fn parameter(id: impl Into<String>) -> Self {
        RawValue::Parameter(id.into())
    }

    pub fn asset(id: impl Into<String>) -> Self {
        RawValue::Asset(id.into())
    }

    pub fn page(page_id: impl Into<String>) -> Self {
        RawValue::Page {
            page_id: page_id.into(),
            instance_id: None,
        }
    }

    pub fn page_instance(page_id: impl Into<String>, instance_id: impl Into<String>) -> Self {
        RawValue::Page {
            page_id: page_id.into(),
            instance_id: Some(instance_id.into()),
        }
    }

    /// String payload of a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Literal(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Literal(Value::String(_)) => "string",
            RawValue::Literal(Value::Number(_)) => "number",
            RawValue::Literal(Value::Bool(_)) => "boolean",
            RawValue::Literal(Value::Null) => "null",
            RawValue::Literal(Value::Array(_)) => "array",
            RawValue::Literal(Value::Object(_)) => "object",
            RawValue::Expression(_) => "expression",
            RawValue::Parameter(_) => "parameter",
            RawValue::Asset(_) => "asset",
            RawValue::Page { .. } => "page",
            RawValue::Unsupported { .. } => "unsupported",
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        RawValue::Literal(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Literal(Value::String(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Literal(Value::Bool(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Literal(Value::from(value))
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Literal(Value::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Literal(Value::from(value))
    }
}

// JSON input

impl RawValue {
    /// Decode a JSON attribute value. Objects carrying `"$type"` are wrappers
    /// (`{"$type": "expression", "value": "1 + 1"}`); anything else is a literal.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) if map.contains_key(WRAPPER_TAG) => decode_wrapper(&map),
            other => RawValue::Literal(other),
        }
    }
}

fn decode_wrapper(map: &Map<String, Value>) -> RawValue {
    let kind = match map.get(WRAPPER_TAG) {
        Some(Value::String(kind)) => kind.as_str(),
        Some(other) => {
            return RawValue::Unsupported {
                kind: other.to_string(),
            }
        }
        None => {
            return RawValue::Unsupported {
                kind: "<missing>".to_string(),
            }
        }
    };
    let field = |name: &str| map.get(name).and_then(Value::as_str);
    let required = |name: &str| {
        field(name).ok_or_else(|| RawValue::Unsupported {
            kind: format!("{} without '{}'", kind, name),
        })
    };

    let decoded = match kind {
        "expression" => required("value").map(RawValue::expression),
        "parameter" => required("value").map(RawValue::parameter),
        "asset" => required("value").map(RawValue::asset),
        "page" => required("pageId").map(|page_id| match field("instanceId") {
            Some(instance_id) => RawValue::page_instance(page_id, instance_id),
            None => RawValue::page(page_id),
        }),
        other => Err(RawValue::Unsupported {
            kind: other.to_string(),
        }),
    };
    decoded.unwrap_or_else(|unsupported| unsupported)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonNode {
    Text(String),
    Placeholder {
        placeholder: String,
    },
    Fragment(Vec<JsonNode>),
    Component {
        component: String,
        #[serde(default)]
        attributes: Map<String, Value>,
        #[serde(default)]
        children: Vec<JsonNode>,
    },
}

impl From<JsonNode> for AuthorNode {
    fn from(node: JsonNode) -> Self {
        match node {
            JsonNode::Text(value) => AuthorNode::text(value),
            JsonNode::Placeholder { placeholder } => AuthorNode::placeholder(placeholder),
            JsonNode::Fragment(children) => {
                AuthorNode::fragment(children.into_iter().map(AuthorNode::from))
            }
            JsonNode::Component {
                component,
                attributes,
                children,
            } => AuthorNode::Component(ComponentNode {
                component,
                attributes: attributes
                    .into_iter()
                    .map(|(name, value)| (name, RawValue::from_json(value)))
                    .collect(),
                children: children.into_iter().map(AuthorNode::from).collect(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for AuthorNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonNode::deserialize(deserializer).map(AuthorNode::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_replaces_existing_attribute() {
        let node = ComponentNode::new("Box")
            .attr("data-a", "first")
            .attr("data-b", 1)
            .attr("data-a", "second");

        assert_eq!(node.attributes.len(), 2);
        assert_eq!(node.attributes[0].0, "data-a");
        assert_eq!(node.attribute("data-a").and_then(RawValue::as_str), Some("second"));
    }

    #[test]
    fn test_deserialize_tree() {
        let tree: AuthorNode = serde_json::from_value(json!({
            "component": "Body",
            "attributes": { "ws:id": "root", "data-z": 1, "data-a": true },
            "children": [
                "hello",
                { "placeholder": "sample" },
                [{ "component": "Box" }]
            ]
        }))
        .unwrap();

        let AuthorNode::Component(body) = tree else {
            panic!("Expected component root");
        };
        assert_eq!(body.component, "Body");
        let names: Vec<&str> = body.attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ws:id", "data-z", "data-a"]);
        assert_eq!(body.children[0], AuthorNode::text("hello"));
        assert_eq!(body.children[1], AuthorNode::placeholder("sample"));
        assert_eq!(
            body.children[2],
            AuthorNode::fragment([AuthorNode::from(ComponentNode::new("Box"))])
        );
    }

    #[test]
    fn test_json_wrappers_match_builder_wrappers() {
        let pairs = [
            (json!({ "$type": "expression", "value": "1 + 1" }), RawValue::expression("1 + 1")),
            (json!({ "$type": "parameter", "value": "p" }), RawValue::parameter("p")),
            (json!({ "$type": "asset", "value": "a" }), RawValue::asset("a")),
            (json!({ "$type": "page", "pageId": "p" }), RawValue::page("p")),
            (
                json!({ "$type": "page", "pageId": "p", "instanceId": "i" }),
                RawValue::page_instance("p", "i"),
            ),
        ];

        for (json, wrapper) in pairs {
            assert_eq!(RawValue::from_json(json), wrapper);
        }
    }

    #[test]
    fn test_unknown_json_wrappers() {
        assert_eq!(
            RawValue::from_json(json!({ "$type": "resource", "value": "r" })),
            RawValue::Unsupported {
                kind: "resource".to_string()
            }
        );
        assert_eq!(
            RawValue::from_json(json!({ "$type": "asset" })),
            RawValue::Unsupported {
                kind: "asset without 'value'".to_string()
            }
        );
        assert_eq!(
            RawValue::from_json(json!({ "param": "value" })),
            RawValue::Literal(json!({ "param": "value" }))
        );
    }

    #[test]
    fn test_raw_value_kind() {
        assert_eq!(RawValue::from("x").kind(), "string");
        assert_eq!(RawValue::from(json!([1, 2])).kind(), "array");
        assert_eq!(RawValue::page("p").kind(), "page");
    }
}
