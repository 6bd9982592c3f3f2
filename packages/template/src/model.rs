//! Output tables produced by one compilation

use crate::value::PropValue;
use serde::{Deserialize, Serialize};
use stencil_parser::StyleValue;

/// Compiled component instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "instance")]
pub struct Instance {
    pub id: String,
    pub component: String,
    pub children: Vec<ChildRef>,
}

impl Instance {
    pub fn new(id: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component: component.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ChildRef>) -> Self {
        self.children = children;
        self
    }
}

/// Reference from a parent to one of its children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChildRef {
    Id {
        value: String,
    },
    Text {
        value: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        placeholder: bool,
    },
}

impl ChildRef {
    pub fn id(value: impl Into<String>) -> Self {
        ChildRef::Id {
            value: value.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        ChildRef::Text {
            value: value.into(),
            placeholder: false,
        }
    }

    pub fn placeholder(value: impl Into<String>) -> Self {
        ChildRef::Text {
            value: value.into(),
            placeholder: true,
        }
    }
}

/// Typed attribute attached to an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    pub id: String,
    pub instance_id: String,
    pub name: String,
    #[serde(flatten)]
    pub value: PropValue,
}

impl Prop {
    pub fn new(instance_id: &str, name: &str, value: PropValue) -> Self {
        Self {
            id: prop_id(instance_id, name),
            instance_id: instance_id.to_string(),
            name: name.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSourceKind {
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StyleSourceKind,
}

impl StyleSource {
    pub fn local(instance_id: &str) -> Self {
        Self {
            id: local_style_source_id(instance_id),
            kind: StyleSourceKind::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSourceSelection {
    pub instance_id: String,
    pub values: Vec<String>,
}

/// One declaration bound to a breakpoint and style source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub breakpoint_id: String,
    pub style_source_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub property: String,
    pub value: StyleValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub id: String,
    pub label: String,
}

/// Result of compiling one author tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTemplate {
    pub instances: Vec<Instance>,
    /// Content of the compiled root
    pub children: Vec<ChildRef>,
    pub props: Vec<Prop>,
    pub breakpoints: Vec<Breakpoint>,
    pub style_sources: Vec<StyleSource>,
    pub style_source_selections: Vec<StyleSourceSelection>,
    pub styles: Vec<Style>,
}

impl CompiledTemplate {
    pub fn instance(&self, id: &str) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn props_of<'a>(&'a self, instance_id: &'a str) -> impl Iterator<Item = &'a Prop> + 'a {
        self.props
            .iter()
            .filter(move |prop| prop.instance_id == instance_id)
    }
}

pub fn prop_id(instance_id: &str, name: &str) -> String {
    format!("{}:{}", instance_id, name)
}

pub fn local_style_source_id(instance_id: &str) -> String {
    format!("{}:ws:style", instance_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_shape() {
        let instance = Instance::new("0", "Body").with_children(vec![
            ChildRef::id("1"),
            ChildRef::text("children"),
            ChildRef::placeholder("Placeholder text"),
        ]);

        assert_eq!(
            serde_json::to_value(&instance).unwrap(),
            json!({
                "type": "instance",
                "id": "0",
                "component": "Body",
                "children": [
                    { "type": "id", "value": "1" },
                    { "type": "text", "value": "children" },
                    { "type": "text", "value": "Placeholder text", "placeholder": true }
                ]
            })
        );
    }

    #[test]
    fn test_prop_shape() {
        let prop = Prop::new("0", "data-string", PropValue::String("string".to_string()));
        assert_eq!(
            serde_json::to_value(&prop).unwrap(),
            json!({
                "id": "0:data-string",
                "instanceId": "0",
                "name": "data-string",
                "type": "string",
                "value": "string"
            })
        );
    }

    #[test]
    fn test_style_source_shape() {
        assert_eq!(
            serde_json::to_value(StyleSource::local("1")).unwrap(),
            json!({ "id": "1:ws:style", "type": "local" })
        );
    }

    #[test]
    fn test_instance_round_trips_through_json() {
        let instance = Instance::new("a", "Box").with_children(vec![ChildRef::text("x")]);
        let json = serde_json::to_string(&instance).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instance);
    }
}
