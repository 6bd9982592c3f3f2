//! Attribute value classification

use crate::author::RawValue;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

/// Typed prop payload. Serializes as `{"type": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PropValue {
    String(String),
    Number(Number),
    Boolean(bool),
    Json(Value),
    Expression(String),
    Parameter(String),
    Asset(String),
    Page(PageTarget),
}

impl PropValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::String(_) => "string",
            PropValue::Number(_) => "number",
            PropValue::Boolean(_) => "boolean",
            PropValue::Json(_) => "json",
            PropValue::Expression(_) => "expression",
            PropValue::Parameter(_) => "parameter",
            PropValue::Asset(_) => "asset",
            PropValue::Page(_) => "page",
        }
    }
}

/// A page, or an instance on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageTarget {
    Instance {
        #[serde(rename = "pageId")]
        page_id: String,
        #[serde(rename = "instanceId")]
        instance_id: String,
    },
    Page(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsupported value wrapper '{kind}'")]
pub struct UnsupportedValue {
    pub kind: String,
}

impl UnsupportedValue {
    fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Classify a raw attribute value.
///
/// Wrappers win over literals; remaining strings, numbers and booleans keep
/// their type and every other literal becomes `json`.
pub fn classify(raw: &RawValue) -> Result<PropValue, UnsupportedValue> {
    match raw {
        RawValue::Expression(code) => Ok(PropValue::Expression(code.clone())),
        RawValue::Parameter(id) => Ok(PropValue::Parameter(id.clone())),
        RawValue::Asset(id) => Ok(PropValue::Asset(id.clone())),
        RawValue::Page {
            page_id,
            instance_id,
        } => Ok(PropValue::Page(page_target(page_id, instance_id.as_deref()))),
        RawValue::Unsupported { kind } => Err(UnsupportedValue::new(kind.as_str())),
        RawValue::Literal(value) => Ok(classify_literal(value)),
    }
}

fn page_target(page_id: &str, instance_id: Option<&str>) -> PageTarget {
    match instance_id {
        Some(instance_id) => PageTarget::Instance {
            page_id: page_id.to_string(),
            instance_id: instance_id.to_string(),
        },
        None => PageTarget::Page(page_id.to_string()),
    }
}

fn classify_literal(value: &Value) -> PropValue {
    match value {
        Value::String(s) => PropValue::String(s.clone()),
        Value::Bool(b) => PropValue::Boolean(*b),
        Value::Number(n) => PropValue::Number(n.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => PropValue::Json(value.clone()),
    }
}
