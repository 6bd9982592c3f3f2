//! Author trees deserialized from JSON

use serde_json::json;
use stencil_template::{compile, AuthorNode, CompileError, PageTarget, PropValue};

fn tree(value: serde_json::Value) -> AuthorNode {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_json_tree_compiles_like_builder_tree() {
    let from_json = tree(json!({
        "component": "Body",
        "attributes": {
            "ws:style": "color: red;",
            "data-expression": { "$type": "expression", "value": "1 + 1" },
            "data-page": { "$type": "page", "pageId": "pageId", "instanceId": "instanceId" }
        },
        "children": [
            { "component": "Box", "attributes": { "ws:id": "box" } },
            "text",
            { "placeholder": "sample" }
        ]
    }));

    let from_builder: AuthorNode = AuthorNode::component("Body")
        .style("color: red;")
        .attr("data-expression", stencil_template::RawValue::expression("1 + 1"))
        .attr(
            "data-page",
            stencil_template::RawValue::page_instance("pageId", "instanceId"),
        )
        .child(AuthorNode::component("Box").id("box"))
        .child("text")
        .child(AuthorNode::placeholder("sample"))
        .into();

    assert_eq!(compile(&from_json).unwrap(), compile(&from_builder).unwrap());
}

#[test]
fn test_attribute_order_is_preserved() {
    let template = compile(&tree(json!({
        "component": "Body",
        "attributes": { "z": 1, "a": 2, "m": 3 }
    })))
    .unwrap();

    let names: Vec<&str> = template.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_page_wrapper_without_instance() {
    let template = compile(&tree(json!({
        "component": "Link",
        "attributes": { "href": { "$type": "page", "pageId": "home" } }
    })))
    .unwrap();

    assert_eq!(
        template.props[0].value,
        PropValue::Page(PageTarget::Page("home".to_string()))
    );
}

#[test]
fn test_unknown_wrapper_fails_compilation() {
    let result = compile(&tree(json!({
        "component": "Body",
        "children": [{
            "component": "Image",
            "attributes": { "src": { "$type": "resource", "value": "r1" } }
        }]
    })));

    match result {
        Err(CompileError::UnsupportedPropValue {
            instance_id,
            name,
            kind,
        }) => {
            assert_eq!(instance_id, "1");
            assert_eq!(name, "src");
            assert_eq!(kind, "resource");
        }
        other => panic!("Expected UnsupportedPropValue, got {:?}", other),
    }
}

#[test]
fn test_non_string_style_block() {
    let result = compile(&tree(json!({
        "component": "Body",
        "attributes": { "ws:style": { "color": "red" } }
    })));

    assert!(matches!(
        result,
        Err(CompileError::InvalidReservedAttribute { found: "object", .. })
    ));
}

#[test]
fn test_fragment_root_from_json() {
    let template = compile(&tree(json!([
        { "component": "Box" },
        "between",
        { "component": "Text" }
    ])))
    .unwrap();

    assert_eq!(
        serde_json::to_value(&template.children).unwrap(),
        json!([
            { "type": "id", "value": "0" },
            { "type": "text", "value": "between" },
            { "type": "id", "value": "1" }
        ])
    );
}

#[test]
fn test_number_props_keep_their_value() {
    let template = compile(&tree(json!({
        "component": "Body",
        "attributes": { "data-zero": 0, "data-big": 9007199254740993u64, "data-half": 0.5 }
    })))
    .unwrap();

    let json = serde_json::to_string(&template.props).unwrap();
    assert!(json.contains(r#""type":"number","value":0}"#));
    assert!(json.contains(r#""type":"number","value":9007199254740993}"#));
    assert!(json.contains(r#""type":"number","value":0.5}"#));
}
