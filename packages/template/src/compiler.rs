//! Tree walker that turns an author tree into flat tables.
//!
//! Component nodes become instances in pre-order; attributes become props in
//! declaration order; `ws:style` blocks become one local style source per
//! instance plus one style per declaration on the base breakpoint.

use crate::author::{AuthorNode, ComponentNode, RawValue, ID_ATTRIBUTE, STYLE_ATTRIBUTE};
use crate::breakpoints::{ensure_base_breakpoint, BASE_BREAKPOINT_ID};
use crate::error::{CompileError, CompileResult, NodePath};
use crate::id_generator::IdAllocator;
use crate::model::*;
use crate::options::CompileOptions;
use crate::value::classify;
use std::collections::{HashMap, HashSet};
use stencil_parser::parse_style_block;
use tracing::{debug, info, instrument};

/// Single-use compiler holding the state of one pass
pub struct TemplateCompiler {
    ids: IdAllocator,
    /// Instance id -> position of the node that claimed it
    claimed: HashMap<String, NodePath>,
    output: CompiledTemplate,
}

impl TemplateCompiler {
    pub fn new(options: &CompileOptions) -> Self {
        Self {
            ids: IdAllocator::new(options.id_policy),
            claimed: HashMap::new(),
            output: CompiledTemplate::default(),
        }
    }

    /// Walk `root` and return the finished tables
    pub fn compile(mut self, root: &AuthorNode) -> CompileResult<CompiledTemplate> {
        let mut path = NodePath::root();
        let mut children = Vec::new();
        self.walk(root, &mut path, &mut children)?;

        self.output.children = children;
        ensure_base_breakpoint(&mut self.output);
        Ok(self.output)
    }

    fn walk(
        &mut self,
        node: &AuthorNode,
        path: &mut NodePath,
        out: &mut Vec<ChildRef>,
    ) -> CompileResult<()> {
        match node {
            AuthorNode::Fragment(children) => self.walk_children(children, path, out),
            AuthorNode::Text { value, placeholder } => {
                out.push(ChildRef::Text {
                    value: value.clone(),
                    placeholder: *placeholder,
                });
                Ok(())
            }
            AuthorNode::Component(component) => {
                let id = self.build_instance(component, path)?;
                out.push(ChildRef::Id { value: id });
                Ok(())
            }
        }
    }

    fn walk_children(
        &mut self,
        children: &[AuthorNode],
        path: &mut NodePath,
        out: &mut Vec<ChildRef>,
    ) -> CompileResult<()> {
        for (index, child) in children.iter().enumerate() {
            path.push(index);
            self.walk(child, path, out)?;
            path.pop();
        }
        Ok(())
    }

    fn build_instance(
        &mut self,
        component: &ComponentNode,
        path: &mut NodePath,
    ) -> CompileResult<String> {
        let explicit = match component.attribute(ID_ATTRIBUTE) {
            Some(raw) => Some(reserved_string(raw, ID_ATTRIBUTE, path)?),
            None => None,
        };
        let id = self.ids.next_id(explicit);
        self.claim(&id, path)?;

        debug!(id = %id, component = %component.component, path = %path, "Creating instance");

        // Push before visiting children so the table stays in pre-order
        let index = self.output.instances.len();
        self.output
            .instances
            .push(Instance::new(id.clone(), component.component.clone()));

        let mut seen = HashSet::new();
        for (name, raw) in &component.attributes {
            if !seen.insert(name.as_str()) {
                return Err(CompileError::DuplicateProp {
                    instance_id: id,
                    name: name.clone(),
                });
            }

            match name.as_str() {
                ID_ATTRIBUTE => {}
                STYLE_ATTRIBUTE => {
                    let css = reserved_string(raw, STYLE_ATTRIBUTE, path)?;
                    self.add_local_styles(&id, css)?;
                }
                _ => {
                    let value =
                        classify(raw).map_err(|err| CompileError::UnsupportedPropValue {
                            instance_id: id.clone(),
                            name: name.clone(),
                            kind: err.kind,
                        })?;
                    self.output.props.push(Prop::new(&id, name, value));
                }
            }
        }

        let mut children = Vec::new();
        self.walk_children(&component.children, path, &mut children)?;
        self.output.instances[index].children = children;

        Ok(id)
    }

    fn claim(&mut self, id: &str, path: &NodePath) -> CompileResult<()> {
        if let Some(first) = self.claimed.get(id) {
            return Err(CompileError::DuplicateId {
                id: id.to_string(),
                first: first.clone(),
                second: path.clone(),
            });
        }
        self.claimed.insert(id.to_string(), path.clone());
        Ok(())
    }

    #[instrument(skip(self, css), fields(len = css.len()))]
    fn add_local_styles(&mut self, instance_id: &str, css: &str) -> CompileResult<()> {
        let declarations =
            parse_style_block(css).map_err(|source| CompileError::StyleParse {
                instance_id: instance_id.to_string(),
                block: css.to_string(),
                source,
            })?;

        let style_source_id = local_style_source_id(instance_id);
        let mut source_created = false;
        for declaration in declarations {
            if !source_created {
                source_created = true;
                self.output.style_sources.push(StyleSource::local(instance_id));
                self.output
                    .style_source_selections
                    .push(StyleSourceSelection {
                        instance_id: instance_id.to_string(),
                        values: vec![style_source_id.clone()],
                    });
            }

            self.output.styles.push(Style {
                breakpoint_id: BASE_BREAKPOINT_ID.to_string(),
                style_source_id: style_source_id.clone(),
                state: declaration.state,
                property: declaration.property,
                value: declaration.value,
            });
        }

        debug!(styles = self.output.styles.len(), "Added local styles");
        Ok(())
    }
}

fn reserved_string<'a>(raw: &'a RawValue, name: &str, path: &NodePath) -> CompileResult<&'a str> {
    raw.as_str()
        .ok_or_else(|| CompileError::InvalidReservedAttribute {
            path: path.clone(),
            name: name.to_string(),
            found: raw.kind(),
        })
}

/// Compile an author tree with default options
pub fn compile(root: &AuthorNode) -> CompileResult<CompiledTemplate> {
    compile_with_options(root, &CompileOptions::default())
}

/// Compile an author tree. Every call starts from a fresh id counter.
#[instrument(skip_all, fields(id_policy = ?options.id_policy))]
pub fn compile_with_options(
    root: &AuthorNode,
    options: &CompileOptions,
) -> CompileResult<CompiledTemplate> {
    info!("Starting template compilation");

    let template = TemplateCompiler::new(options).compile(root)?;

    info!(
        instances = template.instances.len(),
        props = template.props.len(),
        styles = template.styles.len(),
        "Compiled template"
    );
    Ok(template)
}
