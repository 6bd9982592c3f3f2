use std::fmt;
use stencil_parser::ParseError;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Position of a node in the author tree as child indices from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Duplicate instance id '{id}' at {second} (already used at {first})")]
    DuplicateId {
        id: String,
        first: NodePath,
        second: NodePath,
    },

    #[error("Unsupported value for prop '{name}' on instance '{instance_id}': {kind}")]
    UnsupportedPropValue {
        instance_id: String,
        name: String,
        kind: String,
    },

    #[error("Prop '{name}' is declared more than once on instance '{instance_id}'")]
    DuplicateProp { instance_id: String, name: String },

    #[error("Attribute '{name}' at {path} must be a string, found {found}")]
    InvalidReservedAttribute {
        path: NodePath,
        name: String,
        found: &'static str,
    },

    #[error("Style block of instance '{instance_id}' failed to parse: {source}")]
    StyleParse {
        instance_id: String,
        block: String,
        source: ParseError,
    },
}
