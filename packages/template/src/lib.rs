//! Template compiler.
//!
//! Converts an author tree of components, attributes and children into flat
//! tables: instances, props, style sources, style source selections,
//! breakpoints and styles.
//!
//! ```
//! use stencil_template::{compile, AuthorNode, ChildRef};
//!
//! let tree = AuthorNode::component("Body")
//!     .style("color: red;")
//!     .child(AuthorNode::component("Box"))
//!     .child(AuthorNode::component("Box"));
//!
//! let template = compile(&tree.into()).unwrap();
//! assert_eq!(template.children, vec![ChildRef::id("0")]);
//! assert_eq!(template.instances.len(), 3);
//! assert_eq!(template.styles.len(), 1);
//! ```

pub mod author;
pub mod breakpoints;
pub mod compiler;
pub mod error;
pub mod id_generator;
pub mod model;
pub mod options;
pub mod value;

pub use author::{
    AuthorNode, ComponentNode, RawValue, ID_ATTRIBUTE, STYLE_ATTRIBUTE, WRAPPER_TAG,
};
pub use breakpoints::BASE_BREAKPOINT_ID;
pub use compiler::{compile, compile_with_options, TemplateCompiler};
pub use error::{CompileError, CompileResult, NodePath};
pub use id_generator::{IdAllocator, IdPolicy};
pub use model::*;
pub use options::CompileOptions;
pub use value::{classify, PageTarget, PropValue, UnsupportedValue};

pub use stencil_parser::{StyleValue, Unit};
