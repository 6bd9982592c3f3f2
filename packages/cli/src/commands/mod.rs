pub mod check;
pub mod compile;

pub use check::{check, CheckArgs};
pub use compile::{compile, CompileArgs};

use std::fs;
use std::path::Path;
use stencil_common::{CommonError, CommonResult};
use stencil_parser::format_error;
use stencil_template::{
    compile_with_options, AuthorNode, CompileError, CompileOptions, CompiledTemplate,
};

/// Read a JSON author tree from disk
pub fn load_tree(path: &Path) -> CommonResult<AuthorNode> {
    let content = fs::read_to_string(path)?;
    let tree = serde_json::from_str(&content)?;
    Ok(tree)
}

pub fn compile_tree(tree: &AuthorNode, options: &CompileOptions) -> CommonResult<CompiledTemplate> {
    let template = compile_with_options(tree, options)?;
    Ok(template)
}

/// Render style errors against their block, everything else as a one-liner
pub fn describe(err: &CommonError) -> String {
    match err {
        CommonError::Compile(CompileError::StyleParse {
            instance_id,
            block,
            source,
        }) => {
            let name = format!("{}:ws:style", instance_id);
            format_error(block, &name, source)
        }
        other => other.to_string(),
    }
}
