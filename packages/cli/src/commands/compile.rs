use crate::commands::{compile_tree, describe, load_tree};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use stencil_template::CompiledTemplate;
use tracing::info;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// JSON author tree to compile
    pub input: PathBuf,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the emitted JSON (overrides config)
    #[arg(long)]
    pub pretty: bool,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = load_tree(&args.input)
        .map_err(|e| anyhow!("Cannot read {}: {}", args.input.display(), e))?;

    let template =
        compile_tree(&tree, &config.compile).map_err(|err| anyhow!("\n{}", describe(&err)))?;
    let output = render(&template, args.pretty || config.pretty)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, output)?;
            info!(path = %out.display(), "Wrote compiled template");
            eprintln!(
                "  {} {} → {}",
                "✓".green(),
                args.input.display(),
                out.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn render(template: &CompiledTemplate, pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(template)?
    } else {
        serde_json::to_string(template)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_template::{compile, AuthorNode};

    #[test]
    fn test_render_compact_and_pretty() {
        let tree: AuthorNode = AuthorNode::component("Body").into();
        let template = compile(&tree).unwrap();

        let compact = render(&template, false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(
            r#"{"instances":[{"type":"instance","id":"0","component":"Body","children":[]}]"#
        ));

        let pretty = render(&template, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }
}
