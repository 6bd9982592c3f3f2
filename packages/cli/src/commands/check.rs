use crate::commands::{compile_tree, describe, load_tree};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use stencil_common::TreeStats;
use stencil_template::CompiledTemplate;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON author tree to check
    pub input: PathBuf,
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = load_tree(&args.input)
        .map_err(|e| anyhow!("Cannot read {}: {}", args.input.display(), e))?;

    println!(
        "{} {}",
        "🔍 Checking".bright_blue().bold(),
        args.input.display()
    );

    let stats = TreeStats::collect(&tree);
    println!(
        "   {} components, {} text, {} placeholders, {} style blocks",
        stats.components, stats.texts, stats.placeholders, stats.style_blocks
    );

    match compile_tree(&tree, &config.compile) {
        Ok(template) => {
            println!();
            for line in summary(&template) {
                println!("  {} {}", "✓".green(), line);
            }
            println!();
            println!("{} Template compiles", "✅".green());
            Ok(())
        }
        Err(err) => Err(anyhow!("\n{}", describe(&err))),
    }
}

fn summary(template: &CompiledTemplate) -> Vec<String> {
    vec![
        format!("{} instances", template.instances.len()),
        format!("{} props", template.props.len()),
        format!("{} breakpoints", template.breakpoints.len()),
        format!("{} style sources", template.style_sources.len()),
        format!(
            "{} style source selections",
            template.style_source_selections.len()
        ),
        format!("{} styles", template.styles.len()),
    ]
}
