use crate::output::print_json;
use anyhow::Context;
use atlas_core::catalog::Catalog;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// Load a catalog file and report validation problems
    Check {
        /// Path to a catalog YAML file
        file: PathBuf,
    },
}

pub fn run(subcommand: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    let CatalogSubcommand::Check { file } = subcommand;

    let catalog = Catalog::load(&file)
        .with_context(|| format!("catalog '{}' failed validation", file.display()))?;

    if json {
        let actions: Vec<_> = catalog.iter().collect();
        return print_json(&actions);
    }

    println!("Catalog OK: {} directive(s)", catalog.len());
    for action in catalog.iter() {
        println!(
            "  {}  {}  [{}] requires {}",
            action.id, action.action_type, action.danger_level, action.required_role
        );
    }
    Ok(())
}
