use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use conftree::Tree;
use themegen::{generate, load_tree};

/// Generate theme config.php overrides from saved customizer options.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Options file (.json or .toml) holding the flat option mapping.
    options: PathBuf,

    /// Defaults file to diff against; values equal to a default are
    /// omitted from the output. Omitting the file means no defaults.
    #[arg(short, long)]
    defaults: Option<PathBuf>,

    /// Write the generated file here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Top-level option key to pass through unchanged (repeatable).
    #[arg(long = "keep", value_name = "KEY")]
    keepers: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = load_tree(&args.options)?;
    let defaults = match &args.defaults {
        Some(path) => load_tree(path)?,
        None => Tree::new(),
    };

    let literal = generate(&options, &defaults, &args.keepers);

    match &args.output {
        Some(path) => {
            fs::write(path, &literal)?;
            eprintln!("{}", format!("Wrote {}", path.display()).green().bold());
        }
        None => print!("{literal}"),
    }

    Ok(())
}
