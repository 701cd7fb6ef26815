use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;

use resource_constgen::{GeneratorConfig, ResourceGenerator, TargetSyntax};

#[derive(Parser)]
#[command(name = "resource-constgen")]
#[command(version)]
#[command(
    about = "Generate a source file of named constants for bundled resource files",
    long_about = None
)]
struct Cli {
    /// Resource directory to scan; repeat to scan several in order
    #[arg(short = 'd', long = "resource-dir")]
    resource_dirs: Vec<PathBuf>,

    /// Dot-separated namespace identifier for the generated unit
    #[arg(short, long)]
    namespace: Option<String>,

    /// Base directory receiving generated sources
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Explicit JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language flavour of the generated unit
    #[arg(short, long, value_enum)]
    target: Option<TargetSyntax>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::discover(Path::new(".")),
    };

    if !cli.resource_dirs.is_empty() {
        config.resource_dirs = cli.resource_dirs;
    }
    if let Some(namespace) = cli.namespace {
        config.namespace = namespace;
    }
    if let Some(output_root) = cli.output_root {
        config.output_root = output_root;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }

    ensure!(
        !config.namespace.is_empty(),
        "a namespace identifier is required (pass --namespace or set it in the configuration file)"
    );

    let unit = ResourceGenerator::new(config)
        .run()
        .context("resource constant generation failed")?;

    println!(
        "Generated {} with {} constants",
        unit.output_path.display(),
        unit.constant_count
    );

    Ok(())
}
