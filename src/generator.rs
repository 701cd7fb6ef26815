//! Generation pipeline: scan resource directories, derive constants and
//! persist the generated unit.

use std::collections::BTreeSet;
use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use crate::config::{GeneratorConfig, TargetSyntax};
use crate::error::GenerateError;
use crate::naming::constant_entry;
use crate::scan::walk_resource_dir;
use crate::unit::{assemble_unit, render_constant_line, unit_file_name, LINE_ENDING};

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct GeneratedUnit {
    /// Path of the written unit file.
    pub output_path: PathBuf,
    /// Full text written to the unit file.
    pub text: String,
    /// Number of constants emitted across all resource directories.
    pub constant_count: usize,
}

/// Builder-style entry point for configuring and running one generation
/// pass.
pub struct ResourceGenerator {
    config: GeneratorConfig,
}

impl ResourceGenerator {
    /// Create a generator for the provided configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Add a resource directory to scan.
    ///
    /// Can be called multiple times; constants appear in the order
    /// directories were added.
    pub fn resource_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.resource_dirs.push(path.into());
        self
    }

    /// Set the dot-separated namespace identifier for the generated unit.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the base directory receiving generated sources.
    pub fn output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_root = path.into();
        self
    }

    /// Set the language flavour of the generated unit.
    pub fn target(mut self, target: TargetSyntax) -> Self {
        self.config.target = target;
        self
    }

    /// Run the generation pass.
    ///
    /// Every resource directory is scanned before anything is written, so a
    /// scan failure leaves any previously generated output untouched. The
    /// unit file itself is overwritten in place without an atomic rename; a
    /// truncated file from a crash mid-write is acceptable for a
    /// regenerable build artifact.
    pub fn run(self) -> Result<GeneratedUnit, GenerateError> {
        let config = self.config;

        let mut blocks = Vec::new();
        let mut seen_identifiers = BTreeSet::new();
        let mut constant_count = 0usize;

        for dir in &config.resource_dirs {
            let files = walk_resource_dir(dir)?;

            let mut lines = Vec::with_capacity(files.len());
            for relative in &files {
                let entry = constant_entry(relative);
                if !seen_identifiers.insert(entry.identifier.clone()) {
                    eprintln!(
                        "warning: duplicate constant identifier {} derived from {}; the later definition shadows the earlier one",
                        entry.identifier,
                        relative.display()
                    );
                }
                lines.push(render_constant_line(config.target, &entry));
                constant_count += 1;
            }
            blocks.push(lines.join(LINE_ENDING));
        }

        let text = assemble_unit(config.target, &config.namespace, &blocks);
        let output_path = write_unit(&config, &text)?;

        Ok(GeneratedUnit {
            output_path,
            text,
            constant_count,
        })
    }
}

/// Run a generation pass for the provided configuration.
pub fn generate(config: GeneratorConfig) -> Result<GeneratedUnit, GenerateError> {
    ResourceGenerator::new(config).run()
}

/// Compute the output location and persist the unit text.
///
/// The unit lands at `<output-root>/resources/<namespace with dots as path
/// separators>/<unit file>`; missing intermediate directories are created
/// and existing content is overwritten.
fn write_unit(config: &GeneratorConfig, text: &str) -> Result<PathBuf, GenerateError> {
    let namespace_dirs = config.namespace.replace('.', MAIN_SEPARATOR_STR);
    let unit_dir = config
        .output_root
        .join("resources")
        .join(&namespace_dirs);

    fs::create_dir_all(&unit_dir).map_err(|source| GenerateError::Write {
        path: unit_dir.clone(),
        source,
    })?;

    let output_path = unit_dir.join(unit_file_name(config.target));
    fs::write(&output_path, text).map_err(|source| GenerateError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(output_path)
}
