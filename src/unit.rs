//! Rendering of the generated unit text.

use crate::config::TargetSyntax;
use crate::naming::ConstantEntry;

/// Line ending used throughout the generated unit, following the platform
/// convention.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line ending used throughout the generated unit, following the platform
/// convention.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// File name of the generated unit for a target syntax.
pub fn unit_file_name(target: TargetSyntax) -> &'static str {
    match target {
        TargetSyntax::Java => "Resources.java",
        TargetSyntax::Rust => "resources.rs",
    }
}

/// Render one tab-indented declaration line binding an identifier to its
/// path value as a string constant.
pub fn render_constant_line(target: TargetSyntax, entry: &ConstantEntry) -> String {
    match target {
        TargetSyntax::Java => format!(
            "\tpublic static final String {} = \"{}\";",
            entry.identifier, entry.value
        ),
        TargetSyntax::Rust => format!(
            "\tpub const {}: &str = \"{}\";",
            entry.identifier, entry.value
        ),
    }
}

/// Assemble the full generated unit from per-directory constant blocks.
///
/// Blocks are joined with the platform line ending in the order their
/// directories were supplied, so a directory without any files contributes a
/// single empty line. The joined body is wrapped in the namespace header and
/// closing delimiter of the chosen target syntax.
pub fn assemble_unit(target: TargetSyntax, namespace: &str, blocks: &[String]) -> String {
    let body = blocks.join(LINE_ENDING);
    match target {
        TargetSyntax::Java => format!(
            "package {namespace};{nl}{nl}public class Resources {{{nl}{body}{nl}}}{nl}",
            nl = LINE_ENDING
        ),
        TargetSyntax::Rust => format!(
            "// Generated resource constants for {namespace}.{nl}{nl}pub mod resources {{{nl}{body}{nl}}}{nl}",
            nl = LINE_ENDING
        ),
    }
}
