//! Identifier and path-value derivation for discovered resource files.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// One generated (identifier, path value) pair for a resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    /// Sanitized uppercase identifier derived from the relative path.
    pub identifier: String,
    /// Root-relative path value with a leading separator.
    pub value: String,
}

/// Derive the constant entry for a file from its path relative to the
/// resource directory root.
///
/// The identifier is the normalized relative path with every character
/// outside `[A-Za-z0-9_]` replaced by its own underscore, uppercased.
/// Consecutive replacements are deliberately not collapsed and a leading
/// digit is left untouched, so two paths differing only in non-word
/// characters collide; the generator reports such collisions but does not
/// reject them.
///
/// The value is the same relative path in platform separator form, prefixed
/// with a separator when one is not already present.
pub fn constant_entry(relative_path: &Path) -> ConstantEntry {
    let rendered = normalize(relative_path).to_string_lossy().into_owned();

    let identifier: String = rendered
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    let value = if rendered.starts_with(MAIN_SEPARATOR) {
        rendered
    } else {
        format!("{MAIN_SEPARATOR}{rendered}")
    };

    ConstantEntry { identifier, value }
}

/// Lexically resolve `.` and `..` components of a relative path.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn word_only_paths_map_directly() {
        let entry = constant_entry(Path::new("config.json"));
        assert_eq!(entry.identifier, "CONFIG_JSON");
        assert_eq!(entry.value, platform("/config.json"));
    }

    #[test]
    fn separators_and_punctuation_become_underscores() {
        let entry = constant_entry(&PathBuf::from("a").join("b-c.txt"));
        assert_eq!(entry.identifier, "A_B_C_TXT");
        assert_eq!(entry.value, platform("/a/b-c.txt"));
    }

    #[test]
    fn consecutive_non_word_characters_are_not_collapsed() {
        let entry = constant_entry(Path::new("a--b.txt"));
        assert_eq!(entry.identifier, "A__B_TXT");
        assert_eq!(entry.value, platform("/a--b.txt"));
    }

    #[test]
    fn leading_digits_are_left_untouched() {
        let entry = constant_entry(Path::new("1logo.png"));
        assert_eq!(entry.identifier, "1LOGO_PNG");
    }

    #[test]
    fn underscores_survive_sanitization() {
        let entry = constant_entry(Path::new("my_file.txt"));
        assert_eq!(entry.identifier, "MY_FILE_TXT");
        assert_eq!(entry.value, platform("/my_file.txt"));
    }

    #[test]
    fn current_dir_components_are_resolved() {
        let entry = constant_entry(&PathBuf::from(".").join("images").join("logo.png"));
        assert_eq!(entry.identifier, "IMAGES_LOGO_PNG");
        assert_eq!(entry.value, platform("/images/logo.png"));
    }

    #[test]
    fn parent_dir_components_are_resolved() {
        let entry = constant_entry(&PathBuf::from("images").join("..").join("logo.png"));
        assert_eq!(entry.identifier, "LOGO_PNG");
        assert_eq!(entry.value, platform("/logo.png"));
    }

    #[test]
    fn paths_differing_only_in_non_word_characters_collide() {
        let dash = constant_entry(Path::new("a-b.txt"));
        let space = constant_entry(Path::new("a b.txt"));
        assert_eq!(dash.identifier, space.identifier);
        assert_ne!(dash.value, space.value);
    }
}
