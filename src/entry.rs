//! Launcher spec model and generic-name derivation.

/// Everything needed to render one desktop entry.
///
/// Built once per invocation from the parsed arguments and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSpec {
    /// Display name, also the source of the output filename
    pub name: String,
    /// Short category label shown by some launchers
    pub generic_name: String,
    /// Command line to launch
    pub exec: String,
    /// Icon path, empty when not given
    pub icon: String,
    /// Tooltip text, empty when not given
    pub comment: String,
    /// Categories joined by commas when rendered
    pub categories: Vec<String>,
    /// Whether the app needs a terminal window
    pub terminal: bool,
    /// Install under /usr/share instead of the user's home
    pub system_wide: bool,
}

/// Derive a GenericName from a display name.
///
/// Hyphens and underscores become spaces, then each word is fully lowered
/// and title-cased: "my-cool-app" becomes "My Cool App". Mixed-case words
/// are normalized too ("MyApp" becomes "Myapp"); existing launchers depend
/// on this exact output, so the normalization is not configurable. Uses
/// Unicode default casing with no locale tailoring.
pub fn generic_name(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_name_hyphenated() {
        assert_eq!(generic_name("my-cool-app"), "My Cool App");
    }

    #[test]
    fn test_generic_name_underscored() {
        assert_eq!(generic_name("foo_bar"), "Foo Bar");
    }

    #[test]
    fn test_generic_name_empty() {
        assert_eq!(generic_name(""), "");
    }

    #[test]
    fn test_generic_name_separators_only() {
        assert_eq!(generic_name("-_- _"), "");
    }

    #[test]
    fn test_generic_name_normalizes_mixed_case() {
        assert_eq!(generic_name("MyApp"), "Myapp");
        assert_eq!(generic_name("GIMP-image_EDITOR"), "Gimp Image Editor");
    }

    #[test]
    fn test_generic_name_collapses_whitespace() {
        assert_eq!(generic_name("  two   words  "), "Two Words");
    }

    #[test]
    fn test_generic_name_idempotent() {
        let once = generic_name("some_long-app name");
        assert_eq!(generic_name(&once), once);
    }
}
