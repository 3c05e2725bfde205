//! Common types for parsers

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Package separator in module references (e.g., "My::Module")
pub const MODULE_SEPARATOR: &str = "::";

/// A validated module reference such as `My::Module`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    name: String,
}

impl ModuleName {
    /// Returns the module name as written
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Name segments between separators
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split(MODULE_SEPARATOR)
    }

    /// Relative file path of the module, e.g. `My/Module.pm` for `My::Module`
    ///
    /// The path is built from segments, so it is the same on every platform
    /// apart from the native separator.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path: PathBuf = self.segments().collect();
        path.set_extension(extension);
        path
    }
}

impl FromStr for ModuleName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || !name.split(MODULE_SEPARATOR).all(is_identifier) {
            return Err(());
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My::Module", "My/Module.pm")]
    #[case("Test::GreaterVersion", "Test/GreaterVersion.pm")]
    #[case("strict", "strict.pm")]
    #[case("  Foo::Bar::Baz_2 ", "Foo/Bar/Baz_2.pm")]
    fn relative_path_maps_separators_to_segments(#[case] input: &str, #[case] expected: &str) {
        let module: ModuleName = input.parse().unwrap();
        let expected: PathBuf = expected.split('/').collect();
        assert_eq!(module.relative_path("pm"), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("My::")]
    #[case("::Module")]
    #[case("My:::Module")]
    #[case("My-Module")]
    #[case("My/Module")]
    #[case("1Module")]
    #[case("../../etc/passwd")]
    fn from_str_rejects_invalid_names(#[case] input: &str) {
        assert!(input.parse::<ModuleName>().is_err());
    }

    #[test]
    fn display_uses_trimmed_name() {
        let module: ModuleName = " My::Module ".parse().unwrap();
        assert_eq!(module.to_string(), "My::Module");
        assert_eq!(module.segments().collect::<Vec<_>>(), vec!["My", "Module"]);
    }
}
