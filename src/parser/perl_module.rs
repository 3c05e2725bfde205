//! Perl module version extractor
//!
//! Reads the declared version of a `.pm` file by pattern matching, without
//! running any of its code. Only literal values are evaluated.
//!
//! Recognised declarations (first one wins):
//! - `our $VERSION = '1.02';`, `$VERSION = "1.02";`, `my $VERSION = 1.02;`
//! - `$My::Module::VERSION = '1.02';`
//! - `our $VERSION = qv('1.2.3');`, `version->declare('v1.2.3')`
//! - `package My::Module 1.23;`, `package My::Module v1.2.3 { ... }`
//!
//! Unquoted numbers keep their digits as written (`1.10` stays `1.10`) so
//! that they compare the same way as their quoted form. Underscores are
//! dropped from them as perl does, so `1.23_01` reads as `1.2301`; only a
//! quoted `'1.23_01'` keeps its trial marker. POD blocks, comment lines and
//! anything after `__END__` or `__DATA__` are skipped.

use regex::Regex;

use crate::parser::traits::{ExtractError, VersionExtractor};

/// Extractor for Perl module files
pub struct PerlModuleExtractor {
    /// Regex for a versioned package statement: `package Name 1.23;`
    package_re: Regex,
    /// Regex for an assignment to `$VERSION`, capturing the right-hand side
    assignment_re: Regex,
    /// Regex for version constructor wrappers: `qv(...)`, `version->declare(...)`
    wrapper_re: Regex,
    /// Regex for an unquoted number or v-string
    bare_re: Regex,
}

impl PerlModuleExtractor {
    pub fn new() -> Self {
        Self {
            package_re: Regex::new(r"^\s*package\s+[A-Za-z_][\w:]*\s+(v?\d[\d._]*)\s*[;{]")
                .unwrap(),
            assignment_re: Regex::new(
                r"(?:^|[;{\s])(?:(?:our|my|local)\s+)?\$(?:[A-Za-z_]\w*::)*VERSION\s*=\s*([^=~\s].*?)\s*;",
            )
            .unwrap(),
            wrapper_re: Regex::new(
                r"^(?:(?:version::)?qv|version\s*->\s*(?:declare|parse|new))\s*\(\s*(.*?)\s*\)$",
            )
            .unwrap(),
            bare_re: Regex::new(r"^v?\d[\d._]*$").unwrap(),
        }
    }

    /// Evaluate the right-hand side of a `$VERSION` assignment
    fn evaluate(&self, expression: &str) -> Result<String, ExtractError> {
        let mut value = expression.trim();

        if let Some(caps) = self.wrapper_re.captures(value) {
            value = caps.get(1).map_or("", |m| m.as_str());
        }
        while let Some(inner) = value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
            value = inner.trim();
        }

        if let Some(quoted) = unquote(value) {
            return Ok(quoted.trim().to_string());
        }

        if self.bare_re.is_match(value) {
            if value.starts_with('v') {
                return Ok(value.to_string());
            }
            // perl ignores underscores in numeric literals
            return Ok(value.replace('_', ""));
        }

        Err(ExtractError::NotLiteral(expression.trim().to_string()))
    }
}

impl Default for PerlModuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionExtractor for PerlModuleExtractor {
    fn extract(&self, content: &str) -> Result<String, ExtractError> {
        let mut in_pod = false;

        for line in content.lines() {
            if line.starts_with("=cut") {
                in_pod = false;
                continue;
            }
            if line.starts_with('=') && line[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                in_pod = true;
                continue;
            }
            if in_pod {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if trimmed == "__END__" || trimmed == "__DATA__" {
                break;
            }

            if let Some(caps) = self.package_re.captures(line) {
                return Ok(caps[1].to_string());
            }

            if let Some(caps) = self.assignment_re.captures(line) {
                return self.evaluate(&caps[1]);
            }
        }

        Err(ExtractError::NotDeclared)
    }
}

/// Strip matching single or double quotes
fn unquote(value: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|quote| {
        value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
            .filter(|inner| !inner.contains(quote))
    })
}
