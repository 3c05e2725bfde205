//! Common types for version handling

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string cannot be read as a version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },
}

/// A parsed module version
///
/// Two notations are accepted:
/// - decimal versions with a single dot and no `v` prefix (`0.009`, `1.10`,
///   `1.23_01`). Underscores are dropped and every fractional digit becomes
///   its own component, so the fraction orders as a number: `0.01` > `0.009`
///   and `1.9` > `1.10`.
/// - dotted versions with a `v` prefix or more than one dot (`v1.2.30`,
///   `1.2.3`, `1.2.3_4`), split into integer components on `.` and `_`.
///
/// Ordering is numeric per component, left to right, with the shorter
/// version padded with zeros, so `1.2` and `1.2.0` are equal.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    parts: Vec<u64>,
}

impl Version {
    /// Parse a version string
    ///
    /// Examples:
    /// - "1.2.3" -> [1, 2, 3]
    /// - "v1.2.30" -> [1, 2, 30]
    /// - "0.009" -> [0, 0, 0, 9]
    /// - "1.23_01" -> [1, 2, 3, 0, 1]
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let trimmed = input.trim();
        let dotted = trimmed.strip_prefix('v');
        let digits = dotted.unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts = match digits.split_once('.') {
            Some((integer, fraction)) if dotted.is_none() && !fraction.contains('.') => {
                decimal_parts(input, integer, fraction)?
            }
            _ => digits
                .split(['.', '_'])
                .map(|component| integer_component(input, component))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            original: trimmed.to_string(),
            parts,
        })
    }

    /// Numeric components in declaration order
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// The version exactly as it was declared
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Integer part followed by one component per fractional digit
fn decimal_parts(
    input: &str,
    integer: &str,
    fraction: &str,
) -> Result<Vec<u64>, VersionParseError> {
    let integer = integer.replace('_', "");
    let fraction = fraction.replace('_', "");
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input, &fraction));
    }

    let mut parts = vec![integer_component(input, &integer)?];
    parts.extend(fraction.bytes().map(|b| u64::from(b - b'0')));
    Ok(parts)
}

fn integer_component(input: &str, component: &str) -> Result<u64, VersionParseError> {
    let valid = !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit());
    valid
        .then(|| component.parse::<u64>().ok())
        .flatten()
        .ok_or_else(|| invalid(input, component))
}

fn invalid(input: &str, component: &str) -> VersionParseError {
    VersionParseError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let left = self.parts.get(i).copied().unwrap_or(0);
                let right = other.parts.get(i).copied().unwrap_or(0);
                left.cmp(&right)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
