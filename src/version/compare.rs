use crate::version::types::{Version, VersionParseError};

/// Returns true only if `a` is strictly greater than `b`
///
/// Equal versions (including ones that differ only in trailing zeros or a
/// `v` prefix) are never greater than each other.
pub fn greater_than(a: &Version, b: &Version) -> bool {
    a > b
}

/// Parse both strings and compare them with [`greater_than`]
///
/// Fails instead of guessing when either side is not a version, so an
/// unreadable version can never pass for the lowest one.
pub fn greater_than_str(a: &str, b: &str) -> Result<bool, VersionParseError> {
    Ok(greater_than(&Version::parse(a)?, &Version::parse(b)?))
}
