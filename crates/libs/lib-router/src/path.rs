//! # Path Composition
//!
//! Joins route segments into the path string handed to a router, and splits
//! such a path back into its segments.
//!
//! A composed path always has one leading separator and exactly one
//! separator between adjacent segments:
//!
//! ```rust
//! use lib_router::path::format_router_path;
//!
//! let path = format_router_path(["accountCreation", "seedPhrase"]).unwrap();
//! assert_eq!(path, "/accountCreation/seedPhrase");
//! ```

use lib_core::{AppError, Result};

/// Router path separator.
pub const SEPARATOR: char = '/';

/// Check that a segment can stand as one level of a path.
///
/// Empty segments and segments carrying the separator are rejected: the
/// first makes the level boundary ambiguous, the second would add levels
/// through a single segment.
pub fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(AppError::InvalidArgument(
            "route segment cannot be empty".to_string(),
        ));
    }
    if segment.contains(SEPARATOR) {
        return Err(AppError::InvalidArgument(format!(
            "route segment '{}' contains the path separator '{}'",
            segment, SEPARATOR
        )));
    }
    Ok(())
}

/// Compose an ordered sequence of segments into a router path.
///
/// Pure and deterministic. Fails with [`AppError::InvalidArgument`] on an
/// empty sequence or an invalid segment.
pub fn format_router_path<I, S>(segments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut path = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        validate_segment(segment)?;
        path.push(SEPARATOR);
        path.push_str(segment);
    }

    if path.is_empty() {
        return Err(AppError::InvalidArgument(
            "route sequence must contain at least one segment".to_string(),
        ));
    }
    Ok(path)
}

/// Split a composed path back into its segments.
///
/// Accepts exactly what [`format_router_path`] produces.
pub fn split_router_path(path: &str) -> Result<Vec<&str>> {
    let rest = path.strip_prefix(SEPARATOR).ok_or_else(|| {
        AppError::InvalidArgument(format!("path '{}' must start with '{}'", path, SEPARATOR))
    })?;

    rest.split(SEPARATOR)
        .map(|segment| {
            validate_segment(segment)
                .map(|_| segment)
                .map_err(|_| AppError::InvalidArgument(format!("path '{}' has an empty segment", path)))
        })
        .collect()
}
