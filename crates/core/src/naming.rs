//! Name normalization for scenes and campaigns.
//!
//! Names are stored and compared in their normalized form so that
//! `" zone 1 "` and `"ZONE 1"` refer to the same thing.

/// Canonicalize a display name: trim surrounding whitespace, then uppercase.
///
/// # Examples
///
/// ```
/// use scenebook_core::naming::normalize;
///
/// assert_eq!(normalize(" zone 1 "), "ZONE 1");
/// assert_eq!(normalize("Raid"), "RAID");
/// ```
pub fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Whether two names refer to the same thing after normalization.
pub fn same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
