//! String utility functions for naming template entities.

/// Reduce `name` to its ASCII letters and digits
///
/// CloudFormation logical ids must be alphanumeric, so host names are
/// flattened before they are appended to one.
///
/// ```text
/// test.testdomain.com -> testtestdomaincom
/// my-site_v2.example.org -> mysitev2exampleorg
/// ```
pub fn alphanumeric_suffix(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Logical id `base` made unique per site by `suffix`
pub fn logical_id(base: &str, suffix: &str) -> String {
    format!("{base}{suffix}")
}
