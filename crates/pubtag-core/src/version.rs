use semver::Version;

/// Parses a version the way npm accepts it in `package.json`.
///
/// Surrounding whitespace and a leading `=` and/or `v` are dropped, so
/// `v1.2.0` and `=1.2.0` both parse as `1.2.0`.
///
/// # Errors
///
/// Returns an error if what remains is not a valid semver version.
pub fn parse_version(raw: &str) -> Result<Version, semver::Error> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('=').unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed)
}
