//! Name commands carried by serial lines
//!
//! A line is either `NAME:<name>` or a bare name. Any other content is
//! treated as a bare name; no other commands exist.

/// Prefix marking an explicit name command
pub const NAME_PREFIX: &str = "NAME:";

/// Errors produced while parsing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Nothing left after trimming and stripping the prefix
    EmptyName,
}

/// A parsed "set name" command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NameCommand<'a> {
    /// Candidate user name, trimmed, never empty
    pub name: &'a str,
    /// Whether the line used the `NAME:` prefix
    pub prefixed: bool,
}

/// Parse one raw line into a name command
///
/// Trims the line; if it starts with [`NAME_PREFIX`] the prefix is stripped
/// and the remainder trimmed again. An empty remainder is an error.
pub fn parse_name_command(raw: &str) -> Result<NameCommand<'_>, CommandError> {
    let line = raw.trim();

    let (name, prefixed) = match line.strip_prefix(NAME_PREFIX) {
        Some(rest) => (rest.trim(), true),
        None => (line, false),
    };

    if name.is_empty() {
        return Err(CommandError::EmptyName);
    }

    Ok(NameCommand { name, prefixed })
}
