//! Account database records.

/// One entry of the account database (`/etc/passwd` format).
///
/// The hashed-password field of the source line is skipped during parsing and
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdRecord {
    /// Login name.
    pub name: String,
    /// Numeric user ID.
    pub uid: u32,
    /// Numeric primary group ID.
    pub gid: u32,
    /// Display name (comment/"gecos" field).
    pub gecos: String,
    /// Home directory path.
    pub home_dir: String,
    /// Login shell path.
    pub shell: String,
}

impl PasswdRecord {
    /// Parse one colon-separated account line.
    ///
    /// Requires exactly seven fields with numeric uid/gid; returns `None`
    /// otherwise.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(':');

        let name = fields.next()?;
        let _password = fields.next()?;
        let uid = fields.next()?.parse().ok()?;
        let gid = fields.next()?.parse().ok()?;
        let gecos = fields.next()?;
        let home_dir = fields.next()?;
        let shell = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            uid,
            gid,
            gecos: gecos.to_string(),
            home_dir: home_dir.to_string(),
            shell: shell.to_string(),
        })
    }
}
