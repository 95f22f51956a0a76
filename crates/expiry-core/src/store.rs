//! Read-only access to the platform account and aging databases.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{PasswdRecord, ShadowRecord};

/// Default location of the account database.
const PASSWD_PATH: &str = "/etc/passwd";

/// Default location of the aging database.
const SHADOW_PATH: &str = "/etc/shadow";

/// Read-only view over the account and aging database files.
///
/// The store never writes, so concurrent readers are safe. Lookups scan for
/// the first line whose name field matches and parse only that line;
/// unrelated malformed entries cannot fail a lookup.
#[derive(Debug, Clone)]
pub struct FileStore {
    passwd_path: PathBuf,
    shadow_path: PathBuf,
}

impl FileStore {
    /// Create a store over the platform's database locations.
    #[must_use]
    pub fn new() -> Self {
        Self::with_paths(PASSWD_PATH, SHADOW_PATH)
    }

    /// Create a store over arbitrary database files.
    ///
    /// Used by tests; behaves identically to [`FileStore::new`].
    #[must_use]
    pub fn with_paths(passwd: impl Into<PathBuf>, shadow: impl Into<PathBuf>) -> Self {
        Self {
            passwd_path: passwd.into(),
            shadow_path: shadow.into(),
        }
    }

    /// Look up the account record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no entry matches, [`Error::Io`] when
    /// the database cannot be read, or [`Error::Malformed`] when the matching
    /// entry does not parse.
    pub fn account(&self, name: &str) -> Result<PasswdRecord> {
        debug!(path = %self.passwd_path.display(), user = name, "account lookup");
        scan(&self.passwd_path, name, PasswdRecord::parse_line)
    }

    /// Look up the aging record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no entry matches, [`Error::Io`] when
    /// the database cannot be read, or [`Error::Malformed`] when the matching
    /// entry does not parse.
    pub fn aging(&self, name: &str) -> Result<ShadowRecord> {
        debug!(path = %self.shadow_path.display(), user = name, "aging lookup");
        scan(&self.shadow_path, name, ShadowRecord::parse_line)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `path` for the first entry named `name` and parse it with `parse`.
fn scan<T>(path: &Path, name: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let contents = fs::read_to_string(path)?;

    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.split(':').next() != Some(name) {
            continue;
        }
        return parse(line).ok_or(Error::Malformed { line: index + 1 });
    }

    debug!(path = %path.display(), user = name, "no matching entry");
    Err(Error::NotFound(name.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PASSWD: &str = "\
root:x:0:0:root:/root:/bin/bash
alice:x:1000:1000:Alice Example:/home/alice:/bin/bash
broken:x:not-a-uid:1000:Broken:/home/broken:/bin/bash
";

    const SHADOW: &str = "\
root:*:19700:0:99999:7:::
alice:$6$salt$hash:19800:0:90:7:30::
broken:*:soon:0:90:7:::
";

    fn store(dir: &TempDir) -> FileStore {
        let passwd = dir.path().join("passwd");
        let shadow = dir.path().join("shadow");
        std::fs::write(&passwd, PASSWD).unwrap();
        std::fs::write(&shadow, SHADOW).unwrap();
        FileStore::with_paths(passwd, shadow)
    }

    #[test]
    fn account_hit() {
        let dir = TempDir::new().unwrap();
        let record = store(&dir).account("alice").unwrap();
        assert_eq!(record.gecos, "Alice Example");
        assert_eq!(record.uid, 1000);
    }

    #[test]
    fn account_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).account("mallory").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "mallory"));
    }

    #[test]
    fn account_unreadable_store() {
        let missing = PathBuf::from("/nonexistent/passwd");
        let store = FileStore::with_paths(missing.clone(), missing);
        assert!(matches!(store.account("alice"), Err(Error::Io(_))));
    }

    #[test]
    fn account_malformed_matching_entry() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).account("broken").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 3 }));
    }

    #[test]
    fn malformed_non_matching_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let passwd = dir.path().join("passwd");
        std::fs::write(
            &passwd,
            "garbage line\nalice:x:1000:1000:Alice:/home/alice:/bin/bash\n",
        )
        .unwrap();
        let store = FileStore::with_paths(passwd, dir.path().join("shadow"));
        assert_eq!(store.account("alice").unwrap().name, "alice");
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let passwd = dir.path().join("passwd");
        std::fs::write(
            &passwd,
            "# local accounts\n\nalice:x:1000:1000:Alice:/home/alice:/bin/bash\n",
        )
        .unwrap();
        let store = FileStore::with_paths(passwd, dir.path().join("shadow"));
        assert!(store.account("alice").is_ok());
    }

    #[test]
    fn first_matching_entry_wins() {
        let dir = TempDir::new().unwrap();
        let passwd = dir.path().join("passwd");
        std::fs::write(
            &passwd,
            "alice:x:1000:1000:First:/home/alice:/bin/bash\n\
             alice:x:1001:1001:Second:/home/alice2:/bin/bash\n",
        )
        .unwrap();
        let store = FileStore::with_paths(passwd, dir.path().join("shadow"));
        assert_eq!(store.account("alice").unwrap().gecos, "First");
    }

    #[test]
    fn aging_hit() {
        let dir = TempDir::new().unwrap();
        let record = store(&dir).aging("alice").unwrap();
        assert_eq!(record.last_change, Some(19800));
        assert_eq!(record.max_age, Some(90));
    }

    #[test]
    fn aging_not_found_and_malformed() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(matches!(store.aging("mallory"), Err(Error::NotFound(_))));
        assert!(matches!(
            store.aging("broken"),
            Err(Error::Malformed { line: 3 })
        ));
    }
}
