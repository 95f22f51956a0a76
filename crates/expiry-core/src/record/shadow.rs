//! Aging database records.

/// One entry of the password-aging database (`/etc/shadow` format).
///
/// Day and count fields are `None` when the source field is empty. The
/// hashed-password field of the source line is skipped during parsing and
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowRecord {
    /// Login name.
    pub name: String,
    /// Day the password was last changed, in days since the epoch.
    pub last_change: Option<i64>,
    /// Minimum number of days between password changes.
    pub min_age: Option<i64>,
    /// Maximum number of days the password remains valid.
    pub max_age: Option<i64>,
    /// Days of warning before the password expires.
    pub warn_period: Option<i64>,
    /// Days after expiry until the account is disabled.
    pub inactivity_period: Option<i64>,
    /// Day the account itself expires, in days since the epoch.
    pub expire_day: Option<i64>,
}

impl ShadowRecord {
    /// Parse one colon-separated aging line.
    ///
    /// Requires eight or nine fields (the trailing reserved field may be
    /// absent); day fields may be empty. Returns `None` on a field-count
    /// mismatch or a non-numeric day field.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != 8 && fields.len() != 9 {
            return None;
        }

        Some(Self {
            name: fields[0].to_string(),
            last_change: day_field(fields[2])?,
            min_age: day_field(fields[3])?,
            max_age: day_field(fields[4])?,
            warn_period: day_field(fields[5])?,
            inactivity_period: day_field(fields[6])?,
            expire_day: day_field(fields[7])?,
        })
    }
}

/// Parse an optionally-empty day-count field.
fn day_field(field: &str) -> Option<Option<i64>> {
    if field.is_empty() {
        return Some(None);
    }
    field.parse().ok().map(Some)
}

/// The two aging figures the expiry computation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aging {
    /// Day the password was last changed, in days since the epoch.
    pub last_change_day: i64,
    /// Number of days the password remains valid after the last change.
    pub max_age_days: i64,
}

impl From<&ShadowRecord> for Aging {
    /// Absent fields surface as `-1`, the value the platform's aging
    /// interface reports for empty fields.
    fn from(record: &ShadowRecord) -> Self {
        Self {
            last_change_day: record.last_change.unwrap_or(-1),
            max_age_days: record.max_age.unwrap_or(-1),
        }
    }
}
