//! Account and aging record models.
//!
//! One type per platform database entry, plus the two-figure [`Aging`] view
//! the expiry computation consumes.

mod passwd;
mod shadow;

pub use passwd::PasswdRecord;
pub use shadow::{Aging, ShadowRecord};
