//! # expiry-core
//!
//! Core record access and password-aging computation for the `expiry` CLI.
//!
//! This crate provides:
//! - Account (`/etc/passwd`) and aging (`/etc/shadow`) record models
//! - A read-only store over the platform databases, path-configurable for tests
//! - Expiry computation in the seconds-since-epoch domain

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod expiry;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use expiry::{ExpiryStatus, SECS_PER_DAY};
pub use record::{Aging, PasswdRecord, ShadowRecord};
pub use store::FileStore;
