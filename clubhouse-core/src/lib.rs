//! # Clubhouse Core
//!
//! Core library for the Clubhouse activity service, providing the in-memory
//! activity directory, its enrollment rules, and the wire types shared by the
//! server and its clients.
//!
//! ## Overview
//!
//! - **Activity Directory**: an immutable set of named activities, each with a
//!   roster of participant emails that can be enrolled or removed
//! - **Seeding**: the built-in Mergington seed or a TOML/JSON seed file
//! - **API contract**: route constants and request/response payloads
//!
//! ## Examples
//!
//! ```
//! use clubhouse_core::{ActivityDirectory, ErrorKind};
//!
//! let directory = ActivityDirectory::default();
//! let enrolled = directory
//!     .enroll("Chess Club", "test@mergington.edu")
//!     .expect("fresh email enrolls");
//! assert_eq!(enrolled.message(), "Signed up test@mergington.edu for Chess Club");
//!
//! let err = directory
//!     .enroll("Chess Club", "test@mergington.edu")
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Route constants and wire payloads shared across Clubhouse services
pub mod api;
/// Activity records, seeding, and the directory itself
pub mod domain;
/// Error taxonomy for directory operations and seed loading
pub mod error;

pub use domain::activity::{Activity, ActivitySeed};
pub use domain::directory::{
    ActivityDirectory, CapacityPolicy, DirectorySnapshot, Enrollment, Removal,
};
pub use domain::seed::{default_seed, load_seed_file};
pub use error::{DirectoryError, ErrorKind, Result, SeedError};
