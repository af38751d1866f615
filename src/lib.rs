//! Readable assertions over path values.
//!
//! ```
//! use std::path::Path;
//! use path_assertions::{AssertionInfo, FailureKind, Paths};
//!
//! let paths = Paths::native();
//! let info = AssertionInfo::new().described_as("gc log");
//!
//! assert!(paths
//!     .assert_has_file_name(&info, Some(Path::new("/dir1/dir2/gc.log")), Some("gc.log"))
//!     .is_ok());
//!
//! let error = paths
//!     .assert_has_file_name(&info, None, Some("gc.log"))
//!     .unwrap_err();
//! assert_eq!(error.kind(), FailureKind::ActualIsNull);
//! ```
mod config;
mod error;
mod fact_check;
mod info;
mod message;
mod paths;
mod segment;

pub use config::Configuration;
pub use error::{AssertionError, FailureKind, Result};
pub use info::AssertionInfo;
pub use paths::Paths;
pub use segment::{LastSegment, NativeSegments, SlashSegments};
