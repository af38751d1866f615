//! Assertion outcomes other than success.
use std::fmt::Display;

use thiserror::Error;

use crate::info::AssertionInfo;
use crate::message;

pub type Result<T> = std::result::Result<T, AssertionError>;

/// Which way an assertion went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The value under test was absent
    ActualIsNull,
    /// The caller passed an unusable argument, the assertion itself never ran
    InvalidArgument,
    /// The value under test did not satisfy the expectation
    Mismatch,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::ActualIsNull => write!(f, "actual is null"),
            FailureKind::InvalidArgument => write!(f, "invalid argument"),
            FailureKind::Mismatch => write!(f, "mismatch"),
        }
    }
}

/// `Display` is the full, human readable failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    #[error("{}", message::assertion_failure(.info, message::actual_is_null()))]
    ActualIsNull { info: AssertionInfo },

    #[error("{message}")]
    InvalidArgument {
        info: AssertionInfo,
        message: &'static str,
    },

    #[error("{}", mismatch_message(.info, .actual, .expected, .actual_file_name))]
    FileNameMismatch {
        info: AssertionInfo,
        actual: String,
        expected: String,
        actual_file_name: Option<String>,
    },
}

fn mismatch_message(
    info: &AssertionInfo,
    actual: &str,
    expected: &str,
    actual_file_name: &Option<String>,
) -> String {
    message::assertion_failure(
        info,
        message::should_have_name(actual, expected, actual_file_name.as_deref()),
    )
}

impl AssertionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AssertionError::ActualIsNull { .. } => FailureKind::ActualIsNull,
            AssertionError::InvalidArgument { .. } => FailureKind::InvalidArgument,
            AssertionError::FileNameMismatch { .. } => FailureKind::Mismatch,
        }
    }

    /// The context the assertion was called with
    pub fn info(&self) -> &AssertionInfo {
        match self {
            AssertionError::ActualIsNull { info }
            | AssertionError::InvalidArgument { info, .. }
            | AssertionError::FileNameMismatch { info, .. } => info,
        }
    }

    /// False for caller misuse, which is neither a pass nor a failed expectation
    pub fn is_assertion_failure(&self) -> bool {
        !matches!(self.kind(), FailureKind::InvalidArgument)
    }
}
