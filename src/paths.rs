//! Assertions over path values
//!
//! Every assertion is a pure function of its inputs: the path is decomposed structurally by
//! the injected [`LastSegment`] implementation and the filesystem is never consulted.
use crate::config::Configuration;
use crate::error::{AssertionError, Result};
use crate::info::AssertionInfo;
use crate::segment::{LastSegment, NativeSegments, SlashSegments};

const NULL_FILE_NAME: &str = "expected fileName should not be null";

#[derive(Debug, Clone, Default)]
pub struct Paths<S = NativeSegments> {
    segments: S,
    config: Configuration,
}

impl Paths<NativeSegments> {
    /// Assertions over host platform paths
    pub fn native() -> Self {
        Self::with_configuration(NativeSegments, Configuration::default())
    }
}

impl Paths<SlashSegments> {
    /// Assertions over `/` separated text paths
    pub fn slash() -> Self {
        Self::with_configuration(SlashSegments, Configuration::default())
    }
}

impl<S: LastSegment> Paths<S> {
    pub fn with_configuration(segments: S, config: Configuration) -> Self {
        Paths { segments, config }
    }

    /// Asserts the final segment of `actual` is exactly `expected`.
    ///
    /// A missing `actual` fails with [`AssertionError::ActualIsNull`], checked first so it wins
    /// even when `expected` is also missing. A missing `expected` is caller misuse and returns
    /// [`AssertionError::InvalidArgument`]. A path without a final segment (such as the root)
    /// never matches.
    ///
    /// Symbolic links are not followed: a link reports its own name, whether or not its
    /// target exists.
    pub fn assert_has_file_name(
        &self,
        info: &AssertionInfo,
        actual: Option<&S::Path>,
        expected: Option<&str>,
    ) -> Result<()> {
        let actual = actual.ok_or_else(|| AssertionError::ActualIsNull { info: info.clone() });
        let actual = self.traced(actual)?;
        let expected = expected.ok_or_else(|| AssertionError::InvalidArgument {
            info: info.clone(),
            message: NULL_FILE_NAME,
        });
        let expected = self.traced(expected)?;

        let file_name = self.segments.last_segment(actual);
        if self.config.trace_evaluations {
            tracing::trace!(
                actual = %self.segments.display(actual),
                file_name = file_name.as_deref(),
                expected,
                "assert_has_file_name"
            );
        }

        if file_name.as_deref() == Some(expected) {
            Ok(())
        } else {
            self.traced(Err(AssertionError::FileNameMismatch {
                info: info.clone(),
                actual: self.segments.display(actual),
                expected: expected.to_string(),
                actual_file_name: file_name.map(|name| name.into_owned()),
            }))
        }
    }

    fn traced<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(error) = &result {
            if self.config.trace_evaluations {
                tracing::debug!(kind = %error.kind(), message = %error, "assertion failed");
            }
        }
        result
    }
}
