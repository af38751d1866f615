use std::fmt::Display;

/// Diagnostic context threaded through an assertion into its failure.
///
/// The assertion never inspects it beyond building the failure message, and hands it
/// back unmodified on every error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionInfo {
    description: Option<String>,
    overriding_error_message: Option<String>,
}

impl AssertionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label shown as `[label] ` in front of the failure message
    pub fn described_as(mut self, description: impl Display) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Replaces the generated failure message
    pub fn overriding_error_message(mut self, message: impl Display) -> Self {
        self.overriding_error_message = Some(message.to_string());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn overriding_message(&self) -> Option<&str> {
        self.overriding_error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_builder() {
        let info = AssertionInfo::new()
            .described_as("log file")
            .overriding_error_message("boom");

        assert_eq!(info.description(), Some("log file"));
        assert_eq!(info.overriding_message(), Some("boom"));
        assert_eq!(AssertionInfo::default().description(), None);
    }
}
