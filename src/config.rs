/// Knobs shared by every assertion made through one [`crate::Paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Emit a `tracing` event for every evaluation and failure
    pub trace_evaluations: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            trace_evaluations: true,
        }
    }
}
