/// Errors that can occur while setting up or running a prompt.
///
/// User cancellation is not an error; it is reported through
/// [`PromptResult::canceled`](crate::prompt::PromptResult::canceled).
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// An I/O error from terminal setup, input polling, drawing, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The prompt was given no choices to pick from.
    #[error("a prompt needs at least one choice")]
    EmptyChoices,
}
