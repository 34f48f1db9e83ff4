use crate::error::AppError;

/// Where handlers get their answers from.
///
/// Every handler receives one explicitly, so a test can replay a script
/// instead of talking to a real terminal.
pub trait InputSource {
    /// One line of text, without its terminator.
    fn line(&mut self, message: &str) -> Result<String, AppError>;

    /// A y/n question. Anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> Result<bool, AppError>;

    /// Lines until `sentinel` (exclusive). `message` is shown once.
    fn block(&mut self, message: &str, sentinel: &str) -> Result<Vec<String>, AppError>;
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
