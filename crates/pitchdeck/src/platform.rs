use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

/// Capabilities the chrome borrows from whatever window hosts it.
pub trait Host {
    /// Show a text message to the user.
    fn show_message(&mut self, message: &str);

    fn toggle_fullscreen(&mut self) -> Result<(), PlatformError>;

    fn write_clipboard(&mut self, text: &str) -> Result<(), PlatformError>;
}
