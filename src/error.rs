use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// One or more required executables could not be resolved on PATH.
    #[error("Missing required tools: {tools}. Please install these tools first.")]
    MissingToolsError { tools: String },

    /// An invoked external command exited with a non-zero status.
    #[error("Command failed: {command}")]
    CommandFailedError { command: String },

    #[error("Cannot proceed: destination '{dest}' exists but is not a directory.")]
    DestinationNotADirectoryError { dest: String },
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Every fatal condition funnels through here: flows only ever return
/// `Err`, they never terminate the process themselves.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
