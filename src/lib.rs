/// Handles argument parsing and flow dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Fixed defaults for prompts, the clone URL, and the env template.
pub mod constants;

/// Runtime configuration injected into the flows.
pub mod config;

/// Resolution of required external executables.
pub mod tools;

/// Synchronous execution of external commands.
pub mod command;

/// Terminal output sink.
pub mod console;

/// User input and interaction handling.
pub mod prompt;

/// Website setup flow.
pub mod website;

/// API setup flow.
pub mod api;
