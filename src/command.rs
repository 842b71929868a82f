//! Synchronous execution of external commands.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Abstract interface for running external commands.
///
/// Flows depend on this seam instead of `std::process` directly so tests
/// can record invocations and inject failures without spawning anything.
pub trait CommandRunner {
    /// Runs `program` with `args`, optionally inside `cwd`, and blocks
    /// until the child exits. Non-zero exit status is fatal for the flow.
    fn run(&mut self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()>;
}

/// Runner that spawns real child processes.
///
/// Stdin, stdout, and stderr are inherited so interactive or streaming
/// output from the child is visible in real time.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let command_line = render_command_line(program, args);
        log::debug!("Running: {command_line}");

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|_| Error::CommandFailedError { command: command_line.clone() })?;

        if !status.success() {
            return Err(Error::CommandFailedError { command: command_line });
        }

        Ok(())
    }
}

/// Space-joined command text used in diagnostics.
pub fn render_command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
