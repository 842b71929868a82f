//! Shared fakes for driving the flows without a terminal or real tools.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use nn1_setup::command::{render_command_line, CommandRunner};
use nn1_setup::console::Console;
use nn1_setup::error::{Error, Result};
use nn1_setup::prompt::Prompt;
use nn1_setup::tools::ToolProbe;

/// Probe with a fixed set of available tools.
pub struct FakeProbe {
    available: HashSet<String>,
}

impl FakeProbe {
    pub fn with(tools: &[&str]) -> Self {
        Self { available: tools.iter().map(|t| t.to_string()).collect() }
    }
}

impl ToolProbe for FakeProbe {
    fn is_available(&self, tool: &str) -> bool {
        self.available.contains(tool)
    }
}

/// Prompt that replays scripted answers, falling back to the offered
/// defaults when the script runs out.
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    selection: Option<usize>,
}

impl ScriptedPrompt {
    pub fn accepting_defaults() -> Self {
        Self { answers: RefCell::new(VecDeque::new()), selection: None }
    }

    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            selection: None,
        }
    }

    pub fn selecting(mut self, index: usize) -> Self {
        self.selection = Some(index);
        self
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&self, _question: &str, default: &str) -> Result<String> {
        Ok(self.answers.borrow_mut().pop_front().unwrap_or_else(|| default.to_string()))
    }

    fn select(&self, _question: &str, _choices: &[&str], default: usize) -> Result<usize> {
        Ok(self.selection.unwrap_or(default))
    }
}

/// One recorded command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Runner that records invocations instead of spawning processes.
///
/// A `git clone` creates the destination directory so the steps after a
/// simulated clone see the same filesystem a real clone would leave.
pub struct RecordingRunner {
    pub invocations: Vec<Invocation>,
    fail_on_program: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self { invocations: Vec::new(), fail_on_program: None }
    }

    pub fn failing_on(program: &str) -> Self {
        Self { invocations: Vec::new(), fail_on_program: Some(program.to_string()) }
    }

    pub fn programs(&self) -> Vec<&str> {
        self.invocations.iter().map(|i| i.program.as_str()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        self.invocations.push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        if self.fail_on_program.as_deref() == Some(program) {
            return Err(Error::CommandFailedError {
                command: render_command_line(program, args),
            });
        }

        if program == "git" && args.first() == Some(&"clone") {
            if let Some(dest) = args.last() {
                fs::create_dir_all(dest)?;
            }
        }

        Ok(())
    }
}

/// Console that captures everything a flow says.
#[derive(Default)]
pub struct CaptureConsole {
    pub messages: Vec<String>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl Console for CaptureConsole {
    fn note(&mut self, msg: &str) {
        self.messages.push(format!("note: {msg}"));
    }

    fn warn(&mut self, msg: &str) {
        self.messages.push(format!("warn: {msg}"));
    }

    fn success(&mut self, msg: &str) {
        self.messages.push(format!("success: {msg}"));
    }

    fn heading(&mut self, title: &str) {
        self.messages.push(format!("heading: {title}"));
    }

    fn panel(&mut self, title: &str, body: &str) {
        self.messages.push(format!("panel: {title}\n{body}"));
    }
}
