use crate::{
    api::setup_api,
    command::CommandRunner,
    config::SetupConfig,
    console::Console,
    error::Result,
    prompt::Prompt,
    tools::ToolProbe,
    website::setup_website,
};

const BANNER_TITLE: &str = "NN1 Dev Setup";
const BANNER_BODY: &str =
    "Made by Preston Arnold - Arnold Development\nhttps://prestonarnold.uk";

/// The two user-selectable flows, in display order. `website` is the default.
const FLOW_CHOICES: &[&str] = &["website", "apis"];

/// Entry-point runner that owns the injected capabilities and dispatches
/// exactly one flow per invocation.
pub struct Runner<'a> {
    config: &'a SetupConfig,
    console: &'a mut dyn Console,
    prompt: &'a dyn Prompt,
    probe: &'a dyn ToolProbe,
    command_runner: &'a mut dyn CommandRunner,
}

impl<'a> Runner<'a> {
    pub fn new(
        config: &'a SetupConfig,
        console: &'a mut dyn Console,
        prompt: &'a dyn Prompt,
        probe: &'a dyn ToolProbe,
        command_runner: &'a mut dyn CommandRunner,
    ) -> Self {
        Self { config, console, prompt, probe, command_runner }
    }

    /// Shows the welcome banner, asks which flow to run, and runs it.
    pub fn run(self) -> Result<()> {
        self.console.panel(BANNER_TITLE, BANNER_BODY);

        let choice = self.prompt.select("What do you want to set up?", FLOW_CHOICES, 0)?;

        match FLOW_CHOICES[choice] {
            "apis" => setup_api(self.config, self.console, self.prompt),
            _ => setup_website(
                self.config,
                self.console,
                self.prompt,
                self.probe,
                self.command_runner,
            ),
        }
    }
}

/// Builds the production capabilities and runs the assistant.
pub fn run() -> Result<()> {
    let config = SetupConfig::default();
    let mut console = crate::console::TermConsole;
    let prompt = crate::prompt::DialoguerPrompt;
    let probe = crate::tools::PathProbe;
    let mut command_runner = crate::command::ProcessRunner;

    Runner::new(&config, &mut console, &prompt, &probe, &mut command_runner).run()
}
