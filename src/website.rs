//! Website setup flow.

use std::fs;
use std::path::PathBuf;

use crate::command::CommandRunner;
use crate::config::SetupConfig;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::prompt::Prompt;
use crate::tools::{missing_tools, ToolProbe};

/// Provisions a local checkout of the website: requirement check, clone,
/// dependency install, and a default `.env` file.
///
/// Any failure aborts the flow with nothing rolled back; a half-finished
/// clone or install is left on disk for the user to inspect.
pub fn setup_website(
    config: &SetupConfig,
    console: &mut dyn Console,
    prompt: &dyn Prompt,
    probe: &dyn ToolProbe,
    runner: &mut dyn CommandRunner,
) -> Result<()> {
    console.heading("Website Setup");

    let missing = missing_tools(probe, &config.required_tools);
    if !missing.is_empty() {
        return Err(Error::MissingToolsError { tools: missing.join(", ") });
    }

    let dest = prompt.input("Where should I put the website?", &config.website_default_dest)?;
    let dest = PathBuf::from(dest);
    let dest_display = dest.display().to_string();

    if !dest.exists() {
        console.note("Cloning repo...");
        runner.run(
            "git",
            &["clone", config.website_repo_url.as_str(), dest_display.as_str()],
            None,
        )?;
    } else if dest.is_dir() {
        console.warn("Folder already exists, skipping clone.");
    } else {
        return Err(Error::DestinationNotADirectoryError { dest: dest_display });
    }

    console.note("Installing dependencies...");
    if probe.is_available(&config.preferred_package_manager) {
        runner.run(&config.preferred_package_manager, &["install"], Some(&dest))?;
    } else {
        console.warn(&format!(
            "{} not installed but recommended, using {} instead",
            config.preferred_package_manager, config.fallback_package_manager
        ));
        runner.run(&config.fallback_package_manager, &["install"], Some(&dest))?;
    }

    let env_path = dest.join(&config.env_file_name);
    if !env_path.exists() {
        console.note("Creating .env file...");
        fs::write(&env_path, &config.env_file_template)?;
    } else {
        log::debug!("{} already exists, leaving it untouched", env_path.display());
    }

    console.success("Done!");
    console.panel(
        "Next Steps",
        &format!(
            "To start the development server:\n\
             \n  cd {dest_display}\n  npm run dev\n\
             \nHappy hacking! :)"
        ),
    );
    Ok(())
}
