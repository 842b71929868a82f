//! API setup flow.

use std::fs;
use std::path::Path;

use crate::config::SetupConfig;
use crate::console::Console;
use crate::error::Result;
use crate::prompt::Prompt;

/// Creates a placeholder directory for the API component.
///
/// Idempotent: an existing directory (and any missing parents) is fine,
/// nothing else is touched.
pub fn setup_api(
    config: &SetupConfig,
    console: &mut dyn Console,
    prompt: &dyn Prompt,
) -> Result<()> {
    console.heading("API Setup");

    let dest = prompt.input("Where should I put the API?", &config.api_default_dest)?;
    fs::create_dir_all(Path::new(&dest))?;

    console.success("API folder created!");
    Ok(())
}
