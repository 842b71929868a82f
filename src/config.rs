//! Runtime configuration for the setup flows.
//!
//! Everything a flow needs to know beyond user input lives here, seeded
//! from [`crate::constants`]. Flows receive a borrowed `SetupConfig` so
//! tests can point the clone URL, defaults, and template somewhere else.

use crate::constants;

#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Repository cloned into the website destination.
    pub website_repo_url: String,
    /// Default answer for the website destination prompt.
    pub website_default_dest: String,
    /// Default answer for the API destination prompt.
    pub api_default_dest: String,
    /// Executables that must resolve before the website flow starts.
    pub required_tools: Vec<String>,
    /// Installer used when resolvable on PATH.
    pub preferred_package_manager: String,
    /// Installer used otherwise.
    pub fallback_package_manager: String,
    /// File name of the environment file, relative to the destination.
    pub env_file_name: String,
    /// Exact content written when the environment file is absent.
    pub env_file_template: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            website_repo_url: constants::WEBSITE_REPO_URL.to_string(),
            website_default_dest: constants::WEBSITE_DEFAULT_DEST.to_string(),
            api_default_dest: constants::API_DEFAULT_DEST.to_string(),
            required_tools: constants::WEBSITE_REQUIRED_TOOLS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            preferred_package_manager: constants::PREFERRED_PACKAGE_MANAGER.to_string(),
            fallback_package_manager: constants::FALLBACK_PACKAGE_MANAGER.to_string(),
            env_file_name: constants::ENV_FILE_NAME.to_string(),
            env_file_template: constants::ENV_FILE_TEMPLATE.to_string(),
        }
    }
}
