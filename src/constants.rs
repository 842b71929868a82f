//! Constants used throughout the setup assistant

/// Repository cloned by the website flow
pub const WEBSITE_REPO_URL: &str = "https://github.com/nn1-dev/website.git";

/// Default destination offered by the website flow
pub const WEBSITE_DEFAULT_DEST: &str = "./website";

/// Default destination offered by the API flow
pub const API_DEFAULT_DEST: &str = "./api";

/// Tools that must be resolvable before the website flow mutates anything
pub const WEBSITE_REQUIRED_TOOLS: &[&str] = &["git", "npm"];

/// Installer used when available
pub const PREFERRED_PACKAGE_MANAGER: &str = "pnpm";

/// Installer used when the preferred one is absent
pub const FALLBACK_PACKAGE_MANAGER: &str = "npm";

/// Environment file written at the root of the cloned website
pub const ENV_FILE_NAME: &str = ".env";

/// Exact content of a freshly written environment file
pub const ENV_FILE_TEMPLATE: &str = "API_URL_TICKETS=\n\
API_URL_NEWSLETTER=\n\
API_URL_FEEDBACK=\n\
API_KEY_TICKETS=dev\n\
API_KEY_NEWSLETTER=dev\n\
API_KEY_FEEDBACK=dev\n";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
