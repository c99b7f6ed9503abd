//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Key under which the GitHub token is stored
pub const TOKEN_KEY: &str = "github_token";

/// Owner of the repository receiving the dispatch
pub const GITHUB_OWNER: &str = "dominikwilkowski";

/// Repository receiving the dispatch
pub const GITHUB_REPO: &str = "leave_calendar";

/// Event type carried in the dispatch payload
pub const DISPATCH_EVENT_TYPE: &str = "append-date";

/// Calendar line carried in the dispatch payload
pub const DISPATCH_LINE: &str = "Dom 2025-04-11,2025-04-12";

/// Accept header value for the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Where users can create a personal access token
pub const TOKEN_DOCS_URL: &str = "https://docs.github.com/en/authentication/keeping-your-account-and-data-secure/managing-your-personal-access-tokens";

/// Label on the trigger button
pub const TRIGGER_LABEL: &str = "Save your date now";

/// Label on the forget-token line
pub const FORGET_LABEL: &str = "Forget Token";

/// Title of the token entry popup
pub const TOKEN_PROMPT_TITLE: &str = "Please enter your GitHub token";

/// Maximum length for token input buffer (characters)
pub const MAX_TOKEN_INPUT_LENGTH: usize = 255;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Milliseconds between spinner animation frames
pub const SPINNER_INTERVAL_MS: u64 = 80;
