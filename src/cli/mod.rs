use clap::{ Parser, Subcommand };
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Post a conversation to https://pastebin.com", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    // --- Credentials ---
    /// Pastebin developer API key
    #[arg(long, env = "PASTEBIN_API_DEVELOPER_KEY", hide_env_values = true)]
    pub api_developer_key: Option<String>,

    /// Pastebin user key; pastes are created anonymously when unset
    #[arg(long, env = "PASTEBIN_API_USER_KEY", hide_env_values = true)]
    pub api_user_key: Option<String>,

    // --- Paste Defaults ---
    /// Optional JSON config file holding paste_defaults and include_raw_link
    #[arg(long, env = "PASTEBIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default expire code (N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y)
    #[arg(long, env = "PASTEBIN_EXPIRE")]
    pub expire: Option<String>,

    /// Paste format / syntax highlighting hint (e.g. text, markdown, python)
    #[arg(long, env = "PASTEBIN_FORMAT")]
    pub format: Option<String>,

    /// Default visibility (public, unlisted, private)
    #[arg(long, env = "PASTEBIN_VISIBILITY")]
    pub visibility: Option<String>,

    /// Also print the raw content URL of the paste
    #[arg(long, env = "PASTEBIN_INCLUDE_RAW_LINK")]
    pub include_raw_link: Option<bool>,

    // --- Transport ---
    /// Paste creation endpoint
    #[arg(long, env = "PASTEBIN_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds for the paste API call
    #[arg(long, env = "PASTEBIN_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Paste a conversation: [visibility [expire [title...]]]
    Paste {
        /// Path to the conversation export (JSON)
        #[arg(short, long, env = "PASTEBIN_CONVERSATION", default_value = "conversation.json")]
        conversation: PathBuf,

        /// visibility, expire and title, in that order
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the shell completion tree as JSON
    Completions,
    /// Print usage for the pastebin command
    HelpCommand,
}
