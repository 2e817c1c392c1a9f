pub mod cli;
pub mod command;
pub mod completions;
pub mod config;
pub mod models;
pub mod paste;
pub mod plugin;
pub mod store;
pub mod transcript;

use cli::{ Args, Command };
use config::{ Credentials, PluginConfig };
use log::info;
use paste::PastebinClient;
use plugin::PastebinPlugin;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(args: Args) -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    match args.command.clone() {
        Command::Completions => {
            println!("{}", serde_json::to_string_pretty(&completions::shell_completions())?);
            Ok(ExitCode::SUCCESS)
        }
        Command::HelpCommand => {
            println!("{}", plugin::command_help());
            Ok(ExitCode::SUCCESS)
        }
        Command::Paste { conversation, args: command_args } => {
            let store = store::initialize_conversation_store(conversation);
            let plugin = build_plugin(&args, store)?;
            let response = plugin.command_pastebin(&command_args.join(" ")).await;
            if response.success {
                println!("{}", response.message);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{}", response.message);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn build_plugin(
    args: &Args,
    store: Arc<dyn store::ConversationStore>
) -> Result<PastebinPlugin, Box<dyn Error + Send + Sync>> {
    let config = PluginConfig::resolve(args)?;
    let credentials = Credentials::from_args(args)?;
    let client = PastebinClient::new(
        credentials.api_developer_key,
        credentials.api_user_key,
        args.api_url.clone(),
        Duration::from_secs(args.timeout_secs)
    )?;
    info!("Paste API endpoint: {}", client.api_url());
    Ok(PastebinPlugin::new(config, store, Arc::new(client)))
}
