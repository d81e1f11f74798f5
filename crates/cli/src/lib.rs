pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Storefront action server operator CLI",
    long_about = "Inspect configuration, check backend readiness, and run storefront actions locally.",
    after_help = "Examples:\n  storefront doctor --json\n  storefront config\n  storefront invoke action_add_to_cart --slot item=p-42 --slot quantity=2"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, the action registry, and backend connectivity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the registered storefront actions")]
    Actions,
    #[command(about = "Run one action against the configured backend and print its replies")]
    Invoke {
        #[arg(help = "Action name, for example action_view_cart")]
        action: String,
        #[arg(long = "slot", value_name = "NAME=VALUE", help = "Slot value handed to the action")]
        slots: Vec<String>,
        #[arg(long, default_value = commands::invoke::DEFAULT_SENDER, help = "Conversation sender id")]
        sender: String,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Actions => commands::actions::run(),
        Command::Invoke { action, slots, sender } => {
            commands::invoke::run(&action, &slots, &sender)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
