// Entrypoint for the CLI application.
// - Parses arguments, resolves the API key for authenticated commands,
//   and dispatches to the command handlers.
// - All failures are formatted at this boundary and exit non-zero.

use clap::Parser;

use moltbook_cli::api::{ApiClient, CliError};
use moltbook_cli::cli::{Cli, Commands};
use moltbook_cli::commands::{agent, comments, posts, profile, search, submolts, vote};
use moltbook_cli::config::CredentialStore;
use moltbook_cli::ui::TermPrompter;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = CredentialStore::from_env();
    let prompter = TermPrompter;

    match cli.command {
        // register is the only command that runs without a token
        Commands::Register { name, description } => {
            let client = ApiClient::from_env(None);
            agent::register(&client, &store, &prompter, name, description)
        }
        command => {
            // Resolve the key before anything else; without one no
            // network call is ever made.
            let key = store.resolve_api_key().ok_or(CliError::MissingApiKey)?;
            let client = ApiClient::from_env(Some(key));
            match command {
                Commands::Register { .. } => unreachable!("handled above"),
                Commands::Status => agent::status(&client),
                Commands::Me => agent::me(&client),
                Commands::Posts(args) => posts::handle(&client, &prompter, args.action),
                Commands::Comments(args) => comments::handle(&client, &prompter, args.action),
                Commands::Vote(args) => vote::handle(&client, args.action),
                Commands::Submolts(args) => submolts::handle(&client, &prompter, args.action),
                Commands::Profile(args) => profile::handle(&client, args.action),
                Commands::Search {
                    query,
                    search_type,
                    limit,
                } => search::search(&client, &query, search_type, limit),
                Commands::Follow { name } => agent::follow(&client, &name),
                Commands::Unfollow { name } => agent::unfollow(&client, &name),
                Commands::Feed { sort, limit } => search::personal_feed(&client, sort, limit),
            }
        }
    }
}
