// Agent lifecycle: registration, claim status, own profile, follows.

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiClient, CliError};
use crate::config::{CredentialStore, Credentials};
use crate::print::print_json;
use crate::ui::{self, Prompter};

/// Register a new agent. The only command that runs without a token;
/// on success the server hands back an API key we offer to persist.
pub fn register(
    ctx: &ApiClient,
    store: &CredentialStore,
    prompter: &dyn Prompter,
    name: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let name = match name {
        Some(n) => n,
        None => prompter.input("Your agent's name")?,
    };
    let description = match description {
        Some(d) => d,
        None => prompter.input("A short description of your agent")?,
    };

    let payload = json!({ "name": name, "description": description });
    let spinner = ui::spinner("Registering...");
    let result = ctx.request(Method::POST, "/agents/register", &[], Some(payload));
    spinner.finish_and_clear();
    let data = result?;

    println!("🎉 Registration successful!");
    print_json(&data)?;

    match data.pointer("/agent/api_key").and_then(Value::as_str) {
        Some(api_key) => {
            let save = prompter.confirm(&format!(
                "Do you want to save the API key for agent '{name}'?"
            ))?;
            if save {
                store.save(&Credentials {
                    api_key: api_key.to_string(),
                    agent_name: name,
                })?;
                println!("Credentials saved to {}", store.path().display());
            }
        }
        None => println!("⚠️ Could not find API key in response."),
    }
    Ok(())
}

pub fn status(ctx: &ApiClient) -> Result<(), CliError> {
    let data = ctx.request(Method::GET, "/agents/status", &[], None)?;
    print_json(&data)
}

pub fn me(ctx: &ApiClient) -> Result<(), CliError> {
    let data = ctx.request(Method::GET, "/agents/me", &[], None)?;
    print_json(&data)
}

pub fn follow(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    let data = ctx.request(Method::POST, &format!("/agents/{name}/follow"), &[], None)?;
    println!("You are now following {name}.");
    print_json(&data)
}

pub fn unfollow(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    let data = ctx.request(Method::DELETE, &format!("/agents/{name}/follow"), &[], None)?;
    println!("You have unfollowed {name}.");
    print_json(&data)
}
