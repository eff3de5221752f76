// Submolt commands: browse, create, subscription, moderator roster.

use reqwest::Method;
use serde_json::json;

use crate::api::{ApiClient, CliError};
use crate::cli::{ModeratorsCmd, SubmoltsCmd};
use crate::print::print_json;
use crate::ui::Prompter;

pub fn handle(ctx: &ApiClient, prompter: &dyn Prompter, cmd: SubmoltsCmd) -> Result<(), CliError> {
    match cmd {
        SubmoltsCmd::List => list(ctx),
        SubmoltsCmd::Get { name } => get(ctx, &name),
        SubmoltsCmd::Create {
            name,
            display_name,
            description,
        } => create(ctx, prompter, name, display_name, description),
        SubmoltsCmd::Subscribe { name } => subscribe(ctx, &name),
        SubmoltsCmd::Unsubscribe { name } => unsubscribe(ctx, &name),
        SubmoltsCmd::Moderators(args) => moderators(ctx, args.action),
    }
}

fn list(ctx: &ApiClient) -> Result<(), CliError> {
    let data = ctx.request(Method::GET, "/submolts", &[], None)?;
    print_json(&data)
}

fn get(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    let data = ctx.request(Method::GET, &format!("/submolts/{name}"), &[], None)?;
    print_json(&data)
}

fn create(
    ctx: &ApiClient,
    prompter: &dyn Prompter,
    name: Option<String>,
    display_name: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let name = match name {
        Some(n) => n,
        None => prompter.input("Name")?,
    };
    let display_name = match display_name {
        Some(d) => d,
        None => prompter.input("Display name")?,
    };
    let description = match description {
        Some(d) => d,
        None => prompter.input("Description")?,
    };

    let payload = json!({
        "name": name,
        "display_name": display_name,
        "description": description,
    });
    let data = ctx.request(Method::POST, "/submolts", &[], Some(payload))?;
    println!("Submolt created successfully!");
    print_json(&data)
}

fn subscribe(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    ctx.request_unit(Method::POST, &format!("/submolts/{name}/subscribe"), None)?;
    println!("Subscribed to {name} successfully!");
    Ok(())
}

fn unsubscribe(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    ctx.request_unit(Method::DELETE, &format!("/submolts/{name}/subscribe"), None)?;
    println!("Unsubscribed from {name} successfully!");
    Ok(())
}

fn moderators(ctx: &ApiClient, cmd: ModeratorsCmd) -> Result<(), CliError> {
    match cmd {
        ModeratorsCmd::List { name } => {
            let data = ctx.request(
                Method::GET,
                &format!("/submolts/{name}/moderators"),
                &[],
                None,
            )?;
            print_json(&data)
        }
        ModeratorsCmd::Add { name, agent_name } => {
            let payload = json!({ "agent_name": agent_name, "role": "moderator" });
            ctx.request_unit(
                Method::POST,
                &format!("/submolts/{name}/moderators"),
                Some(payload),
            )?;
            println!("Added {agent_name} as a moderator to {name}.");
            Ok(())
        }
        ModeratorsCmd::Remove { name, agent_name } => {
            let payload = json!({ "agent_name": agent_name });
            ctx.request_unit(
                Method::DELETE,
                &format!("/submolts/{name}/moderators"),
                Some(payload),
            )?;
            println!("Removed {agent_name} as a moderator from {name}.");
            Ok(())
        }
    }
}
