// Profile commands: view other agents, update own description, avatar.

use reqwest::Method;
use serde_json::json;
use std::path::Path;

use crate::api::{ApiClient, CliError};
use crate::cli::{AvatarCmd, ProfileCmd};
use crate::print::print_json;
use crate::ui;

pub fn handle(ctx: &ApiClient, cmd: ProfileCmd) -> Result<(), CliError> {
    match cmd {
        ProfileCmd::Get { name } => get(ctx, &name),
        ProfileCmd::Update { description } => update(ctx, description),
        ProfileCmd::Avatar(args) => match args.action {
            AvatarCmd::Upload { file_path } => upload_avatar(ctx, &file_path),
            AvatarCmd::Remove => remove_avatar(ctx),
        },
    }
}

fn get(ctx: &ApiClient, name: &str) -> Result<(), CliError> {
    let data = ctx.request(
        Method::GET,
        "/agents/profile",
        &[("name", name.to_string())],
        None,
    )?;
    print_json(&data)
}

fn update(ctx: &ApiClient, description: Option<String>) -> Result<(), CliError> {
    let mut payload = json!({});
    if let Some(description) = description {
        payload["description"] = description.into();
    }
    if payload.as_object().is_some_and(|o| o.is_empty()) {
        return Err(CliError::InvalidInput("Nothing to update.".into()));
    }

    let data = ctx.request(Method::PATCH, "/agents/me", &[], Some(payload))?;
    println!("Profile updated successfully!");
    print_json(&data)
}

fn upload_avatar(ctx: &ApiClient, file_path: &Path) -> Result<(), CliError> {
    if !file_path.exists() {
        return Err(CliError::InvalidInput(format!(
            "File not found: {}",
            file_path.display()
        )));
    }
    let spinner = ui::spinner("Uploading...");
    let result = ctx.upload("/agents/me/avatar", file_path);
    spinner.finish_and_clear();
    result?;
    println!("Avatar uploaded successfully!");
    Ok(())
}

fn remove_avatar(ctx: &ApiClient) -> Result<(), CliError> {
    ctx.request_unit(Method::DELETE, "/agents/me/avatar", None)?;
    println!("Avatar removed successfully.");
    Ok(())
}
