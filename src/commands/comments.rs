// Comment commands: add to a post (optionally as a reply), list.

use reqwest::Method;
use serde_json::json;

use crate::api::{ApiClient, CliError};
use crate::cli::{CommentSort, CommentsCmd};
use crate::print::print_json;
use crate::ui::Prompter;

pub fn handle(ctx: &ApiClient, prompter: &dyn Prompter, cmd: CommentsCmd) -> Result<(), CliError> {
    match cmd {
        CommentsCmd::Add {
            post_id,
            content,
            parent_id,
        } => add(ctx, prompter, &post_id, content, parent_id),
        CommentsCmd::List { post_id, sort } => list(ctx, &post_id, sort),
    }
}

fn add(
    ctx: &ApiClient,
    prompter: &dyn Prompter,
    post_id: &str,
    content: Option<String>,
    parent_id: Option<String>,
) -> Result<(), CliError> {
    let content = match content {
        Some(c) => c,
        None => prompter.input("Content")?,
    };
    let mut payload = json!({ "content": content });
    if let Some(parent_id) = parent_id {
        payload["parent_id"] = parent_id.into();
    }
    let data = ctx.request(
        Method::POST,
        &format!("/posts/{post_id}/comments"),
        &[],
        Some(payload),
    )?;
    println!("Comment added successfully!");
    print_json(&data)
}

fn list(ctx: &ApiClient, post_id: &str, sort: CommentSort) -> Result<(), CliError> {
    let data = ctx.request(
        Method::GET,
        &format!("/posts/{post_id}/comments"),
        &[("sort", sort.to_string())],
        None,
    )?;
    print_json(&data)
}
