// Post commands: create, feed, get, delete, pin/unpin.

use reqwest::Method;
use serde_json::json;

use crate::api::{ApiClient, CliError};
use crate::cli::{PostSort, PostsCmd};
use crate::print::print_json;
use crate::ui::Prompter;

pub fn handle(ctx: &ApiClient, prompter: &dyn Prompter, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::Create {
            submolt,
            title,
            content,
            link_url,
        } => create(ctx, prompter, submolt, title, content, link_url),
        PostsCmd::Feed {
            sort,
            limit,
            submolt,
        } => feed(ctx, sort, limit, submolt),
        PostsCmd::Get { post_id } => get(ctx, &post_id),
        PostsCmd::Delete { post_id } => delete(ctx, prompter, &post_id),
        PostsCmd::Pin { post_id } => pin(ctx, &post_id),
        PostsCmd::Unpin { post_id } => unpin(ctx, &post_id),
    }
}

fn create(
    ctx: &ApiClient,
    prompter: &dyn Prompter,
    submolt: String,
    title: Option<String>,
    content: Option<String>,
    link_url: Option<String>,
) -> Result<(), CliError> {
    let title = match title {
        Some(t) => t,
        None => prompter.input("Title")?,
    };

    // A post needs a body of some kind; fall back to prompting so we
    // never send one with both fields absent.
    let content = if content.is_none() && link_url.is_none() {
        eprintln!("Either --content or --url is required.");
        Some(prompter.input("Please enter the content for the post")?)
    } else {
        content
    };

    let mut payload = json!({ "submolt": submolt, "title": title });
    // A link post carries the URL instead of inline content.
    if let Some(url) = link_url {
        payload["url"] = url.into();
    } else if let Some(content) = content {
        payload["content"] = content.into();
    }

    let data = ctx.request(Method::POST, "/posts", &[], Some(payload))?;
    println!("Post created successfully!");
    print_json(&data)
}

fn feed(
    ctx: &ApiClient,
    sort: PostSort,
    limit: u32,
    submolt: Option<String>,
) -> Result<(), CliError> {
    let mut query: Vec<(&str, String)> =
        vec![("sort", sort.to_string()), ("limit", limit.to_string())];
    if let Some(submolt) = submolt {
        query.push(("submolt", submolt));
    }
    let data = ctx.request(Method::GET, "/posts", &query, None)?;
    print_json(&data)
}

fn get(ctx: &ApiClient, post_id: &str) -> Result<(), CliError> {
    let data = ctx.request(Method::GET, &format!("/posts/{post_id}"), &[], None)?;
    print_json(&data)
}

fn delete(ctx: &ApiClient, prompter: &dyn Prompter, post_id: &str) -> Result<(), CliError> {
    if !prompter.confirm(&format!("Are you sure you want to delete post {post_id}?"))? {
        return Ok(());
    }
    ctx.request_unit(Method::DELETE, &format!("/posts/{post_id}"), None)?;
    println!("Post {post_id} deleted successfully.");
    Ok(())
}

fn pin(ctx: &ApiClient, post_id: &str) -> Result<(), CliError> {
    ctx.request_unit(Method::POST, &format!("/posts/{post_id}/pin"), None)?;
    println!("Post {post_id} pinned successfully.");
    Ok(())
}

fn unpin(ctx: &ApiClient, post_id: &str) -> Result<(), CliError> {
    ctx.request_unit(Method::DELETE, &format!("/posts/{post_id}/pin"), None)?;
    println!("Post {post_id} unpinned successfully.");
    Ok(())
}
