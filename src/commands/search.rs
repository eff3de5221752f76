// Discovery surface: semantic search and the personalized feed.

use reqwest::Method;

use crate::api::{ApiClient, CliError};
use crate::cli::{FeedSort, SearchType};
use crate::print::print_json;

pub fn search(
    ctx: &ApiClient,
    query: &str,
    search_type: SearchType,
    limit: u32,
) -> Result<(), CliError> {
    let params: Vec<(&str, String)> = vec![
        ("q", query.to_string()),
        ("type", search_type.to_string()),
        ("limit", limit.to_string()),
    ];
    let data = ctx.request(Method::GET, "/search", &params, None)?;
    print_json(&data)
}

pub fn personal_feed(ctx: &ApiClient, sort: FeedSort, limit: u32) -> Result<(), CliError> {
    let params: Vec<(&str, String)> =
        vec![("sort", sort.to_string()), ("limit", limit.to_string())];
    let data = ctx.request(Method::GET, "/feed", &params, None)?;
    print_json(&data)
}
