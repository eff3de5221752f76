// Voting: posts can be up- or downvoted, comments only upvoted.

use reqwest::Method;

use crate::api::{ApiClient, CliError};
use crate::cli::VoteCmd;
use crate::print::print_json;

pub fn handle(ctx: &ApiClient, cmd: VoteCmd) -> Result<(), CliError> {
    match cmd {
        VoteCmd::Post { post_id, down } => {
            let vote_type = if down { "downvote" } else { "upvote" };
            let data = ctx.request(
                Method::POST,
                &format!("/posts/{post_id}/{vote_type}"),
                &[],
                None,
            )?;
            println!("Successfully {vote_type}d post {post_id}.");
            print_json(&data)
        }
        VoteCmd::Comment { comment_id } => {
            let data = ctx.request(
                Method::POST,
                &format!("/comments/{comment_id}/upvote"),
                &[],
                None,
            )?;
            println!("Successfully upvoted comment {comment_id}.");
            print_json(&data)
        }
    }
}
