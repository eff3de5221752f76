use std::cell::RefCell;
use std::collections::VecDeque;

use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use crate::api::{ApiClient, CliError};
use crate::cli::{
    AvatarArgs, AvatarCmd, CommentSort, CommentsCmd, FeedSort, ModeratorsArgs, ModeratorsCmd,
    PostSort, PostsCmd, ProfileCmd, SearchType, SubmoltsCmd, VoteCmd,
};
use crate::commands::{agent, comments, posts, profile, search, submolts, vote};
use crate::config::CredentialStore;
use crate::ui::Prompter;

/// Canned prompt answers so handlers never touch a real terminal.
struct StubPrompter {
    inputs: RefCell<VecDeque<String>>,
    confirm: bool,
}

impl StubPrompter {
    fn new(inputs: &[&str], confirm: bool) -> Self {
        StubPrompter {
            inputs: RefCell::new(inputs.iter().map(|s| (*s).to_string()).collect()),
            confirm,
        }
    }
}

impl Prompter for StubPrompter {
    fn input(&self, _prompt: &str) -> Result<String, CliError> {
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CliError::InvalidInput("no stub input queued".into()))
    }

    fn confirm(&self, _prompt: &str) -> Result<bool, CliError> {
        Ok(self.confirm)
    }
}

fn ctx(server: &MockServer) -> ApiClient {
    ApiClient::new(server.base_url(), Some("key".into()))
}

#[test]
fn posts_create_prompts_for_missing_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/posts").json_body(json!({
            "submolt": "general",
            "title": "hello",
            "content": "typed at the prompt",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let prompter = StubPrompter::new(&["typed at the prompt"], false);
    posts::handle(
        &ctx(&server),
        &prompter,
        PostsCmd::Create {
            submolt: "general".into(),
            title: Some("hello".into()),
            content: None,
            link_url: None,
        },
    )
    .expect("create");
    mock.assert();
}

#[test]
fn posts_create_link_post_sends_url_not_content() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/posts").json_body(json!({
            "submolt": "rust",
            "title": "a link",
            "url": "https://example.com",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let prompter = StubPrompter::new(&[], false);
    posts::handle(
        &ctx(&server),
        &prompter,
        PostsCmd::Create {
            submolt: "rust".into(),
            title: Some("a link".into()),
            content: Some("ignored when a url is given".into()),
            link_url: Some("https://example.com".into()),
        },
    )
    .expect("create");
    mock.assert();
}

#[test]
fn posts_feed_passes_filters() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/posts")
            .query_param("sort", "rising")
            .query_param("limit", "10")
            .query_param("submolt", "rust");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let prompter = StubPrompter::new(&[], false);
    posts::handle(
        &ctx(&server),
        &prompter,
        PostsCmd::Feed {
            sort: PostSort::Rising,
            limit: 10,
            submolt: Some("rust".into()),
        },
    )
    .expect("feed");
    mock.assert();
}

#[test]
fn posts_delete_declined_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/posts/p1");
        then.status(200);
    });

    let prompter = StubPrompter::new(&[], false);
    posts::handle(
        &ctx(&server),
        &prompter,
        PostsCmd::Delete {
            post_id: "p1".into(),
        },
    )
    .expect("declining is not an error");
    mock.assert_hits(0);
}

#[test]
fn posts_delete_confirmed_sends_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/posts/p1");
        then.status(200);
    });

    let prompter = StubPrompter::new(&[], true);
    posts::handle(
        &ctx(&server),
        &prompter,
        PostsCmd::Delete {
            post_id: "p1".into(),
        },
    )
    .expect("delete");
    mock.assert();
}

#[test]
fn vote_post_down_hits_downvote_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/posts/p1/downvote");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    vote::handle(
        &ctx(&server),
        VoteCmd::Post {
            post_id: "p1".into(),
            down: true,
        },
    )
    .expect("downvote");
    mock.assert();
}

#[test]
fn vote_post_defaults_to_upvote() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/posts/p1/upvote");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    vote::handle(
        &ctx(&server),
        VoteCmd::Post {
            post_id: "p1".into(),
            down: false,
        },
    )
    .expect("upvote");
    mock.assert();
}

#[test]
fn comments_add_includes_parent_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/posts/p1/comments")
            .json_body(json!({ "content": "nice post", "parent_id": "c9" }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let prompter = StubPrompter::new(&[], false);
    comments::handle(
        &ctx(&server),
        &prompter,
        CommentsCmd::Add {
            post_id: "p1".into(),
            content: Some("nice post".into()),
            parent_id: Some("c9".into()),
        },
    )
    .expect("add");
    mock.assert();
}

#[test]
fn comments_list_sends_sort() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/posts/p1/comments")
            .query_param("sort", "controversial");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let prompter = StubPrompter::new(&[], false);
    comments::handle(
        &ctx(&server),
        &prompter,
        CommentsCmd::List {
            post_id: "p1".into(),
            sort: CommentSort::Controversial,
        },
    )
    .expect("list");
    mock.assert();
}

#[test]
fn moderator_remove_sends_agent_in_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE")
            .path("/submolts/rust/moderators")
            .json_body(json!({ "agent_name": "crabby" }));
        then.status(200);
    });

    let prompter = StubPrompter::new(&[], false);
    submolts::handle(
        &ctx(&server),
        &prompter,
        SubmoltsCmd::Moderators(ModeratorsArgs {
            action: ModeratorsCmd::Remove {
                name: "rust".into(),
                agent_name: "crabby".into(),
            },
        }),
    )
    .expect("remove moderator");
    mock.assert();
}

#[test]
fn submolts_create_prompts_for_missing_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/submolts").json_body(json!({
            "name": "rustaceans",
            "display_name": "Rustaceans",
            "description": "all things crab",
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let prompter = StubPrompter::new(&["rustaceans", "Rustaceans", "all things crab"], false);
    submolts::handle(
        &ctx(&server),
        &prompter,
        SubmoltsCmd::Create {
            name: None,
            display_name: None,
            description: None,
        },
    )
    .expect("create");
    mock.assert();
}

#[test]
fn profile_update_without_fields_is_rejected_locally() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PATCH").path("/agents/me");
        then.status(200);
    });

    let err = profile::handle(&ctx(&server), ProfileCmd::Update { description: None })
        .expect_err("no fields supplied");
    assert!(matches!(err, CliError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Nothing to update.");
    mock.assert_hits(0);
}

#[test]
fn profile_avatar_upload_requires_existing_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/agents/me/avatar");
        then.status(200);
    });

    let err = profile::handle(
        &ctx(&server),
        ProfileCmd::Avatar(AvatarArgs {
            action: AvatarCmd::Upload {
                file_path: "/no/such/file.png".into(),
            },
        }),
    )
    .expect_err("missing file");
    assert!(matches!(err, CliError::InvalidInput(_)));
    mock.assert_hits(0);
}

#[test]
fn search_sends_query_type_and_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/search")
            .query_param("q", "borrow checker")
            .query_param("type", "comments")
            .query_param("limit", "5");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    search::search(&ctx(&server), "borrow checker", SearchType::Comments, 5).expect("search");
    mock.assert();
}

#[test]
fn personal_feed_sends_sort_and_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/feed")
            .query_param("sort", "top")
            .query_param("limit", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    search::personal_feed(&ctx(&server), FeedSort::Top, 3).expect("feed");
    mock.assert();
}

#[test]
fn register_saves_credentials_when_confirmed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/agents/register")
            .json_body(json!({ "name": "crabby", "description": "a test agent" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"agent":{"name":"crabby","api_key":"fresh-key"}}"#);
    });

    let dir = TempDir::new().expect("tmp dir");
    let store = CredentialStore::new(dir.path().join("credentials.json"));
    let prompter = StubPrompter::new(&[], true);

    // register is the one unauthenticated command
    let client = ApiClient::new(server.base_url(), None);
    agent::register(
        &client,
        &store,
        &prompter,
        Some("crabby".into()),
        Some("a test agent".into()),
    )
    .expect("register");

    mock.assert();
    let creds = store.load().expect("credentials saved");
    assert_eq!(creds.api_key, "fresh-key");
    assert_eq!(creds.agent_name, "crabby");
}

#[test]
fn register_declining_save_leaves_no_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/agents/register");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"agent":{"api_key":"fresh-key"}}"#);
    });

    let dir = TempDir::new().expect("tmp dir");
    let store = CredentialStore::new(dir.path().join("credentials.json"));
    let prompter = StubPrompter::new(&[], false);

    let client = ApiClient::new(server.base_url(), None);
    agent::register(&client, &store, &prompter, Some("crabby".into()), Some("d".into()))
        .expect("register");
    assert_eq!(store.load(), None);
}
