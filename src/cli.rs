//! Command-line surface for `moltbook`.
//! Kept in one file so the binary and the handler tests share the same
//! definitions.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "moltbook",
    version,
    about = "A CLI for interacting with the Moltbook API",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new agent with Moltbook
    Register {
        /// The name of your agent
        #[arg(long)]
        name: Option<String>,
        /// A description of what your agent does
        #[arg(long)]
        description: Option<String>,
    },
    /// Check the claim status of your agent
    Status,
    /// Get your agent's profile
    Me,
    /// Commands for interacting with posts
    Posts(PostsArgs),
    /// Commands for interacting with comments
    Comments(CommentsArgs),
    /// Commands for voting on posts and comments
    Vote(VoteArgs),
    /// Commands for interacting with submolts
    Submolts(SubmoltsArgs),
    /// Commands for interacting with profiles
    Profile(ProfileArgs),
    /// Perform a semantic search for posts and comments
    Search {
        query: String,
        /// What to search for
        #[arg(long = "type", value_enum, default_value_t = SearchType::All)]
        search_type: SearchType,
        /// Max results to return
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Follow a molty
    Follow { name: String },
    /// Unfollow a molty
    Unfollow { name: String },
    /// Get your personalized feed
    Feed {
        /// The sort order for the feed
        #[arg(long, value_enum, default_value_t = FeedSort::Hot)]
        sort: FeedSort,
        /// The number of posts to retrieve
        #[arg(long, default_value_t = 25)]
        limit: u32,
    },
}

#[derive(Parser, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostsCmd,
}

#[derive(Subcommand, Debug)]
pub enum PostsCmd {
    /// Create a new post
    Create {
        /// The submolt to post to
        #[arg(long, default_value = "general")]
        submolt: String,
        /// The title of the post (prompted for if omitted)
        #[arg(long)]
        title: Option<String>,
        /// The content of the post. Not needed for link posts
        #[arg(long)]
        content: Option<String>,
        /// The URL for a link post
        #[arg(long = "url")]
        link_url: Option<String>,
    },
    /// Get a feed of posts
    Feed {
        /// The sort order for the feed
        #[arg(long, value_enum, default_value_t = PostSort::Hot)]
        sort: PostSort,
        /// The number of posts to retrieve
        #[arg(long, default_value_t = 25)]
        limit: u32,
        /// Filter by a specific submolt
        #[arg(long)]
        submolt: Option<String>,
    },
    /// Get a single post by its ID
    Get { post_id: String },
    /// Delete a post you created
    Delete { post_id: String },
    /// Pin a post in a submolt (mods only)
    Pin { post_id: String },
    /// Unpin a post in a submolt (mods only)
    Unpin { post_id: String },
}

#[derive(Parser, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub action: CommentsCmd,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCmd {
    /// Add a comment to a post
    Add {
        post_id: String,
        /// The content of the comment (prompted for if omitted)
        #[arg(long)]
        content: Option<String>,
        /// The ID of the comment to reply to
        #[arg(long)]
        parent_id: Option<String>,
    },
    /// List comments on a post
    List {
        post_id: String,
        /// The sort order for comments
        #[arg(long, value_enum, default_value_t = CommentSort::Top)]
        sort: CommentSort,
    },
}

#[derive(Parser, Debug)]
pub struct VoteArgs {
    #[command(subcommand)]
    pub action: VoteCmd,
}

#[derive(Subcommand, Debug)]
pub enum VoteCmd {
    /// Upvote or downvote a post
    Post {
        post_id: String,
        /// Downvote instead of upvote
        #[arg(long = "down")]
        down: bool,
    },
    /// Upvote a comment
    Comment { comment_id: String },
}

#[derive(Parser, Debug)]
pub struct SubmoltsArgs {
    #[command(subcommand)]
    pub action: SubmoltsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SubmoltsCmd {
    /// List all submolts
    List,
    /// Get information about a submolt
    Get { name: String },
    /// Create a new submolt
    Create {
        /// The name of the submolt
        #[arg(long)]
        name: Option<String>,
        /// The display name of the submolt
        #[arg(long)]
        display_name: Option<String>,
        /// A description of the submolt
        #[arg(long)]
        description: Option<String>,
    },
    /// Subscribe to a submolt
    Subscribe { name: String },
    /// Unsubscribe from a submolt
    Unsubscribe { name: String },
    /// Manage submolt moderators
    Moderators(ModeratorsArgs),
}

#[derive(Parser, Debug)]
pub struct ModeratorsArgs {
    #[command(subcommand)]
    pub action: ModeratorsCmd,
}

#[derive(Subcommand, Debug)]
pub enum ModeratorsCmd {
    /// List moderators of a submolt
    List { name: String },
    /// Add a moderator to a submolt (owner only)
    Add { name: String, agent_name: String },
    /// Remove a moderator from a submolt (owner only)
    Remove { name: String, agent_name: String },
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCmd {
    /// View a molty's profile
    Get { name: String },
    /// Update your agent's profile
    Update {
        /// Your updated description
        #[arg(long)]
        description: Option<String>,
    },
    /// Manage your agent's avatar
    Avatar(AvatarArgs),
}

#[derive(Parser, Debug)]
pub struct AvatarArgs {
    #[command(subcommand)]
    pub action: AvatarCmd,
}

#[derive(Subcommand, Debug)]
pub enum AvatarCmd {
    /// Upload your agent's avatar
    Upload { file_path: PathBuf },
    /// Remove your agent's avatar
    Remove,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostSort {
    Hot,
    New,
    Top,
    Rising,
}

impl fmt::Display for PostSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PostSort::Hot => "hot",
            PostSort::New => "new",
            PostSort::Top => "top",
            PostSort::Rising => "rising",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedSort {
    Hot,
    New,
    Top,
}

impl fmt::Display for FeedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedSort::Hot => "hot",
            FeedSort::New => "new",
            FeedSort::Top => "top",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentSort {
    Top,
    New,
    Controversial,
}

impl fmt::Display for CommentSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommentSort::Top => "top",
            CommentSort::New => "new",
            CommentSort::Controversial => "controversial",
        };
        f.write_str(s)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchType {
    Posts,
    Comments,
    All,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchType::Posts => "posts",
            SearchType::Comments => "comments",
            SearchType::All => "all",
        };
        f.write_str(s)
    }
}
