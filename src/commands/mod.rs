// Command handlers, one module per subcommand group. Every handler
// follows the same shape: validate local preconditions, issue exactly
// one request through `ApiClient`, print the result.

pub mod agent;
pub mod comments;
pub mod posts;
pub mod profile;
pub mod search;
pub mod submolts;
pub mod vote;

#[cfg(test)]
mod tests;
