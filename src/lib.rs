// Library root
// -----------
// This crate exposes a small library surface for the `moltbook` binary.
//
// Module responsibilities:
// - `api`: the blocking HTTP client and the `CliError` type every layer
//   reports through.
// - `cli`: clap definitions for the full command surface.
// - `commands`: one handler module per subcommand group; each handler
//   validates local preconditions, issues a single request, and prints
//   the result.
// - `config`: the credentials file (api key + agent name) with env-var
//   fallback.
// - `print`: pretty-JSON output.
// - `ui`: the `Prompter` abstraction over dialoguer, so interactive
//   input can be stubbed in tests.
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod print;
pub mod ui;
