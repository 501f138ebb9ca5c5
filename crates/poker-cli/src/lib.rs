// One-shot command line front end: reads "<name> wins" and records the win.

pub mod cli;

pub use cli::{extract_winner, Cli, CliError};
