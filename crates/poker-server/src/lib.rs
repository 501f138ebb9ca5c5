// HTTP front end for the player stores.

pub mod server;

pub use server::{run, PlayerServer, JSON_CONTENT_TYPE};
