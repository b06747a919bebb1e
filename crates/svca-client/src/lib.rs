//! Quick test client for the Service A demo API.
//!
//! An interactive console loop that turns typed commands into `SvcADemo` gRPC
//! calls and prints the replies.

pub mod app;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod remote;
pub mod repl;
pub mod telemetry;

pub use client::SvcAClient;
pub use command::ParsedCommand;
pub use error::ClientError;
pub use remote::RemoteClient;
pub use repl::{CommandLoop, LoopState};
