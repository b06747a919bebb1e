use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "svca-quick-test",
    version,
    author,
    about = "Interactive quick test client for the Service A demo API"
)]
pub struct Cli {
    /// Service A address, e.g. http://127.0.0.1:50051
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    pub addr: String,

    /// Connect and per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub connect_timeout: u64,

    /// Pause after the exit message, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub exit_pause_ms: u64,
}

impl Cli {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn exit_pause(&self) -> Duration {
        Duration::from_millis(self.exit_pause_ms)
    }
}
