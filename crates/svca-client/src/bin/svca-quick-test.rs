use clap::Parser;
use svca_client::config::Cli;
use svca_client::{app, telemetry};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let cli = Cli::parse();
    app::run(&cli, BufReader::new(tokio::io::stdin()), std::io::stdout()).await?;
    Ok(())
}
