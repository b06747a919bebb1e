//! Process-level session: banner, connect, command loop, exit message and pause.

use std::io::Write;
use std::time::Duration;

use tokio::io::AsyncBufRead;

use crate::config::Cli;
use crate::{ClientError, CommandLoop, RemoteClient, SvcAClient};

pub const BANNER: &str = "Service A quick test client";
pub const EXIT_MESSAGE: &str = "svca-quick-test EXITING!";

/// Connect to the configured service and run an interactive session over `input`/`out`.
///
/// Connect failures and remote call failures are returned; nothing is printed
/// after them.
pub async fn run<R, W>(cli: &Cli, input: R, mut out: W) -> Result<(), ClientError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    print_line(&mut out, BANNER)?;

    let mut client =
        match SvcAClient::connect_with_timeout(cli.addr.clone(), cli.connect_timeout()).await {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(addr = %cli.addr, "Failed to connect to Service A: {e}");
                return Err(e);
            }
        };
    tracing::info!(addr = %cli.addr, "Connected to Service A");

    run_session(&mut client, cli.exit_pause(), input, &mut out).await
}

/// Run the command loop with an already acquired client, then print the exit
/// message and pause for `exit_pause`.
pub async fn run_session<C, R, W>(
    client: &mut C,
    exit_pause: Duration,
    input: R,
    out: &mut W,
) -> Result<(), ClientError>
where
    C: RemoteClient + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut command_loop = CommandLoop::new(client, &mut *out);
    if let Err(e) = command_loop.run(input).await {
        if e.is_transport() {
            tracing::error!("Service A unreachable, aborting: {e}");
        } else {
            tracing::error!("Command loop aborted: {e}");
        }
        return Err(e);
    }

    print_line(out, EXIT_MESSAGE)?;
    tokio::time::sleep(exit_pause).await;
    Ok(())
}

fn print_line<W: Write>(out: &mut W, text: &str) -> Result<(), ClientError> {
    writeln!(out, "{text}")
        .and_then(|_| out.flush())
        .map_err(|e| ClientError::from_io_error(e, "console write"))
}
