//! Interactive read-dispatch-print loop.
//!
//! Reads one console line per iteration, dispatches it by command name to a
//! request builder, invokes the remote call and prints the reply. An empty
//! line or end of input stops the loop. Remote failures are not handled here;
//! they abort [`CommandLoop::run`] with the error.

use std::io::Write;
use std::time::Duration;

use svca_proto::{SvcABftRequest, SvcAPublishEventRequest};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::ClientError;
use crate::command::{
    CMD_BASIC_FUNCTIONAL_TEST, CMD_PUBLISH_EVENT, CMD_PUBLISH_EVENT_MULTI, ParsedCommand,
    parse_delay_ms, parse_event_count, sequence_number,
};
use crate::remote::RemoteClient;

pub const PROMPT: &str = "\
Input a-bft arg1 arg2 ENTER to run the Service A basic functional test.
Or a-pubevent pubsubkind pubsubname topicname payload ENTER to publish one event.
Or a-pubeventmulti pubsubkind pubsubname topicname payload nevents delaymsec ENTER to publish nevents events.
     OR Press ENTER to quit.";

pub const FAREWELL: &str = "Quitting on user pressing Enter with no other input.";

pub const BFT_TEST_DATA2: &str = "Test data, test data, test data, ....";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct CommandLoop<'a, C: RemoteClient + ?Sized, W: Write> {
    client: &'a mut C,
    out: W,
}

impl<'a, C: RemoteClient + ?Sized, W: Write> CommandLoop<'a, C, W> {
    pub fn new(client: &'a mut C, out: W) -> Self {
        Self { client, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompt, read and dispatch lines until an empty line or end of input.
    pub async fn run<R>(&mut self, mut input: R) -> Result<(), ClientError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            self.print(PROMPT)?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| ClientError::from_io_error(e, "console read"))?;
            // Invalid UTF-8 is replaced rather than rejected; the line still gets dispatched.
            let text = String::from_utf8_lossy(&buf);
            let line = (read > 0).then(|| text.trim_end_matches(['\r', '\n']));

            if self.handle_line(line).await? == LoopState::Stopped {
                tracing::debug!("Command loop stopped");
                return Ok(());
            }
        }
    }

    /// Handle one line of input. `None` means end of input.
    pub async fn handle_line(&mut self, line: Option<&str>) -> Result<LoopState, ClientError> {
        let line = match line {
            Some(line) if !line.is_empty() => line,
            _ => {
                self.print(FAREWELL)?;
                return Ok(LoopState::Stopped);
            }
        };

        let cmd = ParsedCommand::parse(line);
        tracing::debug!(name = %cmd.name, "Dispatching command");

        match cmd.name.as_str() {
            CMD_BASIC_FUNCTIONAL_TEST => self.basic_functional_test(&cmd).await?,
            CMD_PUBLISH_EVENT => self.publish_event(&cmd).await?,
            CMD_PUBLISH_EVENT_MULTI => self.publish_event_multi(&cmd).await?,
            _ => self.print(&format!(
                "Unrecognized cmd. userInput = {line}. Try again!"
            ))?,
        }

        Ok(LoopState::Running)
    }

    async fn basic_functional_test(&mut self, cmd: &ParsedCommand) -> Result<(), ClientError> {
        let request = SvcABftRequest {
            test_data1: format!(
                "SvcADemo.SvcADemoClient request: Cmd={} Arg1={}, Arg2={}.",
                cmd.name,
                cmd.arg(1),
                cmd.arg(2)
            ),
            test_data2: BFT_TEST_DATA2.to_string(),
        };
        let reply = self.client.run_basic_functional_test(request).await?;

        self.print(&format!("DoBasicFunctionalTest response =\n{reply}\n"))
    }

    async fn publish_event(&mut self, cmd: &ParsedCommand) -> Result<(), ClientError> {
        let reply = self.client.publish_event(publish_request(cmd)).await?;

        self.print(&format!("Service response =\n  {reply}\n"))
    }

    async fn publish_event_multi(&mut self, cmd: &ParsedCommand) -> Result<(), ClientError> {
        let request = publish_request(cmd);

        let n_events = match parse_event_count(cmd.arg(5)) {
            Some(n) => n,
            None => {
                self.print(&format!(
                    "\n** ERROR: Input value 'nevents' = '{}' is not an integer. No events sent, please try again.",
                    cmd.arg(5)
                ))?;
                0
            }
        };
        let delay_ms = match parse_delay_ms(cmd.arg(6)) {
            Some(ms) => ms,
            None => {
                if !cmd.arg(6).is_empty() {
                    self.print(&format!(
                        "** WARNING: Input value 'delaymsec' = '{}' is not a non-negative integer. Using 0.",
                        cmd.arg(6)
                    ))?;
                }
                0
            }
        };
        let delay = Duration::from_millis(delay_ms);

        for i in 1..=n_events {
            // The sequence number is only shown on the console; the request is sent unchanged.
            let display_payload = format!("{}, {}", sequence_number(i), request.event_payload);
            let reply = self.client.publish_event(request.clone()).await?;

            self.print(&format!(
                "Sent message number {i} of {n_events} messages to send.\n\t\t\t\t\tMsg = {display_payload}"
            ))?;
            self.print(&format!("Service response =\n  {reply}\n"))?;

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), ClientError> {
        writeln!(self.out, "{text}")
            .and_then(|_| self.out.flush())
            .map_err(|e| ClientError::from_io_error(e, "console write"))
    }
}

fn publish_request(cmd: &ParsedCommand) -> SvcAPublishEventRequest {
    SvcAPublishEventRequest {
        pub_sub_kind: cmd.arg(1).to_string(),
        pub_sub_name: cmd.arg(2).to_string(),
        topic_name: cmd.arg(3).to_string(),
        event_payload: cmd.arg(4).to_string(),
    }
}
