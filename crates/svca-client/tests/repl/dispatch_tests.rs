use svca_client::repl::{BFT_TEST_DATA2, FAREWELL, PROMPT};
use svca_client::{ClientError, CommandLoop, LoopState};
use svca_proto::SvcAPublishEventRequest;

use crate::test_utilities::{MockRemoteClient, RemoteCall, run_loop};

fn publish(kind: &str, name: &str, topic: &str, payload: &str) -> SvcAPublishEventRequest {
    SvcAPublishEventRequest {
        pub_sub_kind: kind.into(),
        pub_sub_name: name.into(),
        topic_name: topic.into(),
        event_payload: payload.into(),
    }
}

#[tokio::test]
async fn test_empty_line_stops_without_remote_call() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let state = command_loop.handle_line(Some("")).await.expect("handle");
    assert_eq!(state, LoopState::Stopped);

    let state = command_loop.handle_line(None).await.expect("handle");
    assert_eq!(state, LoopState::Stopped);

    let output = String::from_utf8(command_loop.into_output()).unwrap();
    assert_eq!(output.matches(FAREWELL).count(), 2);
    assert!(client.calls.is_empty());
}

#[tokio::test]
async fn test_basic_functional_test_embeds_args() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let state = command_loop
        .handle_line(Some("a-bft x y"))
        .await
        .expect("handle");
    assert_eq!(state, LoopState::Running);

    let output = String::from_utf8(command_loop.into_output()).unwrap();
    assert!(output.contains(
        "DoBasicFunctionalTest response =\nbft ok: SvcADemo.SvcADemoClient request: Cmd=a-bft Arg1=x, Arg2=y."
    ));

    assert_eq!(client.calls.len(), 1);
    match &client.calls[0].0 {
        RemoteCall::BasicFunctionalTest(req) => {
            assert_eq!(
                req.test_data1,
                "SvcADemo.SvcADemoClient request: Cmd=a-bft Arg1=x, Arg2=y."
            );
            assert_eq!(req.test_data2, BFT_TEST_DATA2);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_publish_event_sends_exactly_one_request() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let state = command_loop
        .handle_line(Some("a-pubevent k n t p"))
        .await
        .expect("handle");
    assert_eq!(state, LoopState::Running);

    let output = String::from_utf8(command_loop.into_output()).unwrap();
    assert!(output.contains("Service response =\n  published #1"));
    assert_eq!(client.published(), vec![publish("k", "n", "t", "p")]);
}

#[tokio::test]
async fn test_publish_event_with_missing_args_sends_empty_fields() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    command_loop
        .handle_line(Some("a-pubevent k"))
        .await
        .expect("handle");
    drop(command_loop);

    assert_eq!(client.published(), vec![publish("k", "", "", "")]);
}

#[tokio::test]
async fn test_unrecognized_command_makes_no_remote_call() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let state = command_loop.handle_line(Some("foo")).await.expect("handle");
    assert_eq!(state, LoopState::Running);

    let output = String::from_utf8(command_loop.into_output()).unwrap();
    assert!(output.contains("Unrecognized cmd. userInput = foo. Try again!"));
    assert!(client.calls.is_empty());
}

#[tokio::test]
async fn test_whitespace_only_line_is_not_a_quit() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let state = command_loop.handle_line(Some(" ")).await.expect("handle");
    assert_eq!(state, LoopState::Running);
    drop(command_loop);
    assert!(client.calls.is_empty());
}

#[tokio::test]
async fn test_run_stops_at_first_empty_line() {
    let mut client = MockRemoteClient::new();
    let (result, output) = run_loop(&mut client, "foo\na-pubevent k n t p\n\nfoo\n").await;

    result.expect("run");
    assert_eq!(output.matches(PROMPT).count(), 3);
    assert_eq!(output.matches("Unrecognized cmd.").count(), 1);
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
    assert_eq!(client.published(), vec![publish("k", "n", "t", "p")]);
}

#[tokio::test]
async fn test_run_stops_at_end_of_input() {
    let mut client = MockRemoteClient::new();
    let (result, output) = run_loop(&mut client, "foo\nbar").await;

    result.expect("run");
    assert_eq!(output.matches(PROMPT).count(), 3);
    assert!(output.contains("userInput = bar."));
    assert!(output.contains(FAREWELL));
}

#[tokio::test]
async fn test_run_strips_crlf_line_endings() {
    let mut client = MockRemoteClient::new();
    let (result, _) = run_loop(&mut client, "a-pubevent k n t p\r\n\r\n").await;

    result.expect("run");
    assert_eq!(client.published(), vec![publish("k", "n", "t", "p")]);
}

#[tokio::test]
async fn test_invalid_utf8_line_is_dispatched_not_fatal() {
    let mut client = MockRemoteClient::new();
    let mut command_loop = CommandLoop::new(&mut client, Vec::new());

    let input: &[u8] = b"caf\xe9\na-pubevent k n t p\n\n";
    command_loop.run(input).await.expect("run");

    let output = String::from_utf8(command_loop.into_output()).unwrap();
    assert!(output.contains("Unrecognized cmd. userInput = caf\u{FFFD}. Try again!"));
    assert!(output.ends_with(&format!("{FAREWELL}\n")));
    assert_eq!(client.published(), vec![publish("k", "n", "t", "p")]);
}

#[tokio::test]
async fn test_remote_failure_aborts_run() {
    let mut client = MockRemoteClient::failing_after(0);
    let (result, output) = run_loop(&mut client, "a-pubevent k n t p\nfoo\n\n").await;

    match result {
        Err(ClientError::Rpc { code, message }) => {
            assert_eq!(code, tonic::Code::Unavailable);
            assert_eq!(message, "mock service down");
        }
        other => panic!("expected rpc failure, got {other:?}"),
    }
    assert_eq!(client.calls.len(), 1);
    assert!(!output.contains("Unrecognized cmd."));
    assert!(!output.contains(FAREWELL));
}
