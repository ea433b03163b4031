//! Tests for the generation loop's termination and call-count behavior.

use async_trait::async_trait;
use rednote::{LoopResult, NoteAgent};
use rednote_core::{GenerateRequest, GenerateResponse};
use rednote_error::{HttpError, RednoteResult};
use rednote_interface::RednoteDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

const GOOD_REPLY: &str =
    "Done!\n```json\n{\"title\":\"T\",\"body\":\"B\",\"hashtags\":[\"#a\"],\"emojis\":[\"e\"]}\n```";

/// Driver that replays a scripted list of replies and records each request.
///
/// Clones share state, so tests keep a handle to inspect call counts after
/// handing the driver to the agent.
#[derive(Clone)]
struct ScriptedDriver {
    replies: Arc<Mutex<VecDeque<RednoteResult<GenerateResponse>>>>,
    calls: Arc<AtomicUsize>,
    message_counts: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedDriver {
    fn new(replies: Vec<RednoteResult<GenerateResponse>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::new(AtomicUsize::new(0)),
            message_counts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn message_counts(&self) -> Vec<usize> {
        self.message_counts.lock().unwrap().clone()
    }
}

#[async_trait]
impl RednoteDriver for ScriptedDriver {
    async fn generate(&self, request: &GenerateRequest) -> RednoteResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.message_counts
            .lock()
            .unwrap()
            .push(request.messages().len());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("driver called more times than scripted")
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn text(content: &str) -> RednoteResult<GenerateResponse> {
    Ok(GenerateResponse::new(Some(content.to_string())))
}

fn transport_failure() -> RednoteResult<GenerateResponse> {
    Err(HttpError::new("connection refused").into())
}

#[tokio::test]
async fn extractable_first_reply_succeeds_after_one_call() {
    let driver = ScriptedDriver::new(vec![text(GOOD_REPLY)]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);

    let result = agent.generate("serum", "playful").await;

    let LoopResult::Success(note) = result else {
        panic!("expected success, got {result:?}");
    };
    assert_eq!(note.title(), "T");
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn malformed_replies_exhaust_after_exactly_n_calls() {
    let driver = ScriptedDriver::new(vec![
        text("still thinking..."),
        text("here is your copy, no json though"),
        text("almost: ```json not quite ```"),
    ]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(3);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Exhausted));
    assert_eq!(driver.calls(), 3);
}

#[tokio::test]
async fn each_malformed_reply_grows_the_conversation() {
    let driver = ScriptedDriver::new(vec![
        text("nope"),
        text("still nope"),
        text(GOOD_REPLY),
    ]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(5);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Success(_)));
    // System + user seed, then one appended assistant turn per failure.
    assert_eq!(driver.message_counts(), vec![2, 3, 4]);
}

#[tokio::test]
async fn transport_failure_aborts_without_retry() {
    let driver = ScriptedDriver::new(vec![
        text("nope"),
        text("still nope"),
        transport_failure(),
    ]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Aborted(_)));
    assert_eq!(driver.calls(), 3);
}

#[tokio::test]
async fn empty_content_exhausts_immediately() {
    let driver = ScriptedDriver::new(vec![Ok(GenerateResponse::new(None))]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Exhausted));
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn whitespace_reply_is_retried_not_exhausted() {
    let driver = ScriptedDriver::new(vec![text("  \n  "), text(GOOD_REPLY)]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Success(_)));
    assert_eq!(driver.calls(), 2);
}

#[tokio::test]
async fn zero_iteration_cap_is_clamped_to_one() {
    let driver = ScriptedDriver::new(vec![text("nope")]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(0);

    let result = agent.generate("serum", "playful").await;

    assert!(matches!(result, LoopResult::Exhausted));
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn bare_json_reply_succeeds_without_a_fence() {
    let driver = ScriptedDriver::new(vec![text(
        r#"{"title":"bare","body":"B","hashtags":[],"emojis":[]}"#,
    )]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);

    let result = agent.generate("serum", "playful").await;

    let LoopResult::Success(note) = result else {
        panic!("expected success, got {result:?}");
    };
    assert_eq!(note.title(), "bare");
}

#[tokio::test]
async fn generate_note_renders_success_and_reports_failure() {
    let driver = ScriptedDriver::new(vec![text(GOOD_REPLY)]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(10);
    let rendered = agent.generate_note("serum", "playful").await;
    assert_eq!(rendered, "## T\n\nB\n\n#a");

    let driver = ScriptedDriver::new(vec![text("nope")]);
    let agent = NoteAgent::new(driver.clone()).with_max_iterations(1);
    let message = agent.generate_note("serum", "playful").await;
    assert!(message.starts_with("Failed to generate a note"));
}
