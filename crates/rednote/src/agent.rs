//! The bounded retry loop that drives note generation.

use crate::extraction::extract_note;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::render::render;
use rednote_core::{Conversation, GenerateRequest, Note};
use rednote_error::RednoteError;
use rednote_interface::RednoteDriver;
use tracing::{debug, error, info, instrument, warn};

/// Default cap on remote calls per generation.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Outcome of one generation loop.
///
/// Exactly one of these holds at loop termination.
#[derive(Debug)]
pub enum LoopResult {
    /// A well-formed note was extracted
    Success(Note),
    /// The iteration cap was reached without a valid extraction, or the
    /// model stopped producing content
    Exhausted,
    /// The remote call itself failed; not retried
    Aborted(RednoteError),
}

/// Agent that drives a model toward a well-formed note.
///
/// Owns no conversation state between invocations: each call to
/// [`generate`](NoteAgent::generate) seeds a fresh conversation and discards
/// it at exit. The driver is injected by the caller, constructed once at
/// process start.
pub struct NoteAgent<D: RednoteDriver> {
    driver: D,
    max_iterations: u32,
}

impl<D: RednoteDriver> NoteAgent<D> {
    /// Creates an agent with the default iteration cap.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the iteration cap. Zero violates the input contract and is
    /// clamped to one rather than producing a loop that never calls out.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        if max_iterations == 0 {
            warn!("max_iterations of 0 requested; clamping to 1");
            self.max_iterations = 1;
        } else {
            self.max_iterations = max_iterations;
        }
        self
    }

    /// Runs the retry loop until a note is extracted, the cap is reached,
    /// or a remote call fails.
    ///
    /// Each failed extraction appends the assistant's raw reply to the
    /// conversation, so on the next turn the model sees its own malformed
    /// answer; no corrective instruction is injected. Transport failures
    /// are not retried.
    #[instrument(skip(self), fields(backend = self.driver.name(), max_iterations = self.max_iterations))]
    pub async fn generate(&self, subject: &str, style: &str) -> LoopResult {
        info!(subject, style, "Starting note generation");

        let mut conversation = Conversation::seed(SYSTEM_PROMPT, user_prompt(subject, style));

        for iteration in 1..=self.max_iterations {
            debug!(iteration, messages = conversation.len(), "Sending conversation");

            let request = GenerateRequest::from_conversation(&conversation);
            let response = match self.driver.generate(&request).await {
                Ok(response) => response,
                Err(e) => {
                    error!(iteration, error = %e, "Remote call failed; aborting");
                    return LoopResult::Aborted(e);
                }
            };

            let Some(content) = response.content() else {
                warn!(iteration, "Response carried no content; giving up");
                return LoopResult::Exhausted;
            };

            match extract_note(content) {
                Ok(note) => {
                    info!(iteration, title = %note.title(), "Extracted structured note");
                    return LoopResult::Success(note);
                }
                Err(e) => {
                    debug!(iteration, error = %e, "No extractable note; retrying");
                    conversation = conversation.with_assistant(content.clone());
                }
            }
        }

        warn!(
            max_iterations = self.max_iterations,
            "Iteration cap reached without a structured note"
        );
        LoopResult::Exhausted
    }

    /// Generates a note and renders it, or returns a human-readable
    /// failure message.
    ///
    /// Exhaustion and abort present similarly to the caller; the
    /// distinction lives in the logs.
    pub async fn generate_note(&self, subject: &str, style: &str) -> String {
        match self.generate(subject, style).await {
            LoopResult::Success(note) => render(&note),
            LoopResult::Exhausted => {
                "Failed to generate a note: the model never produced a well-formed draft."
                    .to_string()
            }
            LoopResult::Aborted(e) => {
                format!("Failed to generate a note: the model endpoint was unreachable ({e}).")
            }
        }
    }
}
