//! Driver trait for conversational model backends.

use async_trait::async_trait;
use rednote_core::{GenerateRequest, GenerateResponse};
use rednote_error::RednoteResult;

/// A conversational model backend.
///
/// The generation loop only speaks to the remote boundary through this
/// trait, so providers are swappable and tests can script responses.
#[async_trait]
pub trait RednoteDriver: Send + Sync {
    /// Sends the full conversation to the backend and returns its reply.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the backend rejects
    /// the request. Malformed assistant *content* is not an error at this
    /// layer; it comes back as ordinary text for the caller to judge.
    async fn generate(&self, request: &GenerateRequest) -> RednoteResult<GenerateResponse>;

    /// Human-readable name of the backend, for logging.
    fn name(&self) -> &str;
}
