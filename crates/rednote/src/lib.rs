//! Viral marketing-copy generation for Rednote-style platforms.
//!
//! The crate drives a conversational model through a bounded retry loop
//! until it yields a well-formed structured note (title, body, hashtags,
//! emoji), then renders the note as Markdown. The model backend sits behind
//! the [`RednoteDriver`](rednote_interface::RednoteDriver) trait; the
//! bundled provider is [`DeepSeekClient`](rednote_models::DeepSeekClient).
//!
//! ```no_run
//! use rednote::NoteAgent;
//! use rednote_models::{DEFAULT_BASE_URL, DeepSeekClient};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = DeepSeekClient::from_env("deepseek-r1:8b", DEFAULT_BASE_URL)?;
//! let agent = NoteAgent::new(client);
//! let markdown = agent.generate_note("Radiance Repair Serum", "playful").await;
//! println!("{markdown}");
//! # Ok(())
//! # }
//! ```

mod agent;
mod extraction;
mod prompt;
mod render;

pub use agent::{DEFAULT_MAX_ITERATIONS, LoopResult, NoteAgent};
pub use extraction::{extract_json, extract_note, parse_note};
pub use prompt::{SYSTEM_PROMPT, user_prompt};
pub use render::{render, render_raw};
