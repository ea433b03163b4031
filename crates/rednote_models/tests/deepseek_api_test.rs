//! Tests for the DeepSeek client against a live endpoint.
//!
//! These tests require an OpenAI-compatible server running locally with a
//! DeepSeek model installed, and DEEPSEEK_API_KEY set in the environment.
//! Install Ollama: https://ollama.ai/download
//! Pull model: ollama pull deepseek-r1:8b
//!
//! Run with: cargo test --package rednote_models --features api -- --ignored

#![cfg(feature = "api")]

use rednote_core::{Conversation, GenerateRequest};
use rednote_error::DeepSeekErrorKind;
use rednote_interface::RednoteDriver;
use rednote_models::{DEFAULT_BASE_URL, DeepSeekClient};

fn client() -> DeepSeekClient {
    dotenvy::dotenv().ok();
    DeepSeekClient::from_env("deepseek-r1:8b", DEFAULT_BASE_URL).expect("DEEPSEEK_API_KEY not set")
}

#[tokio::test]
#[ignore] // Requires a model server running locally
async fn test_basic_generation() -> anyhow::Result<()> {
    let client = client();

    let conversation = Conversation::seed("You are a helpful assistant.", "Say hello");
    let request = GenerateRequest::from_conversation(&conversation);

    let response = RednoteDriver::generate(&client, &request).await?;

    assert!(response.content().is_some());
    println!("Response: {:?}", response.content());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_server_not_running() {
    dotenvy::dotenv().ok();
    // Non-standard port where nothing should be listening
    let client = DeepSeekClient::new(
        "test-key".to_string(),
        "deepseek-r1:8b".to_string(),
        "http://localhost:11435/v1".to_string(),
    );

    let conversation = Conversation::seed("You are a helpful assistant.", "Say hello");
    let request = GenerateRequest::from_conversation(&conversation);

    let result = DeepSeekClient::generate(&client, &request).await;
    let err = result.expect_err("request should fail without a server");
    assert!(matches!(err.kind, DeepSeekErrorKind::Http(_)));
}
