//! Full chain assembled the way the binary does it, with a mock assistant and a mock quote server.

use aget_cli::build_handler_chain;
use aget_core::{Chat, HandlerResponse, Message, User};
use async_trait::async_trait;
use handlers::{MessageRouter, RateLimiter, HELP_TEXT, RATE_LIMITED_TEXT, WELCOME_TEXT};
use llm_client::{AssistantClient, LlmClient};
use price_client::{PriceClient, PriceConfig};
use std::sync::Arc;
use std::time::Duration;

struct EchoLlm;

#[async_trait]
impl LlmClient for EchoLlm {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok("Bitcoin is a decentralized digital currency.".to_string())
    }
}

fn message(user_id: i64, content: &str) -> Message {
    Message::text(
        "msg-1",
        User {
            id: user_id,
            username: Some("trader".to_string()),
            first_name: Some("Trader".to_string()),
            last_name: None,
        },
        Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content,
    )
}

fn router(api_url: String) -> MessageRouter {
    let prices = PriceClient::new(&PriceConfig::default().with_api_url(api_url)).unwrap();
    let assistant = AssistantClient::new(Arc::new(EchoLlm));
    MessageRouter::new(prices, assistant)
}

fn reply_text(response: HandlerResponse) -> String {
    match response {
        HandlerResponse::Reply(text) => text,
        other => panic!("expected reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chain_routes_commands_prices_and_questions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/simple/price")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("ids".into(), "bitcoin".into()),
            mockito::Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"bitcoin":{"usd":50000.0}}"#)
        .expect(1)
        .create_async()
        .await;

    let limiter = Arc::new(RateLimiter::new(Duration::from_secs(60), 10));
    let chain = build_handler_chain(router(format!("{}/simple/price", server.url())), limiter);
    assert_eq!(chain.len(), 4);

    let start = chain.handle(&message(1, "/start")).await.unwrap();
    assert_eq!(reply_text(start), WELCOME_TEXT);

    let help = chain.handle(&message(1, "/help")).await.unwrap();
    assert_eq!(reply_text(help), HELP_TEXT);

    let price = chain.handle(&message(1, "price of bitcoin")).await.unwrap();
    assert_eq!(reply_text(price), "BITCOIN: $50000.00 USD");

    let answer = chain.handle(&message(1, "What is Bitcoin?")).await.unwrap();
    assert_eq!(reply_text(answer), "Bitcoin is a decentralized digital currency.");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_chain_rate_limits_before_commands() {
    let limiter = Arc::new(RateLimiter::new(Duration::from_secs(60), 1));
    let chain = build_handler_chain(router("http://127.0.0.1:1/simple/price".to_string()), limiter);

    let first = chain.handle(&message(7, "/start")).await.unwrap();
    assert_eq!(reply_text(first), WELCOME_TEXT);

    let second = chain.handle(&message(7, "/help")).await.unwrap();
    assert_eq!(reply_text(second), RATE_LIMITED_TEXT);

    let other_user = chain.handle(&message(8, "/help")).await.unwrap();
    assert_eq!(reply_text(other_user), HELP_TEXT);
}

#[tokio::test]
async fn test_chain_reports_price_failure() {
    let limiter = Arc::new(RateLimiter::new(Duration::from_secs(60), 10));
    let chain = build_handler_chain(router("http://127.0.0.1:1/simple/price".to_string()), limiter);

    let reply = chain.handle(&message(3, "price of eth")).await.unwrap();
    assert_eq!(reply_text(reply), "Price lookup failed.");
}
