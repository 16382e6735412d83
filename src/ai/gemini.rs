//! Client for the Gemini generateContent endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ai::types::AiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Raw reply from the generation endpoint, before unwrapping.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

/// Sends a single generateContent request. Split from the client so tests
/// can substitute a scripted transport.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn execute(&self, url: &str, request: &GeminiRequest)
        -> Result<TransportReply, AiError>;
}

/// Production transport over the shared reqwest client.
pub struct HttpTransport;

#[async_trait]
impl GenerationTransport for HttpTransport {
    async fn execute(
        &self,
        url: &str,
        request: &GeminiRequest,
    ) -> Result<TransportReply, AiError> {
        let response = crate::http::shared_client()
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::Network(format!("Failed to read response: {}", e)))?;

        Ok(TransportReply { status, body })
    }
}

/// One-shot text generation client. Holds the credential injected at
/// construction time; stateless across calls.
pub struct GeminiClient {
    api_key: Option<String>,
    endpoint: String,
    transport: Arc<dyn GenerationTransport>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, endpoint: &str) -> Self {
        Self::with_transport(api_key, endpoint, Arc::new(HttpTransport))
    }

    pub fn with_transport(
        api_key: Option<String>,
        endpoint: &str,
        transport: Arc<dyn GenerationTransport>,
    ) -> Self {
        GeminiClient {
            api_key,
            endpoint: endpoint.to_string(),
            transport,
        }
    }

    /// Whether an API credential is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one prompt and return the first generated text candidate.
    /// Every call is independent: no retry, no cache, no rate limiting.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::NotConfigured)?;
        if prompt.trim().is_empty() {
            return Err(AiError::InvalidInput);
        }

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        log::debug!("Sending generateContent request ({} chars)", prompt.len());

        let url = format!("{}?key={}", self.endpoint, api_key);
        let reply = self.transport.execute(&url, &request).await?;

        if !(200..300).contains(&reply.status) {
            return Err(AiError::Upstream {
                status: reply.status,
                message: upstream_message(&reply.body),
            });
        }

        extract_text(&reply.body)
    }
}

/// Pull the human-readable message out of a Gemini error body, falling back
/// to the raw body text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Unwrap `candidates[0].content.parts[0].text` from a success body. Any
/// other shape counts as an empty response.
fn extract_text(body: &str) -> Result<String, AiError> {
    let response: GeminiResponse =
        serde_json::from_str(body).map_err(|_| AiError::EmptyResponse)?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(AiError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    const ENDPOINT: &str = "https://gemini.test/v1beta/models/gemini-pro:generateContent";

    /// Scripted transport that records how many requests reach the wire.
    struct MockTransport {
        replies: Mutex<Vec<TransportReply>>,
        calls: AtomicU32,
        last_request: Mutex<Option<GeminiRequest>>,
    }

    impl MockTransport {
        fn new(replies: Vec<TransportReply>) -> Self {
            MockTransport {
                replies: Mutex::new(replies),
                calls: AtomicU32::new(0),
                last_request: Mutex::new(None),
            }
        }

        fn reply(status: u16, body: &str) -> TransportReply {
            TransportReply {
                status,
                body: body.to_string(),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationTransport for MockTransport {
        async fn execute(
            &self,
            _url: &str,
            request: &GeminiRequest,
        ) -> Result<TransportReply, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(self.replies.lock().unwrap().remove(0))
        }
    }

    fn client_with(
        api_key: Option<&str>,
        replies: Vec<TransportReply>,
    ) -> (GeminiClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new(replies));
        let client = GeminiClient::with_transport(
            api_key.map(String::from),
            ENDPOINT,
            transport.clone(),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_without_network() {
        let (client, transport) = client_with(Some("test-key"), vec![]);

        assert_eq!(client.generate("").await, Err(AiError::InvalidInput));
        assert_eq!(client.generate("   ").await, Err(AiError::InvalidInput));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_client_short_circuits() {
        let (client, transport) = client_with(None, vec![]);

        assert!(!client.is_configured());
        assert_eq!(client.generate("hello").await, Err(AiError::NotConfigured));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_extracts_first_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello back!"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        }"#;
        let (client, transport) = client_with(Some("test-key"), vec![MockTransport::reply(200, body)]);

        let text = client.generate("hello").await.unwrap();
        assert_eq!(text, "Hello back!");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}"#;
        let (client, transport) = client_with(Some("test-key"), vec![MockTransport::reply(200, body)]);

        client.generate("be sweet").await.unwrap();

        let request = transport.last_request.lock().unwrap().clone().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "be sweet");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let (client, _) = client_with(
            Some("test-key"),
            vec![MockTransport::reply(200, r#"{"candidates": []}"#)],
        );

        assert_eq!(client.generate("hello").await, Err(AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_empty_response() {
        let (client, _) = client_with(
            Some("test-key"),
            vec![MockTransport::reply(200, "definitely not json")],
        );

        assert_eq!(client.generate("hello").await, Err(AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_message() {
        let body = r#"{"error": {"message": "backend exploded", "code": 500}}"#;
        let (client, _) = client_with(Some("test-key"), vec![MockTransport::reply(500, body)]);

        assert_eq!(
            client.generate("hello").await,
            Err(AiError::Upstream {
                status: 500,
                message: "backend exploded".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_raw_text() {
        let (client, _) = client_with(
            Some("test-key"),
            vec![MockTransport::reply(403, "Forbidden\n")],
        );

        assert_eq!(
            client.generate("hello").await,
            Err(AiError::Upstream {
                status: 403,
                message: "Forbidden".to_string(),
            })
        );
    }
}
