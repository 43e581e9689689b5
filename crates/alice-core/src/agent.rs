//! HTTP client for the remote conversational agent.

use crate::settings::Settings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One message of a reply set, in the order the agent returned it.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("agent returned status {0}")]
    Status(StatusCode),
    #[error("malformed reply body: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

/// Boundary the session controller talks through. Tests substitute
/// their own implementation; production uses [`HttpAgent`].
#[async_trait]
pub trait Agent: Send + Sync {
    /// Send one command and return the ordered reply messages. Zero
    /// messages is a valid outcome, not an error.
    async fn send(&self, text: &str) -> Result<Vec<AgentReply>, AgentError>;
}

#[derive(Serialize)]
struct MessageRequest<'a> {
    text: &'a str,
    #[serde(rename = "userId")]
    user_id: &'a str,
    #[serde(rename = "roomId")]
    room_id: &'a str,
}

/// `POST {base_url}/api/{agent_id}/message` with the fixed session
/// identifiers from [`Settings`]. No retry and no client timeout: a
/// hung request simply leaves the turn waiting.
pub struct HttpAgent {
    client: Client,
    url: String,
    user_id: String,
    room_id: String,
}

impl HttpAgent {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            url: format!(
                "{}/api/{}/message",
                settings.base_url.trim_end_matches('/'),
                settings.agent_id
            ),
            user_id: settings.user_id.clone(),
            room_id: settings.room_id.clone(),
        }
    }
}

#[async_trait]
impl Agent for HttpAgent {
    async fn send(&self, text: &str) -> Result<Vec<AgentReply>, AgentError> {
        let request = MessageRequest {
            text,
            user_id: &self.user_id,
            room_id: &self.room_id,
        };

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AgentError::Status(response.status()));
        }

        // Parse the body ourselves so a malformed reply surfaces as its
        // own error rather than a transport failure.
        let body = response.text().await?;
        let replies: Vec<AgentReply> = serde_json::from_str(&body)?;
        Ok(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_shape() {
        let request = MessageRequest {
            text: "hello",
            user_id: "user",
            room_id: "default-room-abc",
        };
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hello",
                "userId": "user",
                "roomId": "default-room-abc",
            })
        );
    }

    #[test]
    fn reply_set_parses_in_array_order() {
        let body = r#"[{"text":"hi"},{"text":"there","extra":42}]"#;
        let replies: Vec<AgentReply> = serde_json::from_str(body).expect("parses");
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].text, "hi");
        assert_eq!(replies[1].text, "there");
    }

    #[test]
    fn url_is_derived_from_settings() {
        let mut settings = Settings::default();
        settings.base_url = "http://localhost:3000/".to_string();
        settings.agent_id = "abc".to_string();
        let agent = HttpAgent::new(&settings);
        assert_eq!(agent.url, "http://localhost:3000/api/abc/message");
    }
}
