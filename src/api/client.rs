// src/api/client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use super::{AssistantApi, ChatResponse, MessageResponse, MindMapResponse};

/// reqwest-backed [`AssistantApi`]. Any non-2xx status is a plain failure;
/// error bodies are not read.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    base_url: String,
    client: reqwest::Client,
}

impl AssistantClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, path: &str) -> Result<T> {
        debug!("POST {}", path);
        let response = request.send().await?;
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!("{} returned {}", path, status);
            e
        })?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl AssistantApi for AssistantClient {
    async fn status(&self) -> Result<String> {
        let response = self.client
            .get(self.url("/"))
            .timeout(Duration::from_secs(5))
            .send()
            .await?
            .error_for_status()?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        debug!("POST /upload ({} bytes)", bytes.len());
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        self.client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn chat(&self, query: &str) -> Result<String> {
        let form = Form::new().text("query", query.to_string());
        let body: ChatResponse = self
            .read(self.client.post(self.url("/chat")).multipart(form), "/chat")
            .await?;
        Ok(body.answer)
    }

    async fn mind_map(&self, query: &str) -> Result<String> {
        let payload = serde_json::json!({ "query": query });
        let body: MindMapResponse = self
            .read(self.client.post(self.url("/mindmap")).json(&payload), "/mindmap")
            .await?;
        Ok(body.graph)
    }

    async fn start_interview(&self) -> Result<String> {
        let body: MessageResponse = self
            .read(self.client.post(self.url("/interview/start")), "/interview/start")
            .await?;
        Ok(body.message)
    }

    async fn interview_reply(&self, answer: &str) -> Result<String> {
        let form = Form::new().text("answer", answer.to_string());
        let body: MessageResponse = self
            .read(self.client.post(self.url("/interview/chat")).multipart(form), "/interview/chat")
            .await?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = AssistantClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/interview/start"), "http://localhost:8000/interview/start");
        assert_eq!(client.url("chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn test_response_bodies() {
        let chat: ChatResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(chat.answer, "42");

        // the graph is itself a JSON document encoded as a string
        let map: MindMapResponse =
            serde_json::from_str(r#"{"graph":"{\"nodes\":[]}"}"#).unwrap();
        assert_eq!(map.graph, r#"{"nodes":[]}"#);

        let upload_extra: MessageResponse =
            serde_json::from_str(r#"{"message":"hi","extra":1}"#).unwrap();
        assert_eq!(upload_extra.message, "hi");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_request_error() {
        // port 9 (discard) on localhost is closed in test environments
        let client = AssistantClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = client.chat("anything").await;
        assert!(matches!(result, Err(crate::error::NeuroDocError::Request(_))));
    }
}
