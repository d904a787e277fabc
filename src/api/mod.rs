// src/api/mod.rs
//! Remote assistant service. Everything behind this trait is opaque:
//! text extraction, answering, graph generation and interview logic.

pub mod client;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

pub use client::AssistantClient;

#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// `GET /` liveness message.
    async fn status(&self) -> Result<String>;

    /// `POST /upload`, multipart field `file`. Only success matters.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<()>;

    /// `POST /chat`, multipart field `query`.
    async fn chat(&self, query: &str) -> Result<String>;

    /// `POST /mindmap` with JSON `{query}`; returns the raw `graph` string.
    async fn mind_map(&self, query: &str) -> Result<String>;

    /// `POST /interview/start`; returns the interviewer's opening message.
    async fn start_interview(&self) -> Result<String>;

    /// `POST /interview/chat`, multipart field `answer`.
    async fn interview_reply(&self, answer: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct MindMapResponse {
    pub graph: String,
}

/// Shared by `/`, `/interview/start` and `/interview/chat`.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
