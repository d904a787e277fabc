// src/session/request.rs

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::api::AssistantApi;
use super::turn::TurnTarget;

/// A request the controller has decided to issue.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    Status,
    Upload { path: PathBuf, file_name: String },
    Turn { target: TurnTarget, text: String },
    MindMap { query: String },
    InterviewStart,
}

/// Result of a [`PendingRequest`], ready to hand back to the controller.
///
/// Errors are rendered to text here so outcomes can cross task boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Status(Result<String, String>),
    Uploaded { file_name: String, result: Result<(), String> },
    Reply { target: TurnTarget, result: Result<String, String> },
    MindMap(Result<String, String>),
    InterviewStarted(Result<String, String>),
}

pub async fn dispatch(api: &dyn AssistantApi, request: PendingRequest) -> Outcome {
    debug!("Dispatching {:?}", request);
    match request {
        PendingRequest::Status => Outcome::Status(api.status().await.map_err(|e| e.to_string())),
        PendingRequest::Upload { path, file_name } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => api.upload(&file_name, bytes).await.map_err(|e| e.to_string()),
                Err(e) => Err(format!("could not read {}: {}", path.display(), e)),
            };
            match &result {
                Ok(()) => info!("Uploaded {}", file_name),
                Err(e) => warn!("Upload of {} failed: {}", file_name, e),
            }
            Outcome::Uploaded { file_name, result }
        }
        PendingRequest::Turn { target, text } => {
            let result = match target {
                TurnTarget::Chat => api.chat(&text).await,
                TurnTarget::Interview => api.interview_reply(&text).await,
            };
            if let Err(e) = &result {
                warn!("{:?} turn failed: {}", target, e);
            }
            Outcome::Reply {
                target,
                result: result.map_err(|e| e.to_string()),
            }
        }
        PendingRequest::MindMap { query } => {
            let result = api.mind_map(&query).await;
            if let Err(e) = &result {
                warn!("Mind map request failed: {}", e);
            }
            Outcome::MindMap(result.map_err(|e| e.to_string()))
        }
        PendingRequest::InterviewStart => {
            let result = api.start_interview().await;
            match &result {
                Ok(_) => info!("Interview started"),
                Err(e) => warn!("Interview start failed: {}", e),
            }
            Outcome::InterviewStarted(result.map_err(|e| e.to_string()))
        }
    }
}
