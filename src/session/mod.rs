// src/session/mod.rs
//! Session state and every user-facing action on it.

pub mod controller;
pub mod message;
pub mod notice;
pub mod request;
pub mod transcript;
pub mod turn;

pub use controller::{DocumentRef, GraphView, ServiceStatus, SessionController};
pub use message::{Message, Role};
pub use notice::{Confirmation, Notice, Severity};
pub use request::{dispatch, Outcome, PendingRequest};
pub use transcript::Transcript;
pub use turn::{FailurePresentation, TurnPolicy, TurnTarget};
