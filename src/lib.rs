pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod graph;
pub mod session;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::ClientConfig;
pub use error::{NeuroDocError, Result};
