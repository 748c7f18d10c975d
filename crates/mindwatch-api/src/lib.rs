//! MindWatch HTTP API.
//!
//! Exposes [`InferenceService`](mindwatch_fusion::InferenceService) over HTTP
//! with axum:
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/` | service name and version |
//! | GET | `/health` | `{"status": "healthy"}` |
//! | POST | `/infer` | fused stress inference |
//!
//! Errors are returned as `{"detail": "..."}` with 400, 413, 422 or 500.

pub mod error;
pub mod protocol;
pub mod server;
pub mod telemetry;

pub use error::ApiError;
pub use server::{router, AppState};
