//! End-to-end session flows on paused tokio time.

mod upload_flow;
mod wizard_flow;
