//! # Request Logging
//!
//! Per-invocation log context. Every command runs inside a `tracing` span carrying the
//! raw input, the sender and a fresh request id, so all records of one request can be
//! correlated (and the id quoted back to the user on failure).

use tracing::Span;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RequestLog {
    pub command: String,
    pub input: String,
    pub author: String,
    pub id: Uuid,
}

impl RequestLog {
    pub fn new(command: &str, input: &str, author: &str) -> Self {
        Self {
            command: command.to_string(),
            input: input.to_string(),
            author: author.to_string(),
            id: Uuid::new_v4(),
        }
    }

    pub fn span(&self) -> Span {
        tracing::info_span!(
            "command",
            command = %self.command,
            input = %self.input,
            author = %self.author,
            uuid = %self.id,
        )
    }
}
