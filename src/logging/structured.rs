//! Structured logging utilities.
//!
//! Provides context-aware logging with page_id and event_id included
//! in every log message.

use std::fmt;

/// Logging context for pipeline operations on one page.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub page_id: u64,
    pub event_id: Option<String>,
}

impl LogContext {
    pub fn new(page_id: u64) -> Self {
        Self {
            page_id,
            event_id: None,
        }
    }

    pub fn with_event(&self, event_id: &str) -> Self {
        Self {
            page_id: self.page_id,
            event_id: Some(event_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event_id {
            Some(eid) => write!(f, "[page={}] [event={}]", self.page_id, eid),
            None => write!(f, "[page={}]", self.page_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new(42);
        assert_eq!(format!("{}", ctx), "[page=42]");

        let ctx_with_event = ctx.with_event("ev-123");
        assert_eq!(format!("{}", ctx_with_event), "[page=42] [event=ev-123]");
    }
}
