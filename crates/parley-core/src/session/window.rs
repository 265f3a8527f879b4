//! Transcript window policy.
//!
//! Bounds every transcript to `max_len` turns by keeping the first
//! `keep_head` turns (the system instruction) and the most recent
//! `keep_tail` turns. Older history in between is discarded.

use parley_types::chat::Turn;
use parley_types::config::SessionConfig;
use parley_types::error::ConfigError;

/// Sliding window applied to a transcript after each exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptWindow {
    max_len: usize,
    keep_head: usize,
    keep_tail: usize,
}

impl TranscriptWindow {
    /// Build a window. Head and tail together must fit within `max_len`,
    /// and the head must keep at least the system turn.
    pub fn new(max_len: usize, keep_head: usize, keep_tail: usize) -> Result<Self, ConfigError> {
        if keep_head == 0 {
            return Err(ConfigError::Invalid(
                "keep_head must preserve the system turn".to_string(),
            ));
        }
        if keep_head
            .checked_add(keep_tail)
            .is_none_or(|kept| kept > max_len)
        {
            return Err(ConfigError::Invalid(format!(
                "keep_head ({keep_head}) + keep_tail ({keep_tail}) exceeds max_turns ({max_len})"
            )));
        }
        Ok(Self {
            max_len,
            keep_head,
            keep_tail,
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        Self::new(config.max_turns, config.keep_head, config.keep_tail)
    }

    /// Trim `transcript` in place. Returns the number of turns dropped.
    pub fn apply(&self, transcript: &mut Vec<Turn>) -> usize {
        let len = transcript.len();
        if len <= self.max_len {
            return 0;
        }
        let dropped = len - self.keep_head - self.keep_tail;
        transcript.drain(self.keep_head..self.keep_head + dropped);
        dropped
    }
}

impl Default for TranscriptWindow {
    /// System turn plus the last four user/assistant exchanges.
    fn default() -> Self {
        Self {
            max_len: 9,
            keep_head: 1,
            keep_tail: 8,
        }
    }
}
