//! Standup entity - a timed window that buffers short messages and compiles
//! them into a single channel message when it ends

use chrono::{DateTime, Utc};

use crate::value_objects::{ChannelId, UserId};

/// One buffered standup contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandupLine {
    pub handle: String,
    pub text: String,
}

/// An active standup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standup {
    pub channel_id: ChannelId,
    pub starter_id: UserId,
    pub time_finish: DateTime<Utc>,
    pub buffer: Vec<StandupLine>,
}

impl Standup {
    pub fn new(channel_id: ChannelId, starter_id: UserId, time_finish: DateTime<Utc>) -> Self {
        Self {
            channel_id,
            starter_id,
            time_finish,
            buffer: Vec::new(),
        }
    }

    /// Buffer a line
    pub fn push(&mut self, handle: String, text: String) {
        self.buffer.push(StandupLine { handle, text });
    }

    /// Compile the buffer into the body of the summary message
    ///
    /// One `handle: text` line per entry in send order. `None` when nothing
    /// was buffered.
    pub fn compile(lines: &[StandupLine]) -> Option<String> {
        if lines.is_empty() {
            return None;
        }
        let body = lines
            .iter()
            .map(|line| format!("{}: {}", line.handle, line.text))
            .collect::<Vec<_>>()
            .join("\n");
        Some(body)
    }
}
