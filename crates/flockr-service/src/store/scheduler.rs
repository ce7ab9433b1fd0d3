//! Deferred task queue
//!
//! Tasks are ordered by due time, then by the order they were scheduled in.
//! Nothing runs on its own: the owner drains due tasks at each operation and
//! on every background tick.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};
use flockr_core::{ChannelId, Message};

/// Effect applied when a task comes due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Append a message reserved by `message_sendlater`
    DeliverMessage(Message),
    /// Flush and close the standup of a channel
    EndStandup { channel_id: ChannelId },
}

#[derive(Debug)]
struct Scheduled {
    due: DateTime<Utc>,
    seq: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // Reversed so the max-heap pops the earliest task first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: DateTime<Utc>, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled { due, seq, task });
    }

    /// Pop every task due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<Task> {
        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|next| next.due <= now) {
            if let Some(scheduled) = self.queue.pop() {
                due.push(scheduled.task);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.queue.clear();
        self.next_seq = 0;
    }
}
