//! Application state
//!
//! One [`Store`] owns every user, channel, session and pending task. Entities
//! live in id-keyed maps; messages are owned by their channel and found
//! through `message_index`. Callers hold the store behind a single lock, so
//! every method here runs without interleaving.

mod scheduler;

pub use scheduler::{Scheduler, Task};

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use flockr_core::{
    Channel, ChannelId, DomainError, IdGenerator, LookupResult, Message, MessageId, Registry,
    Standup, User, UserId,
};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct Store {
    users: BTreeMap<UserId, User>,
    channels: BTreeMap<ChannelId, Channel>,
    message_index: HashMap<MessageId, ChannelId>,
    sessions: HashMap<String, UserId>,
    scheduler: Scheduler,
    user_ids: IdGenerator,
    channel_ids: IdGenerator,
    message_ids: IdGenerator,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Users and sessions
    // =========================================================================

    /// Users in registration order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn next_user_id(&self) -> UserId {
        UserId::new(self.user_ids.generate())
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn user_mut(&mut self, id: UserId) -> LookupResult<&mut User> {
        self.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    pub fn find_user_by_handle(&self, handle: &str) -> Option<&User> {
        self.users.values().find(|u| u.handle == handle)
    }

    /// Pick `base` or the first free suffixed variant of it
    pub fn unique_handle(&self, base: &str) -> String {
        if self.find_user_by_handle(base).is_none() {
            return base.to_string();
        }
        (1..)
            .map(|suffix| User::suffixed_handle(base, suffix))
            .find(|candidate| self.find_user_by_handle(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    pub fn open_session(&mut self, token: String, user_id: UserId) {
        self.sessions.insert(token, user_id);
    }

    /// End a session. Returns `false` if it was not open.
    pub fn close_session(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    // =========================================================================
    // Channels and messages
    // =========================================================================

    /// Channels in creation order
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.values()
    }

    pub fn next_channel_id(&self) -> ChannelId {
        ChannelId::new(self.channel_ids.generate())
    }

    pub fn insert_channel(&mut self, channel: Channel) {
        self.channels.insert(channel.id, channel);
    }

    pub fn channel_mut(&mut self, id: ChannelId) -> LookupResult<&mut Channel> {
        self.channels
            .get_mut(&id)
            .ok_or(DomainError::ChannelNotFound(id))
    }

    pub fn next_message_id(&self) -> MessageId {
        MessageId::new(self.message_ids.generate())
    }

    /// Append a message to the end of its channel
    pub fn push_message(&mut self, message: Message) -> LookupResult<()> {
        let (id, channel_id) = (message.id, message.channel_id);
        self.channel_mut(channel_id)?.push_message(message);
        self.message_index.insert(id, channel_id);
        Ok(())
    }

    pub fn message_mut(&mut self, id: MessageId) -> LookupResult<&mut Message> {
        let channel_id = self
            .message_index
            .get(&id)
            .copied()
            .ok_or(DomainError::MessageNotFound(id))?;
        self.channels
            .get_mut(&channel_id)
            .and_then(|channel| channel.message_mut(id))
            .ok_or(DomainError::MessageNotFound(id))
    }

    pub fn delete_message(&mut self, id: MessageId) -> LookupResult<Message> {
        let channel_id = self
            .message_index
            .remove(&id)
            .ok_or(DomainError::MessageNotFound(id))?;
        self.channels
            .get_mut(&channel_id)
            .and_then(|channel| channel.remove_message(id))
            .ok_or(DomainError::MessageNotFound(id))
    }

    // =========================================================================
    // Deferred work
    // =========================================================================

    pub fn schedule(&mut self, due: DateTime<Utc>, task: Task) {
        self.scheduler.schedule(due, task);
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Apply every task due at `now`. Returns how many ran.
    pub fn fire_due(&mut self, now: DateTime<Utc>) -> usize {
        let tasks = self.scheduler.drain_due(now);
        let fired = tasks.len();
        for task in tasks {
            match task {
                Task::DeliverMessage(message) => self.deliver(message),
                Task::EndStandup { channel_id } => self.end_standup(channel_id),
            }
        }
        fired
    }

    fn deliver(&mut self, message: Message) {
        let (message_id, channel_id) = (message.id, message.channel_id);
        match self.push_message(message) {
            Ok(()) => info!(message_id = %message_id, channel_id = %channel_id, "Scheduled message delivered"),
            Err(e) => warn!(message_id = %message_id, error = %e, "Dropped scheduled message"),
        }
    }

    fn end_standup(&mut self, channel_id: ChannelId) {
        let Some(standup) = self
            .channels
            .get_mut(&channel_id)
            .and_then(|channel| channel.standup.take())
        else {
            warn!(channel_id = %channel_id, "No standup to end");
            return;
        };

        let Some(body) = Standup::compile(&standup.buffer) else {
            debug!(channel_id = %channel_id, "Standup ended with nothing buffered");
            return;
        };

        let message = Message::new(
            self.next_message_id(),
            channel_id,
            standup.starter_id,
            body,
            standup.time_finish,
        );
        let message_id = message.id;
        if self.push_message(message).is_ok() {
            info!(message_id = %message_id, channel_id = %channel_id, lines = standup.buffer.len(), "Standup summary posted");
        }
    }

    /// Forget everything and restart every id sequence
    pub fn clear(&mut self) {
        self.users.clear();
        self.channels.clear();
        self.message_index.clear();
        self.sessions.clear();
        self.scheduler.clear();
        self.user_ids.reset();
        self.channel_ids.reset();
        self.message_ids.reset();
    }
}

impl Registry for Store {
    fn resolve_user_by_token(&self, token: &str) -> Option<UserId> {
        self.sessions.get(token).copied()
    }

    fn resolve_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    fn resolve_channel_by_id(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.get(&id)
    }

    fn resolve_message_channel(&self, id: MessageId) -> Option<ChannelId> {
        self.message_index.get(&id).copied()
    }
}
