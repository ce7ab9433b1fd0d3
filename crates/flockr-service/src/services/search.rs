//! Search service

use tracing::{debug, instrument};

use crate::dto::{MessageResponse, SearchResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Messages containing `query` across every channel the caller is in
    ///
    /// Matching is a case-sensitive substring test. Results come channel by
    /// channel in creation order, oldest message first within a channel.
    #[instrument(skip(self, token))]
    pub fn search(&self, token: &str, query: &str) -> ServiceResult<SearchResponse> {
        let state = self.ctx.state();
        let caller_id = self.ctx.authenticate(&state, token)?.id;

        let messages: Vec<MessageResponse> = state
            .channels()
            .filter(|channel| channel.is_member(caller_id))
            .flat_map(|channel| channel.search(query))
            .map(|message| MessageResponse::for_viewer(message, caller_id))
            .collect();

        debug!(matches = messages.len(), "Search complete");
        Ok(SearchResponse { messages })
    }
}
