//! Ordered, append-only conversation state.

use tranquilize_types::chat::ChatTurn;
use tranquilize_types::reply::NormalizedReply;

use crate::reply::normalize;

/// The turns of one chat session, in the order they were sent.
///
/// Turns are appended and never edited or removed. There is no cap.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and return its index.
    pub fn push(&mut self, turn: ChatTurn) -> usize {
        self.turns.push(turn);
        self.turns.len() - 1
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn get(&self, index: usize) -> Option<&ChatTurn> {
        self.turns.get(index)
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    /// Every turn paired with its reply, re-derived from the stored raw response.
    pub fn replies(&self) -> impl Iterator<Item = (&ChatTurn, NormalizedReply)> {
        self.turns
            .iter()
            .map(|turn| (turn, normalize(&turn.raw_response)))
    }
}
