use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::game_id::GameId;
use crate::types::{GameSlot, PromptTemplate, PuzzleData};

/// Storage seam for daily game slots.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// The state of one slot. A missing record reads as [`GameSlot::Empty`].
    async fn get_game(&self, id: GameId) -> Result<GameSlot, StoreError>;

    /// The `Ready` puzzles among `ids`, keyed by id. Ids without a finished
    /// puzzle are simply absent; an empty `ids` must not touch the backend.
    async fn get_games_by_ids(&self, ids: &[GameId]) -> Result<HashMap<GameId, PuzzleData>, StoreError>;

    /// Writes a finished puzzle. Overwrites whatever the slot held.
    async fn put_game(&self, id: GameId, data: &PuzzleData) -> Result<(), StoreError>;

    /// Stamps the slot's generation marker with the current time.
    async fn mark_generating(&self, id: GameId) -> Result<(), StoreError>;
}

/// Storage seam for prompt templates.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// The latest version of the prompt with logical id `prompt_id`.
    async fn get_prompt(&self, prompt_id: &str) -> Result<PromptTemplate, StoreError>;
}

// --- In-memory store ---

/// Both branches of a slot, stored side by side like the database row.
#[derive(Debug, Clone, Default)]
struct SlotRecord {
    data: Option<PuzzleData>,
    generation_started_at: Option<DateTime<Utc>>,
}

impl SlotRecord {
    fn as_slot(&self) -> GameSlot {
        match (&self.data, self.generation_started_at) {
            (Some(data), _) => GameSlot::Ready(data.clone()),
            (None, Some(started_at)) => GameSlot::Generating { started_at },
            (None, None) => GameSlot::Empty,
        }
    }
}

/// Map-backed store used by tests and local experiments.
///
/// Mirrors the persistence contract of the Postgres store, including
/// `Ready` taking precedence over a leftover generation marker. Counts
/// `put_game` calls so tests can assert single-write behavior.
#[derive(Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, SlotRecord>>,
    prompts: Mutex<HashMap<String, PromptTemplate>>,
    put_game_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_game(&self, id: GameId, data: PuzzleData) {
        let mut games = self.games.lock().expect("games mutex poisoned");
        games.entry(id).or_default().data = Some(data);
    }

    pub fn insert_generating(&self, id: GameId, started_at: DateTime<Utc>) {
        let mut games = self.games.lock().expect("games mutex poisoned");
        games.entry(id).or_default().generation_started_at = Some(started_at);
    }

    pub fn insert_prompt(&self, prompt_id: &str, template: PromptTemplate) {
        let mut prompts = self.prompts.lock().expect("prompts mutex poisoned");
        prompts.insert(prompt_id.to_string(), template);
    }

    pub fn put_game_calls(&self) -> usize {
        self.put_game_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn get_game(&self, id: GameId) -> Result<GameSlot, StoreError> {
        let games = self.games.lock().expect("games mutex poisoned");
        Ok(games.get(&id).map(SlotRecord::as_slot).unwrap_or(GameSlot::Empty))
    }

    async fn get_games_by_ids(&self, ids: &[GameId]) -> Result<HashMap<GameId, PuzzleData>, StoreError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let games = self.games.lock().expect("games mutex poisoned");
        let mut found = HashMap::new();
        for id in ids {
            if let Some(data) = games.get(id).and_then(|record| record.data.clone()) {
                found.insert(*id, data);
            }
        }
        Ok(found)
    }

    async fn put_game(&self, id: GameId, data: &PuzzleData) -> Result<(), StoreError> {
        self.put_game_calls.fetch_add(1, Ordering::SeqCst);
        let mut games = self.games.lock().expect("games mutex poisoned");
        games.entry(id).or_default().data = Some(data.clone());
        Ok(())
    }

    async fn mark_generating(&self, id: GameId) -> Result<(), StoreError> {
        let mut games = self.games.lock().expect("games mutex poisoned");
        games.entry(id).or_default().generation_started_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl PromptStore for MemoryStore {
    async fn get_prompt(&self, prompt_id: &str) -> Result<PromptTemplate, StoreError> {
        let prompts = self.prompts.lock().expect("prompts mutex poisoned");
        prompts
            .get(prompt_id)
            .cloned()
            .ok_or_else(|| StoreError::PromptNotFound(prompt_id.to_string()))
    }
}
