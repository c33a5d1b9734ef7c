use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use crate::config::GenerationConfig;
use crate::context::build_model_context;
use crate::error::{CreateGameError, StoreError};
use crate::game_id::{first_game_date, GameId};
use crate::model::ModelClient;
use crate::store::{GameStore, PromptStore};
use crate::types::{CategoryMap, PuzzleData};
use crate::validate::validate_puzzle;

/// What [`Generator::ensure_game`] found or did.
#[derive(Debug, Clone, PartialEq)]
pub enum EnsureOutcome {
    AlreadyExists,
    InProgress,
    Created(PuzzleData),
}

/// The ids whose categories a new game must avoid: `past` days back through
/// `future` days ahead of `id`, clipped to real games (nothing before the
/// first game date, nothing after `today`).
pub fn context_window(id: GameId, past: u32, future: u32, today: NaiveDate) -> Vec<GameId> {
    let mut ids = Vec::new();
    for offset in -(past as i64)..=(future as i64) {
        let Some(date) = id.date().checked_add_signed(Duration::days(offset)) else {
            continue;
        };
        if date >= first_game_date() && date <= today {
            ids.push(GameId::new(date));
        }
    }
    ids
}

/// Runs the generation pipeline against the storage and model seams.
pub struct Generator {
    store: Arc<dyn GameStore>,
    prompts: Arc<dyn PromptStore>,
    model: Arc<dyn ModelClient>,
    config: GenerationConfig,
}

impl Generator {
    pub fn new(
        store: Arc<dyn GameStore>,
        prompts: Arc<dyn PromptStore>,
        model: Arc<dyn ModelClient>,
        config: GenerationConfig,
    ) -> Self {
        Self { store, prompts, model, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// One generation attempt for `id`: build the context from neighbouring
    /// games, invoke the model, normalize, validate and store.
    ///
    /// Unconditional; existence and in-progress checks belong to
    /// [`Generator::ensure_game`]. Any failure leaves the slot without data.
    pub async fn create_game(&self, id: GameId) -> Result<PuzzleData, CreateGameError> {
        let window = context_window(
            id,
            self.config.avoid_past_games_count,
            self.config.avoid_next_games_count,
            Utc::now().date_naive(),
        );
        let neighbours = self.store.get_games_by_ids(&window).await?;

        // Window order, so the context is stable for a given store state.
        let mut disallowed_categories = Vec::new();
        for neighbour in &window {
            if let Some(game) = neighbours.get(neighbour) {
                disallowed_categories.extend(game.categories.keys().cloned());
            }
        }

        let context = build_model_context(id.date(), disallowed_categories, &self.config, &mut rand::rng());
        tracing::debug!(
            game_id = %id,
            disallowed = context.disallowed_categories.len(),
            word_constraints = ?context.word_constraints,
            "Built model context"
        );

        let template = self.prompts.get_prompt(&self.config.prompt_id).await?;
        let candidate = self.model.generate(&template, Some(&context)).await?;

        let categories = normalize_categories(candidate.categories);
        let word_list: Vec<String> = categories.values().flat_map(|c| c.words.iter().cloned()).collect();
        validate_puzzle(&categories, &word_list)?;

        let data = PuzzleData { categories, word_list };
        self.store.put_game(id, &data).await?;
        tracing::info!(game_id = %id, categories = data.categories.len(), "Stored generated game");
        Ok(data)
    }

    /// Brings the slot for `id` to `Ready` unless it already is (or a fresh
    /// generation marker says someone else is on it). Otherwise stamps the
    /// marker and retries [`Generator::create_game`] until it succeeds.
    ///
    /// Only storage failures abort; model and validation failures are
    /// logged and retried.
    pub async fn ensure_game(&self, id: GameId) -> Result<EnsureOutcome, StoreError> {
        let slot = self.store.get_game(id).await?;
        if slot.is_ready() {
            tracing::info!(game_id = %id, "Game already exists, skipping creation");
            return Ok(EnsureOutcome::AlreadyExists);
        }
        if slot.is_fresh_lock(Utc::now(), self.config.generation_lock_ttl_secs) {
            tracing::info!(game_id = %id, "Game is already being generated, skipping creation");
            return Ok(EnsureOutcome::InProgress);
        }

        self.store.mark_generating(id).await?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.create_game(id).await {
                Ok(data) => {
                    tracing::info!(game_id = %id, attempt, "Game created");
                    return Ok(EnsureOutcome::Created(data));
                }
                Err(err) => {
                    tracing::warn!(game_id = %id, attempt, error = %err, "Game creation failed, retrying");
                }
            }
        }
    }
}

/// Uppercases every word and declared substring; category names and hints
/// keep their original casing.
fn normalize_categories(categories: CategoryMap) -> CategoryMap {
    categories
        .into_iter()
        .map(|(name, mut category)| {
            category.words = category.words.into_iter().map(|w| w.to_uppercase()).collect();
            if let Some(substrings) = category.embedded_substrings.take() {
                category.embedded_substrings =
                    Some(substrings.into_iter().map(|s| s.to_uppercase()).collect());
            }
            (name, category)
        })
        .collect()
}
