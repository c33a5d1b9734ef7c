//! Repository for the `games` table.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use quadwords_core::error::StoreError;
use quadwords_core::game_id::GameId;
use quadwords_core::store::GameStore;
use quadwords_core::types::{GameSlot, PuzzleData};

use crate::models::game::GameRow;

/// Column list for the `games` table.
const COLUMNS: &str = "game_id, data, generation_started_at";

/// Postgres-backed [`GameStore`]. One row per daily slot, keyed by date.
#[derive(Clone)]
pub struct GameRepo {
    pool: PgPool,
}

impl GameRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for GameRepo {
    async fn get_game(&self, id: GameId) -> Result<GameSlot, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE game_id = $1");
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(id.date())
            .fetch_optional(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;
        Ok(row.map(GameRow::into_slot).unwrap_or(GameSlot::Empty))
    }

    async fn get_games_by_ids(&self, ids: &[GameId]) -> Result<HashMap<GameId, PuzzleData>, StoreError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let dates: Vec<NaiveDate> = ids.iter().map(GameId::date).collect();
        let query = format!("SELECT {COLUMNS} FROM games WHERE game_id = ANY($1) AND data IS NOT NULL");
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(&dates)
            .fetch_all(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        let mut found = HashMap::with_capacity(rows.len());
        for row in rows {
            let id = GameId::new(row.game_id);
            if let GameSlot::Ready(data) = row.into_slot() {
                found.insert(id, data);
            }
        }
        Ok(found)
    }

    async fn put_game(&self, id: GameId, data: &PuzzleData) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO games (game_id, data) VALUES ($1, $2) \
             ON CONFLICT (game_id) DO UPDATE SET data = EXCLUDED.data",
        )
        .bind(id.date())
        .bind(Json(data))
        .execute(&self.pool)
        .await
        .map_err(anyhow::Error::from)?;
        tracing::debug!(game_id = %id, "Wrote game data");
        Ok(())
    }

    async fn mark_generating(&self, id: GameId) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO games (game_id, generation_started_at) VALUES ($1, $2) \
             ON CONFLICT (game_id) DO UPDATE \
             SET generation_started_at = EXCLUDED.generation_started_at",
        )
        .bind(id.date())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(anyhow::Error::from)?;
        tracing::debug!(game_id = %id, "Stamped generation marker");
        Ok(())
    }
}
