//! Game slot row model.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use quadwords_core::types::{GameSlot, PuzzleData};

/// A row from the `games` table. The finished puzzle and the generation
/// marker are independent columns of the same row.
#[derive(Debug, FromRow)]
pub struct GameRow {
    pub game_id: NaiveDate,
    pub data: Option<Json<PuzzleData>>,
    pub generation_started_at: Option<DateTime<Utc>>,
}

impl GameRow {
    /// Collapses the row into the slot union. Present data wins over a
    /// leftover generation marker.
    pub fn into_slot(self) -> GameSlot {
        match (self.data, self.generation_started_at) {
            (Some(Json(data)), _) => GameSlot::Ready(data),
            (None, Some(started_at)) => GameSlot::Generating { started_at },
            (None, None) => GameSlot::Empty,
        }
    }
}
