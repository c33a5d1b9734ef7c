use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// No puzzle exists before this date.
pub fn first_game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date")
}

/// Identifier of a daily puzzle: the calendar date it is published on,
/// rendered as `YYYY-MM-DD`.
///
/// The identifier doubles as the storage key and the URL path segment, so
/// parsing is strict: zero-padded ISO dates only, no aliases like
/// `2025-2-3` for `2025-02-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(NaiveDate);

impl GameId {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The id of the puzzle for the current UTC date.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Parses a strict `YYYY-MM-DD` identifier without any range check.
    pub fn parse(raw: &str) -> Result<Self, GameIdError> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| GameIdError::Malformed(raw.to_string()))?;
        // chrono's parser tolerates unpadded fields; re-rendering catches
        // every alias of the canonical form.
        if date.format("%Y-%m-%d").to_string() != raw {
            return Err(GameIdError::Malformed(raw.to_string()));
        }
        Ok(Self(date))
    }

    /// Parses an identifier a client may ask for: a strict date between the
    /// first game date and tomorrow (relative to `today`), inclusive.
    pub fn parse_in_range(raw: &str, today: NaiveDate) -> Result<Self, GameIdError> {
        let id = Self::parse(raw)?;
        if id.0 < first_game_date() {
            return Err(GameIdError::BeforeFirstGame(id));
        }
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        if id.0 > tomorrow {
            return Err(GameIdError::TooFarAhead(id));
        }
        Ok(id)
    }
}

/// Every id from the first game date through `today`, ascending.
pub fn ids_through(today: NaiveDate) -> Vec<GameId> {
    let mut ids = Vec::new();
    let mut date = first_game_date();
    while date <= today {
        ids.push(GameId(date));
        let Some(next) = date.succ_opt() else { break };
        date = next;
    }
    ids
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameIdError {
    #[error("game id must be a YYYY-MM-DD calendar date, got {0:?}")]
    Malformed(String),

    #[error("game id {0} is before the first game date 2025-01-01")]
    BeforeFirstGame(GameId),

    #[error("game id {0} is after tomorrow")]
    TooFarAhead(GameId),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameId {
    type Err = GameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for GameId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
