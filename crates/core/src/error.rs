use crate::game_id::GameId;

/// A generated puzzle violated one of the structural rules.
///
/// Checks run in a fixed order (duplicates, category count, words per
/// category, embedded substrings) and the first failure wins, so callers
/// always see the most fundamental defect of a bad candidate.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("word {word:?} appears in more than one place")]
    DuplicateWord { word: String },

    #[error("wrong number of categories: {count} (expected 4 or 5)")]
    WrongCategoryCount { count: usize },

    #[error("category {category:?} has {count} words (expected 4)")]
    WrongWordCount { category: String, count: usize },

    #[error("word {word:?} in category {category:?} contains none of the declared substrings")]
    EmbeddedSubstringMiss { category: String, word: String },
}

/// Storage failures, as seen by the pipeline.
///
/// Concrete backends wrap their driver errors in [`StoreError::Backend`]
/// via `anyhow`, keeping the full error chain.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("prompt {0:?} not found")]
    PromptNotFound(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Model invocation failures.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The completion arrived but could not be parsed into a candidate
    /// puzzle even after stripping reasoning blocks and code fences.
    #[error("completion is not a candidate puzzle: {detail} (text starts {snippet:?})")]
    MalformedCompletion { detail: String, snippet: String },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Any failure of a single generation attempt.
#[derive(Debug, thiserror::Error)]
pub enum CreateGameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
