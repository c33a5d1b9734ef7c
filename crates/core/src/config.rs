use std::str::FromStr;

/// Tunables for the generation pipeline.
///
/// | Env Var | Default | Description |
/// |---------|---------|-------------|
/// | `AVOID_PAST_GAMES_COUNT` | `20` | Days before the target date whose categories are disallowed |
/// | `AVOID_NEXT_GAMES_COUNT` | `10` | Days after the target date whose categories are disallowed |
/// | `SPECIAL_CONSTRAINT_CHANCE` | `0.05` | Probability of a special word constraint on non-holiday dates |
/// | `INSPIRATION_ADJECTIVES_COUNT` | `3` | Adjectives sampled into the model context |
/// | `INSPIRATION_NOUNS_COUNT` | `10` | Nouns sampled into the model context |
/// | `INSPIRATION_VERBS_COUNT` | `6` | Verbs sampled into the model context |
/// | `LLM_PROMPT_ID` | `connections` | Logical id of the prompt template to load |
/// | `GENERATION_LOCK_TTL_SECS` | `300` | Age at which a generation marker counts as abandoned |
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub avoid_past_games_count: u32,
    pub avoid_next_games_count: u32,
    pub special_constraint_chance: f64,
    pub inspiration_adjectives_count: usize,
    pub inspiration_nouns_count: usize,
    pub inspiration_verbs_count: usize,
    pub prompt_id: String,
    pub generation_lock_ttl_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            avoid_past_games_count: 20,
            avoid_next_games_count: 10,
            special_constraint_chance: 0.05,
            inspiration_adjectives_count: 3,
            inspiration_nouns_count: 10,
            inspiration_verbs_count: 6,
            prompt_id: "connections".to_string(),
            generation_lock_ttl_secs: 300,
        }
    }
}

impl GenerationConfig {
    /// Loads configuration from environment variables, panicking on values
    /// that are present but unparseable. Call once at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            avoid_past_games_count: env_parse("AVOID_PAST_GAMES_COUNT", defaults.avoid_past_games_count),
            avoid_next_games_count: env_parse("AVOID_NEXT_GAMES_COUNT", defaults.avoid_next_games_count),
            special_constraint_chance: env_parse("SPECIAL_CONSTRAINT_CHANCE", defaults.special_constraint_chance),
            inspiration_adjectives_count: env_parse(
                "INSPIRATION_ADJECTIVES_COUNT",
                defaults.inspiration_adjectives_count,
            ),
            inspiration_nouns_count: env_parse("INSPIRATION_NOUNS_COUNT", defaults.inspiration_nouns_count),
            inspiration_verbs_count: env_parse("INSPIRATION_VERBS_COUNT", defaults.inspiration_verbs_count),
            prompt_id: std::env::var("LLM_PROMPT_ID").unwrap_or(defaults.prompt_id),
            generation_lock_ttl_secs: env_parse("GENERATION_LOCK_TTL_SECS", defaults.generation_lock_ttl_secs),
        }
    }
}

fn env_parse<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|err| panic!("{name} must be a valid value: {err}")),
        Err(_) => default,
    }
}
