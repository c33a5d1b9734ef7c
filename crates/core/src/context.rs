use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::config::GenerationConfig;
use crate::constraints::{weighted_category_pattern_pool, SPECIAL_CONSTRAINTS};
use crate::holidays::resolve_date_constraint;
use crate::sampling::sample;
use crate::vocabulary::{ADJECTIVES, NOUNS, VERBS};

/// Distinct category patterns attached to an unconstrained game.
pub const CATEGORY_PATTERNS_PER_GAME: usize = 4;

/// Everything the model is told about one game beyond the base prompt.
/// Serialized to JSON and substituted into the prompt template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContext {
    /// Category names used by nearby games; the model must avoid them.
    pub disallowed_categories: Vec<String>,
    pub inspiration_adjectives: Vec<String>,
    pub inspiration_nouns: Vec<String>,
    pub inspiration_verbs: Vec<String>,
    /// A game-wide constraint on the words themselves. Holiday dates always
    /// carry one; other dates roll for a special constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_constraints: Option<String>,
    /// Shape suggestions for individual categories. Only attached when no
    /// word constraint is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_constraints: Option<Vec<String>>,
}

/// Builds the model context for the game dated `date`.
pub fn build_model_context(
    date: NaiveDate,
    disallowed_categories: Vec<String>,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> ModelContext {
    let inspiration_adjectives = sample_pool(ADJECTIVES, config.inspiration_adjectives_count, rng);
    let inspiration_nouns = sample_pool(NOUNS, config.inspiration_nouns_count, rng);
    let inspiration_verbs = sample_pool(VERBS, config.inspiration_verbs_count, rng);
    let (word_constraints, category_constraints) = pick_constraints(date, config, rng);

    ModelContext {
        disallowed_categories,
        inspiration_adjectives,
        inspiration_nouns,
        inspiration_verbs,
        word_constraints,
        category_constraints,
    }
}

fn sample_pool(pool: &[&str], count: usize, rng: &mut impl Rng) -> Vec<String> {
    let mut pool: Vec<&str> = pool.to_vec();
    sample(&mut pool, count, rng).into_iter().map(str::to_owned).collect()
}

fn pick_constraints(
    date: NaiveDate,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> (Option<String>, Option<Vec<String>>) {
    if let Some(holiday) = resolve_date_constraint(date) {
        return (Some(holiday.to_owned()), None);
    }
    if rng.random::<f64>() < config.special_constraint_chance {
        let mut pool = SPECIAL_CONSTRAINTS.to_vec();
        let special = sample(&mut pool, 1, rng).pop().map(str::to_owned);
        return (special, None);
    }
    (None, Some(draw_category_patterns(rng)))
}

/// Draws [`CATEGORY_PATTERNS_PER_GAME`] distinct patterns from the weighted
/// pool. Duplicate picks (the same pattern from another weight copy) are
/// discarded and redrawn; the pool shrinks every draw, so this terminates.
fn draw_category_patterns(rng: &mut impl Rng) -> Vec<String> {
    let mut pool = weighted_category_pattern_pool();
    let mut picked: Vec<String> = Vec::with_capacity(CATEGORY_PATTERNS_PER_GAME);
    while picked.len() < CATEGORY_PATTERNS_PER_GAME && !pool.is_empty() {
        let Some(candidate) = sample(&mut pool, 1, rng).pop() else { break };
        if !picked.iter().any(|p| p == candidate) {
            picked.push(candidate.to_owned());
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> GenerationConfig {
        GenerationConfig::default()
    }

    #[test]
    fn samples_the_configured_inspiration_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let context = build_model_context(date(2025, 3, 5), Vec::new(), &config(), &mut rng);

        assert_eq!(context.inspiration_adjectives.len(), 3);
        assert_eq!(context.inspiration_nouns.len(), 10);
        assert_eq!(context.inspiration_verbs.len(), 6);

        let distinct: HashSet<_> = context.inspiration_nouns.iter().collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn holiday_dates_always_carry_the_holiday_constraint() {
        // Even with the special-constraint roll forced to hit, the holiday
        // text wins and category patterns are absent.
        let mut config = config();
        config.special_constraint_chance = 1.0;

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let context = build_model_context(date(2025, 12, 25), Vec::new(), &config, &mut rng);
            assert_eq!(
                context.word_constraints.as_deref().map(|c| c.contains("Christmas")),
                Some(true)
            );
            assert_eq!(context.category_constraints, None);
        }
    }

    #[test]
    fn forced_special_constraint_comes_from_the_pool() {
        let mut config = config();
        config.special_constraint_chance = 1.0;
        let mut rng = StdRng::seed_from_u64(5);

        let context = build_model_context(date(2025, 3, 5), Vec::new(), &config, &mut rng);
        let constraint = context.word_constraints.expect("constraint should be set");
        assert!(SPECIAL_CONSTRAINTS.contains(&constraint.as_str()));
        assert_eq!(context.category_constraints, None);
    }

    #[test]
    fn zero_chance_yields_category_patterns() {
        let mut config = config();
        config.special_constraint_chance = 0.0;
        let mut rng = StdRng::seed_from_u64(5);

        let context = build_model_context(date(2025, 3, 5), Vec::new(), &config, &mut rng);
        assert_eq!(context.word_constraints, None);

        let patterns = context.category_constraints.expect("patterns should be set");
        assert_eq!(patterns.len(), CATEGORY_PATTERNS_PER_GAME);
        let distinct: HashSet<_> = patterns.iter().collect();
        assert_eq!(distinct.len(), CATEGORY_PATTERNS_PER_GAME);
    }

    #[test]
    fn inspirations_are_sampled_on_holidays_too() {
        let mut rng = StdRng::seed_from_u64(9);
        let context = build_model_context(date(2025, 12, 25), Vec::new(), &config(), &mut rng);

        assert_eq!(context.inspiration_adjectives.len(), 3);
        assert_eq!(context.inspiration_nouns.len(), 10);
        assert_eq!(context.inspiration_verbs.len(), 6);
    }

    #[test]
    fn serializes_with_camel_case_keys_and_no_null_constraints() {
        let mut config = config();
        config.special_constraint_chance = 0.0;
        let mut rng = StdRng::seed_from_u64(3);

        let context = build_model_context(
            date(2025, 3, 5),
            vec!["Boast".to_string()],
            &config,
            &mut rng,
        );
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["disallowedCategories"][0], "Boast");
        assert!(json.get("inspirationAdjectives").is_some());
        assert!(json.get("inspirationNouns").is_some());
        assert!(json.get("inspirationVerbs").is_some());
        // Absent constraint keys are omitted entirely, not serialized as null.
        assert!(json.get("wordConstraints").is_none());
        assert!(json.get("categoryConstraints").is_some());
    }
}
