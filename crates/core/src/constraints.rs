//! Constraint text pools fed to the model.
//!
//! A word constraint shapes every word in the puzzle; category patterns
//! shape how individual categories are themed. At most one of the two is
//! attached to a given game's context.

/// Game-wide word constraints, occasionally rolled on non-holiday dates.
pub static SPECIAL_CONSTRAINTS: &[&str] = &[
    "all words must be 4 letters, but categories MUST be more specific than \"4-letter words\"",
    "all words must be 5 letters, but categories MUST be more specific than \"5-letter words\"",
    "all words must have double letters, but categories MUST be more specific than \"words with double letters\" or \"words that contain 'look'\"",
    "all words must be compound words, but categories MUST be more specific than \"compound words\" (for example: \"words containing animals\")",
    "most words should be part of famous phrases or the title of a famous work (tv show, movie, book, etc)",
    "most words should have a Z in them, but categories MUST be more specific than \"words with a Z\"",
    "most words should have a Q in them, but categories MUST be more specific than \"words with a Q\"",
    "all words must begin with the same letter, but categories MUST be more specific than \"words beginning with L\". There should be one beginning letter for the game. The beginning letter should not be different in different categories.",
    "all words must end with the same letter, but categories MUST be more specific than \"words ending with Y\". There should be one ending letter for the game. The ending letter should not be different in different categories.",
    "all words must end in the same suffix (-ing, -er, -ly, etc), but categories MUST be more specific than \"words ending with the suffix -ing\". There should be one suffix for the game. The suffix should not be different in different categories.",
    "most words should rhyme with each other. There should be one rhyming sound for the game. The rhyming sound should not be different in different categories.",
    "all words must have silent letters, but categories MUST be more specific than \"words with silent letters\" or \"words with silent B\"",
    "all words must have 1 syllable, but categories MUST be more specific than \"one-syllable words\"",
    "all words must have 2 syllables, but categories MUST be more specific than \"two-syllable words\"",
    "all words must have 3 syllables, but categories MUST be more specific than \"three-syllable words\"",
    "all words must have 4 syllables, but categories MUST be more specific than \"four-syllable words\"",
    "always generate 5 categories rather than 4",
];

/// Word constraint for a fixed `MMDD` holiday, if that date has one.
/// Fixed dates win over the floating holiday rules.
pub fn fixed_date_constraint(mmdd: &str) -> Option<&'static str> {
    let text = match mmdd {
        "0101" => "all words must be related to New Year's Day, but categories are NOT required to be New Year-related",
        "0214" => "all words must be related to Valentine's Day, but categories are NOT required to be Valentine's Day-related",
        "0401" => "all words must be related to April Fools' Day/pranks/jokes, but categories are NOT required to be prank-related",
        "0704" => "all words must be related to Independence Day/July 4th, but categories are NOT required to be patriotic",
        "0920" => "all words must be related to weddings/anniversaries/love, but categories are NOT required to be wedding-related",
        "1031" => "all words must be related to Halloween, but categories are NOT required to be Halloween-related",
        "1111" => "all words must be related to Veterans Day/military/service, but categories are NOT required to be military-related",
        "1225" => "all words must be related to Christmas, but categories are NOT required to be Christmas-related",
        _ => return None,
    };
    Some(text)
}

// --- Category patterns ---

/// Patterns drawn for most games: the bread-and-butter category shapes.
pub static COMMON_CATEGORY_PATTERNS: &[&str] = &[
    "one category should be fill-in-the-blank: every word completes the same well-known phrase",
    "one category should be words that can all precede or all follow the same common word (for example: words that can precede \"BOARD\")",
    "one category should collect synonyms for the same everyday concept",
    "one category should be specific members of a broader set (for example: cereal mascots, shades of blue)",
    "one category should be types or varieties of one concrete thing",
    "one category should lean on pop culture: characters, titles, or famous names",
];

/// Patterns drawn less often; trickier connections.
pub static UNCOMMON_CATEGORY_PATTERNS: &[&str] = &[
    "one category should be homophones of members of another natural grouping",
    "one category should be words whose meaning changed with technology (for example: MOUSE, CLOUD, STREAM)",
    "one category should be words that are one letter away from members of another grouping",
    "one category should be halves of famous duos or trios",
    "one category should be words that double as first names",
];

/// Rarely drawn patterns; the trickiest connections.
pub static RARE_CATEGORY_PATTERNS: &[&str] = &[
    "one category should be anagrams of members of another natural grouping",
    "one category should hide a shorter word inside every word; declare each hidden word in that category's \"embeddedSubstrings\"",
    "one category should be words that become other words when read backwards",
    "one category should be words sharing an unusual silent letter",
];

pub const COMMON_PATTERN_WEIGHT: usize = 3;
pub const UNCOMMON_PATTERN_WEIGHT: usize = 2;
pub const RARE_PATTERN_WEIGHT: usize = 1;

/// The pattern pool with each tier repeated by its weight. Sampling the
/// pool without replacement and dropping duplicate picks gives common
/// patterns three times the draw odds of rare ones.
pub fn weighted_category_pattern_pool() -> Vec<&'static str> {
    let tiers = [
        (COMMON_CATEGORY_PATTERNS, COMMON_PATTERN_WEIGHT),
        (UNCOMMON_CATEGORY_PATTERNS, UNCOMMON_PATTERN_WEIGHT),
        (RARE_CATEGORY_PATTERNS, RARE_PATTERN_WEIGHT),
    ];
    let mut pool = Vec::new();
    for (patterns, weight) in tiers {
        for _ in 0..weight {
            pool.extend_from_slice(patterns);
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dates_cover_the_known_holidays() {
        for mmdd in ["0101", "0214", "0401", "0704", "0920", "1031", "1111", "1225"] {
            assert!(fixed_date_constraint(mmdd).is_some(), "missing {mmdd}");
        }
        assert_eq!(fixed_date_constraint("0606"), None);
        assert_eq!(fixed_date_constraint(""), None);
    }

    #[test]
    fn weighted_pool_repeats_tiers_by_weight() {
        let pool = weighted_category_pattern_pool();
        let expected = COMMON_CATEGORY_PATTERNS.len() * COMMON_PATTERN_WEIGHT
            + UNCOMMON_CATEGORY_PATTERNS.len() * UNCOMMON_PATTERN_WEIGHT
            + RARE_CATEGORY_PATTERNS.len() * RARE_PATTERN_WEIGHT;
        assert_eq!(pool.len(), expected);

        let common_copies = pool.iter().filter(|p| **p == COMMON_CATEGORY_PATTERNS[0]).count();
        let rare_copies = pool.iter().filter(|p| **p == RARE_CATEGORY_PATTERNS[0]).count();
        assert_eq!(common_copies, COMMON_PATTERN_WEIGHT);
        assert_eq!(rare_copies, RARE_PATTERN_WEIGHT);
    }

    #[test]
    fn pattern_tiers_hold_at_least_four_distinct_patterns() {
        // Pattern draws discard duplicates until four distinct patterns are
        // collected, so the distinct pool must not be smaller than that.
        let pool = weighted_category_pattern_pool();
        let distinct: std::collections::HashSet<_> = pool.iter().collect();
        assert!(distinct.len() >= 4);
    }
}
