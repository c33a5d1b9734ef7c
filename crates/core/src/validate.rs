use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::CategoryMap;

pub const WORDS_PER_CATEGORY: usize = 4;
pub const MIN_CATEGORIES: usize = 4;
pub const MAX_CATEGORIES: usize = 5;

/// Checks a normalized candidate against the structural rules.
///
/// `word_list` must be the flattened category words; it is checked first so
/// a word duplicated across categories surfaces as [`ValidationError::DuplicateWord`]
/// rather than as a count problem.
pub fn validate_puzzle(categories: &CategoryMap, word_list: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(word_list.len());
    for word in word_list {
        if !seen.insert(word.as_str()) {
            return Err(ValidationError::DuplicateWord { word: word.clone() });
        }
    }

    let count = categories.len();
    if !(MIN_CATEGORIES..=MAX_CATEGORIES).contains(&count) {
        return Err(ValidationError::WrongCategoryCount { count });
    }

    for (name, category) in categories {
        if category.words.len() != WORDS_PER_CATEGORY {
            return Err(ValidationError::WrongWordCount {
                category: name.clone(),
                count: category.words.len(),
            });
        }
    }

    for (name, category) in categories {
        let Some(substrings) = &category.embedded_substrings else { continue };
        // An empty declaration is vacuous, not an automatic failure.
        if substrings.is_empty() {
            continue;
        }
        for word in &category.words {
            if !substrings.iter().any(|s| word.contains(s.as_str())) {
                return Err(ValidationError::EmbeddedSubstringMiss {
                    category: name.clone(),
                    word: word.clone(),
                });
            }
        }
    }

    Ok(())
}
