//! Completion noise stripping.
//!
//! Models wrap their JSON payload in predictable noise: a leading
//! `<thinking>` block, markdown code fences (with or without a `json`
//! tag) and stray whitespace. One pass with [`strip_completion_noise`]
//! removes all of it; whatever remains should parse as JSON.

use std::sync::LazyLock;

use regex::Regex;

static COMPLETION_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*<thinking>.*?</thinking>\s*|\s*`+(?:json)?\s*|^\s+|\s+$")
        .expect("completion noise pattern is valid")
});

pub(crate) fn strip_completion_noise(text: &str) -> String {
    COMPLETION_NOISE.replace_all(text, "").into_owned()
}
