//! Inspiration word pools.
//!
//! These are deliberately ordinary words: they seed variety in the model's
//! output, they are not answers. Each pool is duplicate-free so sampling
//! without replacement yields distinct words.

pub static ADJECTIVES: &[&str] = &[
    "absent", "ancient", "awkward", "balmy", "bitter", "bold",
    "brave", "brief", "bright", "brisk", "broad", "calm",
    "candid", "clever", "clumsy", "coarse", "crisp", "curious",
    "daring", "dense", "dim", "distant", "eager", "early",
    "earnest", "easy", "elegant", "faint", "fancy", "fierce",
    "flat", "fond", "formal", "frank", "fresh", "gentle",
    "giddy", "glad", "gloomy", "good", "graceful", "grand",
    "grim", "hasty", "hollow", "humble", "idle", "jolly",
    "keen", "lavish", "lean", "lively", "lofty", "loud",
    "loyal", "mellow", "mild", "modest", "murky", "narrow",
    "neat", "nimble", "noble", "odd", "plain", "polite",
    "proud", "quaint", "quick", "quiet", "rapid", "rare",
    "rough", "round", "rustic", "shallow", "sharp", "shy",
    "sleek", "slight", "smooth", "solemn", "somber", "stale",
    "steep", "stern", "stout", "strange", "sturdy", "subtle",
    "swift", "tame", "tender", "tidy", "vague", "vivid",
    "wan", "warm", "weary", "wild", "witty",
];

pub static NOUNS: &[&str] = &[
    "anchor", "apron", "arrow", "attic", "autumn", "badge",
    "balance", "balloon", "banner", "bargain", "barrel", "basket",
    "beacon", "bell", "blanket", "border", "bottle", "breeze",
    "bridge", "bucket", "button", "cabin", "candle", "canyon",
    "carpet", "castle", "ceiling", "cellar", "chain", "chalk",
    "charm", "chess", "chimney", "circus", "cliff", "clock",
    "cloud", "compass", "contest", "copper", "corner", "cottage",
    "counterpart", "courtyard", "cradle", "crayon", "crumb", "crystal",
    "curtain", "cushion", "deck", "diamond", "dinner", "disappointment",
    "dismissal", "ditch", "drawer", "drum", "echo", "engagement",
    "engine", "envelope", "evening", "exclusion", "execution", "fabric",
    "feather", "fence", "ferry", "fiddle", "flag", "flock",
    "fountain", "fox", "frame", "garden", "garlic", "gate",
    "glacier", "glove", "granite", "gravel", "grove", "hammer",
    "harbor", "harvest", "hedge", "hinge", "honey", "hook",
    "horizon", "hurdle", "island", "ivory", "jacket", "jar",
    "journey", "kettle", "key", "kite", "ladder", "lantern",
    "ledge", "lemon", "letter", "library", "lighthouse", "lily",
    "lumber", "machine", "mantel", "marble", "meadow", "mirror",
    "mountain", "needle", "nest", "oven", "pantry", "parade",
    "pebble", "pillow", "pocket", "pond", "prairie", "puzzle",
    "quarry", "quilt", "raft", "ribbon", "ridge", "river",
    "rocket", "saddle", "shadow", "shelf", "shovel", "signal",
    "silver", "sleigh", "spark", "spice", "spiral", "statue",
    "stream", "summit", "sunset", "swamp", "tailor", "telescope",
    "thread", "thunder", "ticket", "time", "tunnel", "twilight",
    "umbrella", "valley", "velvet", "village", "violin", "wagon",
    "walnut", "whistle", "willow", "window", "winter", "yarn",
];

pub static VERBS: &[&str] = &[
    "admire", "answer", "arrive", "bake", "be", "beckon",
    "bloom", "boast", "borrow", "bounce", "brew", "carve",
    "chase", "cheer", "chop", "climb", "crawl", "dangle",
    "dash", "dazzle", "dig", "dive", "doodle", "doze",
    "drift", "fetch", "flee", "flicker", "float", "fold",
    "forgive", "gather", "gaze", "giggle", "glide", "glow",
    "grasp", "grin", "grumble", "haggle", "hatch", "hum",
    "hurl", "juggle", "jumble", "kneel", "knit", "leap",
    "linger", "march", "mend", "mingle", "mumble", "murmur",
    "nudge", "peek", "perch", "pluck", "polish", "pounce",
    "pour", "prune", "ramble", "revise", "rip", "roam",
    "rummage", "rush", "scan", "scatter", "scold", "scoop",
    "scratch", "scribble", "seize", "shiver", "shrug", "simmer",
    "skate", "slide", "snooze", "soar", "sprint", "sprout",
    "squint", "stack", "stitch", "stroll", "swirl", "tiptoe",
    "toss", "trudge", "tumble", "twirl", "wander", "wave",
    "weave", "whirl", "whisk", "whisper", "wobble", "yawn",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_no_duplicates(pool: &[&str]) {
        let distinct: HashSet<_> = pool.iter().collect();
        assert_eq!(distinct.len(), pool.len());
    }

    #[test]
    fn pools_are_duplicate_free() {
        assert_no_duplicates(ADJECTIVES);
        assert_no_duplicates(NOUNS);
        assert_no_duplicates(VERBS);
    }

    #[test]
    fn pools_cover_the_default_sample_sizes() {
        assert!(ADJECTIVES.len() >= 3);
        assert!(NOUNS.len() >= 10);
        assert!(VERBS.len() >= 6);
    }
}
