use rand::Rng;

/// Draws `count` elements from `pool` uniformly, without replacement.
///
/// Each draw picks a uniform index into the remaining pool and swap-removes
/// it, so a single draw is O(1) and the whole call is O(count). The pool is
/// consumed destructively; callers that need it again should pass a copy.
/// Asking for more elements than the pool holds drains the pool and stops.
pub fn sample<T>(pool: &mut Vec<T>, count: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut picked = Vec::with_capacity(count.min(pool.len()));
    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let index = rng.random_range(0..pool.len());
        picked.push(pool.swap_remove(index));
    }
    picked
}
