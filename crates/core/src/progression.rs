//! Level and health arithmetic.
//!
//! Leveling uses a linear threshold: a character at level N needs `100 * N`
//! experience to reach N+1. Gained experience carries over; the loop subtracts
//! one threshold per level gained.

/// Experience required to advance past the given level.
pub fn level_threshold(level: i64) -> i64 {
    100 * level
}

/// Apply gained experience to a `(level, exp)` pair, returning the new pair.
///
/// Levels are gained one at a time so the per-level threshold grows as the
/// loop advances.
pub fn apply_exp(level: i64, exp: i64, gained: i64) -> (i64, i64) {
    let mut level = level.max(1);
    let mut exp = exp + gained;
    while exp >= level_threshold(level) {
        exp -= level_threshold(level);
        level += 1;
    }
    (level, exp)
}

/// Healing applied by a consumable, capped at max health.
pub fn heal(health: i64, max_health: i64, amount: i64) -> i64 {
    (health + amount).min(max_health)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_level_up_below_threshold() {
        assert_eq!(apply_exp(1, 0, 99), (1, 99));
    }

    #[test]
    fn single_level_up_carries_remainder() {
        // Level 1 threshold is 100: 30 + 90 = 120 -> level 2 with 20 left.
        assert_eq!(apply_exp(1, 30, 90), (2, 20));
    }

    #[test]
    fn multi_level_up_uses_growing_thresholds() {
        // 350 exp at level 1: -100 (L2), -200 (L3), 50 remaining.
        assert_eq!(apply_exp(1, 0, 350), (3, 50));
    }

    #[test]
    fn exact_threshold_levels_with_zero_exp() {
        assert_eq!(apply_exp(2, 150, 50), (3, 0));
    }

    #[test]
    fn heal_caps_at_max() {
        assert_eq!(heal(90, 100, 20), 100);
        assert_eq!(heal(50, 100, 20), 70);
        assert_eq!(heal(100, 100, 20), 100);
    }
}
