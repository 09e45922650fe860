//! Per-category update rules.
//!
//! Each rule is a small stateless struct implementing [`UpdateStrategy`]. The
//! rate-based rules share one aging helper; quality clamping is the free
//! function [`clamp`].

use crate::config::QualityBounds;
use crate::item::Item;

/// One category's end-of-day mutation.
///
/// Implementations must be pure with respect to anything but `item`.
pub trait UpdateStrategy: Send + Sync + core::fmt::Debug {
    /// Stable, lowercase identifier used in logs and display.
    fn label(&self) -> &'static str;

    /// Apply one simulated day to `item` in place.
    fn apply(&self, item: &mut Item, bounds: QualityBounds);
}

/// Clamp `value` into `lo..=hi`.
pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    value.max(lo).min(hi)
}

/// Decrement `sell_in`, then move quality by `daily_delta`, doubled once the
/// updated `sell_in` is negative. The crossing day already gets the doubled rate.
fn age_one_day(item: &mut Item, daily_delta: i32, bounds: QualityBounds) {
    item.sell_in = item.sell_in.saturating_sub(1);
    let delta = if item.is_past_due() {
        daily_delta * 2
    } else {
        daily_delta
    };
    item.quality = clamp(item.quality.saturating_add(delta), bounds.min, bounds.max);
}

/// Default rule: loses 1 quality per day, 2 once past due.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Standard;

impl UpdateStrategy for Standard {
    fn label(&self) -> &'static str {
        "standard"
    }

    fn apply(&self, item: &mut Item, bounds: QualityBounds) {
        age_one_day(item, -1, bounds);
    }
}

/// Perishables: lose 2 quality per day, 4 once past due.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FastDegrading;

impl UpdateStrategy for FastDegrading {
    fn label(&self) -> &'static str {
        "fast_degrading"
    }

    fn apply(&self, item: &mut Item, bounds: QualityBounds) {
        age_one_day(item, -2, bounds);
    }
}

/// Items that improve with age: gain 1 quality per day, 2 once past due.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Appreciating;

impl UpdateStrategy for Appreciating {
    fn label(&self) -> &'static str {
        "appreciating"
    }

    fn apply(&self, item: &mut Item, bounds: QualityBounds) {
        age_one_day(item, 1, bounds);
    }
}

/// Items that never change.
///
/// Writes nothing, including no clamping: quality constructed outside the
/// bounds stays as it was.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Unchanging;

impl UpdateStrategy for Unchanging {
    fn label(&self) -> &'static str {
        "unchanging"
    }

    fn apply(&self, _item: &mut Item, _bounds: QualityBounds) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(strategy: &dyn UpdateStrategy, sell_in: i32, quality: i32) -> Item {
        let mut item = Item::new("test", sell_in, quality);
        strategy.apply(&mut item, QualityBounds::default());
        item
    }

    #[test]
    fn clamp_pins_to_range() {
        assert_eq!(clamp(-3, 0, 25), 0);
        assert_eq!(clamp(30, 0, 25), 25);
        assert_eq!(clamp(12, 0, 25), 12);
    }

    #[test]
    fn standard_degrades_by_one_then_two() {
        assert_eq!(run(&Standard, 5, 10), Item::new("test", 4, 9));
        assert_eq!(run(&Standard, 0, 10), Item::new("test", -1, 8));
        assert_eq!(run(&Standard, -2, 10), Item::new("test", -3, 8));
    }

    #[test]
    fn standard_never_goes_below_floor() {
        assert_eq!(run(&Standard, 0, 0).quality, 0);
        assert_eq!(run(&Standard, 0, 1).quality, 0);
    }

    #[test]
    fn fast_degrading_degrades_by_two_then_four() {
        assert_eq!(run(&FastDegrading, 10, 10), Item::new("test", 9, 8));
        assert_eq!(run(&FastDegrading, 0, 10), Item::new("test", -1, 6));
        assert_eq!(run(&FastDegrading, 0, 3).quality, 0);
    }

    #[test]
    fn appreciating_gains_one_then_two() {
        assert_eq!(run(&Appreciating, 10, 10), Item::new("test", 9, 11));
        assert_eq!(run(&Appreciating, 0, 10), Item::new("test", -1, 12));
    }

    #[test]
    fn appreciating_respects_ceiling() {
        assert_eq!(run(&Appreciating, 8, 25).quality, 25);
        assert_eq!(run(&Appreciating, -1, 24).quality, 25);
    }

    #[test]
    fn unchanging_keeps_out_of_range_quality() {
        assert_eq!(run(&Unchanging, 0, 80), Item::new("test", 0, 80));
        assert_eq!(run(&Unchanging, -3, -7), Item::new("test", -3, -7));
    }

    #[test]
    fn custom_bounds_are_honoured() {
        let mut item = Item::new("test", 5, 48);
        Appreciating.apply(&mut item, QualityBounds { min: 0, max: 50 });
        assert_eq!(item.quality, 49);
    }

    #[test]
    fn labels_are_distinct() {
        let labels = [
            Standard.label(),
            FastDegrading.label(),
            Appreciating.label(),
            Unchanging.label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: bounded rules keep in-range quality in range and always
        /// move sell_in down by exactly one.
        #[test]
        fn bounded_rules_stay_in_range(
            sell_in in -20i32..50,
            quality in 0i32..=25,
            which in 0usize..3,
        ) {
            let strategies: [&dyn UpdateStrategy; 3] = [&Standard, &FastDegrading, &Appreciating];
            let item = run(strategies[which], sell_in, quality);
            prop_assert!((0..=25).contains(&item.quality));
            prop_assert_eq!(item.sell_in, sell_in - 1);
        }

        /// Property: the unchanging rule is a no-op for any input.
        #[test]
        fn unchanging_is_identity(sell_in in any::<i32>(), quality in any::<i32>()) {
            prop_assert_eq!(run(&Unchanging, sell_in, quality), Item::new("test", sell_in, quality));
        }
    }
}
