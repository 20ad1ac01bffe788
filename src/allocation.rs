//! Proportional allocation of a requested count across category targets.

use indexmap::IndexMap;

use crate::constants::sampler::PERCENT_SCALE;
use crate::data::TopicDistribution;
use crate::types::CategoryName;

/// Convert percentage targets into integer per-category counts summing to
/// `count` whenever capacity allows.
///
/// Each distribution entry (in insertion order) gets
/// `round(count * percentage / 100)` clamped to that category's available
/// count; a category missing from `available` allocates zero. Independent
/// rounding rarely sums to `count`, so a reconciliation pass walks the
/// entries cyclically in the same order: a deficit adds one per visit to
/// categories below capacity, an excess removes one per visit from categories
/// above zero. When pool-wide capacity is short the result is the maximum
/// achievable total.
pub fn allocate_counts(
    count: usize,
    distribution: &TopicDistribution,
    available: &IndexMap<CategoryName, usize>,
) -> IndexMap<CategoryName, usize> {
    let mut counts: IndexMap<CategoryName, usize> = IndexMap::with_capacity(distribution.len());
    for (category, percentage) in distribution {
        let capacity = available.get(category).copied().unwrap_or(0);
        let raw = (count as f64 * percentage / PERCENT_SCALE).round();
        let rounded = if raw.is_finite() && raw > 0.0 {
            raw as usize
        } else {
            0
        };
        counts.insert(category.clone(), rounded.min(capacity));
    }

    let total: usize = counts.values().sum();
    if total < count {
        let mut deficit = count - total;
        loop {
            let mut progressed = false;
            for (category, allocated) in counts.iter_mut() {
                if deficit == 0 {
                    break;
                }
                let capacity = available.get(category).copied().unwrap_or(0);
                if *allocated < capacity {
                    *allocated += 1;
                    deficit -= 1;
                    progressed = true;
                }
            }
            // Capacity exhausted across every category; accept the shortfall.
            if deficit == 0 || !progressed {
                break;
            }
        }
    } else if total > count {
        let mut excess = total - count;
        while excess > 0 {
            for allocated in counts.values_mut() {
                if excess == 0 {
                    break;
                }
                if *allocated > 0 {
                    *allocated -= 1;
                    excess -= 1;
                }
            }
        }
    }

    counts
}
