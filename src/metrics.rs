//! Aggregate category-share metrics over sampled decks.

use indexmap::IndexMap;

use crate::data::Question;
use crate::types::CategoryName;

/// Aggregate skew metrics for per-category question counts in a deck.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySkew {
    pub total: usize,
    pub categories: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub max_share: f64,
    pub min_share: f64,
    pub ratio: f64,
    pub per_category: Vec<CategoryShare>,
}

/// Per-category share of a deck for skew inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: CategoryName,
    pub count: usize,
    pub share: f64,
}

/// Compute skew metrics for a sampled deck, keyed by effective category.
///
/// Lets callers compare how closely a weighted draw tracks its target
/// distribution. Returns `None` for an empty deck.
pub fn category_skew(deck: &[Question]) -> Option<CategorySkew> {
    if deck.is_empty() {
        return None;
    }
    let mut counts: IndexMap<CategoryName, usize> = IndexMap::new();
    for question in deck {
        *counts.entry(question.category_label().to_string()).or_default() += 1;
    }

    let total = deck.len();
    let categories = counts.len();
    let min = *counts.values().min().expect("counts non-empty");
    let max = *counts.values().max().expect("counts non-empty");
    let mean = total as f64 / categories as f64;
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    let mut per_category: Vec<CategoryShare> = counts
        .iter()
        .map(|(category, count)| CategoryShare {
            category: category.clone(),
            count: *count,
            share: *count as f64 / total as f64,
        })
        .collect();
    per_category.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

    Some(CategorySkew {
        total,
        categories,
        min,
        max,
        mean,
        max_share: max as f64 / total as f64,
        min_share: min as f64 / total as f64,
        ratio,
        per_category,
    })
}
