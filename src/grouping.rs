//! Category grouping over a question pool.

use indexmap::IndexMap;

use crate::data::Question;
use crate::types::CategoryName;

/// Partition `pool` by effective category label.
///
/// Questions without a (non-empty) category land under the default `"Other"`
/// bucket. Relative order within each group matches pool order; group order is
/// first-seen order. Pure, no failures.
pub fn group_by_category(pool: &[Question]) -> IndexMap<CategoryName, Vec<Question>> {
    let mut by_category: IndexMap<CategoryName, Vec<Question>> = IndexMap::new();
    for question in pool {
        by_category
            .entry(question.category_label().to_string())
            .or_default()
            .push(question.clone());
    }
    by_category
}
