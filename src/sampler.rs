//! Sampler orchestrator: mode selection and deck assembly.

use indexmap::IndexMap;
use rand::Rng;
use tracing::debug;

use crate::allocation::allocate_counts;
use crate::data::{Question, SampleRequest, SizeValue, TopicDistribution};
use crate::grouping::group_by_category;
use crate::options::shuffle_question_options_with;
use crate::shuffle::shuffled_with;
use crate::types::CategoryName;

/// Sample a deck from `pool` using an explicit random source.
///
/// Mode selection:
/// - all mode when `size` does not parse to a positive count below the pool
///   size: the whole pool comes back as a fresh permutation;
/// - uniform mode when no pooled question carries a category, or
///   `distribution` is empty: the first N questions of a single shuffle;
/// - weighted mode otherwise: per-category counts from the proportional
///   allocator, a shuffled slice per category, and a final reshuffle so
///   category blocks do not leak into presentation order.
///
/// In every mode each selected question's options are shuffled with its
/// correct-answer indices remapped. Never fails: malformed sizes and
/// distributions degrade to a defined mode instead.
pub fn sample_questions_with<R>(
    pool: &[Question],
    size: &SizeValue,
    distribution: &TopicDistribution,
    rng: &mut R,
) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let Some(count) = size.requested_count().filter(|&count| count < pool.len()) else {
        debug!(pool = pool.len(), "sampling entire pool (all mode)");
        return finalize(shuffled_with(pool, rng), rng);
    };

    let has_categories = pool.iter().any(Question::has_category);
    if !has_categories || distribution.is_empty() {
        debug!(pool = pool.len(), count, "sampling without weights (uniform mode)");
        let mut picked = shuffled_with(pool, rng);
        picked.truncate(count);
        return finalize(picked, rng);
    }

    let by_category = group_by_category(pool);
    let available: IndexMap<CategoryName, usize> = by_category
        .iter()
        .map(|(category, group)| (category.clone(), group.len()))
        .collect();
    let counts = allocate_counts(count, distribution, &available);
    debug!(
        pool = pool.len(),
        count,
        allocated = counts.values().sum::<usize>(),
        categories = counts.len(),
        "sampling with category weights (weighted mode)"
    );

    let mut picked = Vec::with_capacity(count);
    for (category, take) in &counts {
        if *take == 0 {
            continue;
        }
        let Some(group) = by_category.get(category) else {
            continue;
        };
        let mut drawn = shuffled_with(group, rng);
        drawn.truncate(*take);
        picked.extend(drawn);
    }

    finalize(shuffled_with(&picked, rng), rng)
}

/// [`sample_questions_with`] over the process-default generator.
pub fn sample_questions(
    pool: &[Question],
    size: &SizeValue,
    distribution: &TopicDistribution,
) -> Vec<Question> {
    sample_questions_with(pool, size, distribution, &mut rand::rng())
}

/// Sample a deck for a [`SampleRequest`] using an explicit random source.
pub fn sample_with<R>(pool: &[Question], request: &SampleRequest, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    sample_questions_with(pool, &request.size, &request.distribution, rng)
}

/// [`sample_with`] over the process-default generator.
pub fn sample(pool: &[Question], request: &SampleRequest) -> Vec<Question> {
    sample_with(pool, request, &mut rand::rng())
}

fn finalize<R>(picked: Vec<Question>, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    picked
        .iter()
        .map(|question| shuffle_question_options_with(question, rng))
        .collect()
}
