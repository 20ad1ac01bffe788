//! Answer-option shuffling with consistent correct-answer remapping.

use rand::Rng;

use crate::data::Question;
use crate::shuffle::shuffled_indices;

/// Apply a concrete permutation to a question's options.
///
/// `permutation[new_idx]` names the old index whose option moves to
/// `new_idx`. Each correct-answer index is mapped through the inverse to its
/// new position; indices outside the options range are dropped. Every other
/// field is copied verbatim.
pub(crate) fn apply_option_permutation(question: &Question, permutation: &[usize]) -> Question {
    let option_count = question.options.len();
    debug_assert_eq!(permutation.len(), option_count);

    let mut inverse = vec![usize::MAX; option_count];
    for (new_idx, &old_idx) in permutation.iter().enumerate() {
        inverse[old_idx] = new_idx;
    }

    let options = permutation
        .iter()
        .map(|&old_idx| question.options[old_idx].clone())
        .collect();
    let correct_answer_index = question
        .correct_answer_index
        .iter()
        .filter(|&&old_idx| old_idx < option_count)
        .map(|&old_idx| inverse[old_idx])
        .collect();

    Question {
        category: question.category.clone(),
        options,
        correct_answer_index,
        extra: question.extra.clone(),
    }
}

/// Return `question` with options permuted uniformly at random and the
/// correct-answer indices remapped to follow them.
///
/// Questions with fewer than two options (including the empty default for a
/// missing options array) come back as an unchanged clone. The multiset of
/// option texts and the set of texts marked correct are invariant.
pub fn shuffle_question_options_with<R>(question: &Question, rng: &mut R) -> Question
where
    R: Rng + ?Sized,
{
    if question.options.len() < 2 {
        return question.clone();
    }
    let permutation = shuffled_indices(question.options.len(), rng);
    apply_option_permutation(question, &permutation)
}

/// [`shuffle_question_options_with`] over the process-default generator.
pub fn shuffle_question_options(question: &Question) -> Question {
    shuffle_question_options_with(question, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::DeterministicRng;
    use serde_json::{Map, Value};
    use std::collections::BTreeSet;

    fn question(options: &[&str], correct: &[usize]) -> Question {
        let mut extra = Map::new();
        extra.insert("question".into(), Value::String("what is it?".into()));
        Question {
            category: Some("A".into()),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer_index: correct.to_vec(),
            extra,
        }
    }

    fn correct_texts(question: &Question) -> BTreeSet<String> {
        question
            .correct_answer_index
            .iter()
            .map(|&idx| question.options[idx].clone())
            .collect()
    }

    #[test]
    fn reversal_permutation_remaps_correct_index() {
        let original = question(&["x", "y", "z"], &[2]);
        let reversed = apply_option_permutation(&original, &[2, 1, 0]);
        assert_eq!(reversed.options, ["z", "y", "x"]);
        assert_eq!(reversed.correct_answer_index, [0]);
    }

    #[test]
    fn identity_permutation_is_a_copy() {
        let original = question(&["x", "y", "z"], &[0, 2]);
        let copy = apply_option_permutation(&original, &[0, 1, 2]);
        assert_eq!(copy, original);
    }

    #[test]
    fn out_of_range_correct_indices_are_dropped() {
        let original = question(&["x", "y"], &[1, 7]);
        let shuffled = apply_option_permutation(&original, &[1, 0]);
        assert_eq!(shuffled.correct_answer_index, [1]);
    }

    #[test]
    fn shuffle_preserves_texts_and_correct_set() {
        let original = question(&["a", "b", "c", "d", "e"], &[1, 3]);
        let mut rng = DeterministicRng::new(5);
        for _ in 0..20 {
            let shuffled = shuffle_question_options_with(&original, &mut rng);
            let mut texts = shuffled.options.clone();
            texts.sort();
            assert_eq!(texts, ["a", "b", "c", "d", "e"]);
            assert_eq!(correct_texts(&shuffled), correct_texts(&original));
            assert_eq!(shuffled.extra, original.extra);
            assert_eq!(shuffled.category, original.category);
        }
    }

    #[test]
    fn optionless_question_passes_through() {
        let empty = question(&[], &[]);
        let single = question(&["only"], &[0]);
        let mut rng = DeterministicRng::new(11);
        assert_eq!(shuffle_question_options_with(&empty, &mut rng), empty);
        assert_eq!(shuffle_question_options_with(&single, &mut rng), single);
    }
}
