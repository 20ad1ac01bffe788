//! Ingestion boundary: parsing raw quiz data into [`Question`] records.
//!
//! Schema correctness is this boundary's responsibility; the sampling core
//! only defensively no-ops on shape violations. Transport (fetching the quiz
//! data) belongs to an external loader.

use serde_json::Value;
use tracing::debug;

use crate::data::Question;
use crate::errors::SamplerError;

/// Parse a JSON array of question records.
pub fn questions_from_json(raw: &str) -> Result<Vec<Question>, SamplerError> {
    questions_from_value(serde_json::from_str(raw)?)
}

/// Convert an already-parsed JSON value into question records.
///
/// Anything other than an array is rejected. Field-level slack (missing
/// options, absent category) is allowed by the [`Question`] schema itself.
pub fn questions_from_value(value: Value) -> Result<Vec<Question>, SamplerError> {
    let Value::Array(entries) = value else {
        return Err(SamplerError::NotAnArray(json_kind(&value).to_string()));
    };
    let questions = entries
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<Question>, _>>()?;
    debug!(records = questions.len(), "parsed quiz data");
    Ok(questions)
}

/// A data-quality finding for one question record.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaViolation {
    /// Index of the offending question within the pool.
    pub question_idx: usize,
    /// Correct-answer index that does not point at an option.
    pub answer_idx: usize,
}

/// Report correct-answer indices that fall outside their question's options.
///
/// The engine tolerates these (the option shuffler drops them during
/// remapping); loaders can use this report to reject or repair bad data
/// before it reaches users.
pub fn schema_violations(pool: &[Question]) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    for (question_idx, question) in pool.iter().enumerate() {
        for &answer_idx in &question.correct_answer_index {
            if answer_idx >= question.options.len() {
                violations.push(SchemaViolation {
                    question_idx,
                    answer_idx,
                });
            }
        }
    }
    violations
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
