use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::sampler::DEFAULT_CATEGORY;

pub use crate::types::{CategoryName, OptionText, Percentage};

/// Target percentage weights per category driving proportional allocation.
///
/// Insertion order is significant: the allocator walks entries in this order
/// when reconciling rounded counts, so two distributions with the same weights
/// but different insertion order can tie-break differently.
pub type TopicDistribution = IndexMap<CategoryName, Percentage>;

/// One quiz question as parsed from a JSON quiz-data array.
///
/// Fields the engine does not know about are captured in `extra` and carried
/// through every transformation verbatim. The engine never mutates a question;
/// every operation returns freshly built records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Category label; absent or empty means [`DEFAULT_CATEGORY`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryName>,
    /// Ordered answer options. A missing array deserializes to empty, which
    /// the option shuffler passes through unchanged.
    #[serde(default)]
    pub options: Vec<OptionText>,
    /// Unordered set of indices into `options` marking correct answers.
    #[serde(default, rename = "correctAnswerIndex")]
    pub correct_answer_index: Vec<usize>,
    /// All other record fields, preserved untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Effective category label, defaulting blank or missing categories.
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// True when the question carries an explicit, non-empty category.
    pub fn has_category(&self) -> bool {
        matches!(self.category.as_deref(), Some(label) if !label.is_empty())
    }
}

/// Requested deck size as supplied by a caller: a raw number or a string.
///
/// Loose by design. Values that do not parse to a positive integer select
/// all mode rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    /// Numeric size, possibly fractional or non-finite.
    Number(f64),
    /// Textual size, parsed as a base-10 integer.
    Text(String),
}

impl SizeValue {
    /// Parse the requested count, or `None` when the value is non-numeric,
    /// non-finite, or not strictly positive.
    pub fn requested_count(&self) -> Option<usize> {
        let count = match self {
            SizeValue::Number(value) if value.is_finite() => value.trunc() as i64,
            SizeValue::Number(_) => return None,
            SizeValue::Text(text) => text.trim().parse::<i64>().ok()?,
        };
        usize::try_from(count).ok().filter(|&count| count > 0)
    }
}

impl From<usize> for SizeValue {
    fn from(count: usize) -> Self {
        SizeValue::Number(count as f64)
    }
}

impl From<&str> for SizeValue {
    fn from(text: &str) -> Self {
        SizeValue::Text(text.to_string())
    }
}

/// A complete sampling request: desired count plus optional category targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Desired number of questions.
    pub size: SizeValue,
    /// Per-category percentage targets; empty means uniform sampling.
    #[serde(default)]
    pub distribution: TopicDistribution,
}
