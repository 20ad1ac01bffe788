#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Proportional allocation of requested counts across categories.
pub mod allocation;
/// Centralized constants used across grouping and sampling.
pub mod constants;
/// Question records, size values, and distribution types.
pub mod data;
/// Category grouping over question pools.
pub mod grouping;
/// JSON ingestion boundary and schema-quality reporting.
pub mod ingestion;
/// Category-share metrics over sampled decks.
pub mod metrics;
/// Answer-option shuffling with correct-answer remapping.
pub mod options;
/// Sampler orchestrator and mode selection.
pub mod sampler;
/// Shuffle primitive and deterministic RNG.
pub mod shuffle;
/// Shared type aliases.
pub mod types;

mod errors;

pub use allocation::allocate_counts;
pub use data::{Question, SampleRequest, SizeValue, TopicDistribution};
pub use errors::SamplerError;
pub use grouping::group_by_category;
pub use ingestion::{questions_from_json, questions_from_value, schema_violations, SchemaViolation};
pub use metrics::{category_skew, CategoryShare, CategorySkew};
pub use options::{shuffle_question_options, shuffle_question_options_with};
pub use sampler::{sample, sample_questions, sample_questions_with, sample_with};
pub use shuffle::{shuffled, shuffled_with, DeterministicRng};
pub use types::{CategoryName, OptionText, Percentage};
