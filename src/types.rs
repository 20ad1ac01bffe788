/// Category label attached to a question and used as the grouping key.
/// Examples: `Networking`, `Security`, `Other`
pub type CategoryName = String;
/// Answer option text shown to the test taker.
/// Example: `All of the above`
pub type OptionText = String;
/// Target percentage weight for one category (0-100 expected, not enforced).
/// Example: `40.0`
pub type Percentage = f64;
