/// Constants used by grouping and sampler mode selection.
pub mod sampler {
    /// Category assigned to questions that carry no (or an empty) category label.
    pub const DEFAULT_CATEGORY: &str = "Other";
    /// Divisor converting distribution percentages into fractions of the requested count.
    pub const PERCENT_SCALE: f64 = 100.0;
}
