//! Pipeline configuration: join method and run options.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::table::DEFAULT_KEY;

/// How two tables are combined on the sample identifier column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinMethod {
    /// Keep the union of sample identifiers (default)
    #[default]
    Outer,
    /// Keep the intersection of sample identifiers
    Inner,
    /// Keep the accumulator's sample identifiers
    Left,
    /// Keep the incoming table's sample identifiers
    Right,
}

impl JoinMethod {
    /// The lower-case name used on the CLI and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinMethod::Outer => "outer",
            JoinMethod::Inner => "inner",
            JoinMethod::Left => "left",
            JoinMethod::Right => "right",
        }
    }
}

impl FromStr for JoinMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outer" => Ok(JoinMethod::Outer),
            "inner" => Ok(JoinMethod::Inner),
            "left" => Ok(JoinMethod::Left),
            "right" => Ok(JoinMethod::Right),
            _ => Err(format!("unknown join method: {s}")),
        }
    }
}

/// Options for a pipeline run.
///
/// The defaults reproduce the instrument's standard processing: outer join
/// on `sample_id`, missing cells excluded from the averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Join method applied at every merge step
    pub method: JoinMethod,
    /// Name of the sample identifier column
    pub key: String,
    /// Exclude missing cells from the averages instead of zero-filling them
    pub skipna: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            method: JoinMethod::default(),
            key: DEFAULT_KEY.to_string(),
            skipna: true,
        }
    }
}

impl PipelineOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the join method.
    pub fn method(mut self, method: JoinMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the identifier column name.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the missing-value policy used by the summary.
    pub fn skipna(mut self, skipna: bool) -> Self {
        self.skipna = skipna;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PipelineOptions::new();
        assert_eq!(options.method, JoinMethod::Outer);
        assert_eq!(options.key, "sample_id");
        assert!(options.skipna);
    }

    #[test]
    fn test_builder() {
        let options = PipelineOptions::new()
            .method(JoinMethod::Inner)
            .key("well_id")
            .skipna(false);

        assert_eq!(options.method, JoinMethod::Inner);
        assert_eq!(options.key, "well_id");
        assert!(!options.skipna);
    }

    #[test]
    fn test_join_method_from_str() {
        assert_eq!(JoinMethod::from_str("outer").unwrap(), JoinMethod::Outer);
        assert_eq!(JoinMethod::from_str("Inner").unwrap(), JoinMethod::Inner);
        assert_eq!(JoinMethod::from_str("LEFT").unwrap(), JoinMethod::Left);
        assert_eq!(JoinMethod::from_str("right").unwrap(), JoinMethod::Right);
        assert!(JoinMethod::from_str("cross").is_err());
    }

    #[test]
    fn test_join_method_round_trips_through_as_str() {
        for method in [
            JoinMethod::Outer,
            JoinMethod::Inner,
            JoinMethod::Left,
            JoinMethod::Right,
        ] {
            assert_eq!(JoinMethod::from_str(method.as_str()).unwrap(), method);
        }
    }
}
