//! Error types for dataset loading and derived-series queries.
//!
//! Every failure is local and recoverable: the caller picks different input
//! or parameters. Nothing here is ever converted into a default value.

/// Field of an episode record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RecordField {
    #[display("episode")]
    Episode,
    #[display("scenario")]
    Scenario,
    #[display("reward")]
    Reward,
    #[display("avg_cost")]
    AvgCost,
    #[display("steps")]
    Steps,
}

/// Malformed input rejected while loading an episode dataset.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("invalid `{field}` in episode {episode}: {reason}")]
    InvalidField {
        /// Episode number as it appeared in the input.
        episode: i64,
        field: RecordField,
        reason: String,
    },
    #[display("dataset contains no episode records")]
    EmptyDataset,
}

/// Baseline value used as a percentage denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BaselineField {
    #[display("reward")]
    Reward,
    #[display("cost")]
    Cost,
}

/// Out-of-domain query parameter.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidArgument {
    #[display("unknown scenario `{token}` (expected one of: all, low, medium, high)")]
    UnknownScenario { token: String },
    #[display("rolling window size must be a positive integer")]
    NonPositiveWindowSize,
    #[display("group size must be a positive integer")]
    NonPositiveGroupSize,
    #[display("baseline `{method}` has a zero {field}, so the percentage delta is undefined")]
    ZeroBaseline { method: String, field: BaselineField },
}

/// Statistics were requested over an empty subset of episodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot summarize an empty set of episodes")]
pub struct EmptyInputError;

/// Any error produced by a composed query.
///
/// Displays as the wrapped error and reports no further source, so an error
/// chain prints the message once.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MetricsError {
    #[display("{_0}")]
    Validation(#[error(not(source))] ValidationError),
    #[display("{_0}")]
    InvalidArgument(#[error(not(source))] InvalidArgument),
    #[display("{_0}")]
    EmptyInput(#[error(not(source))] EmptyInputError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_metrics_error_displays_inner_once() {
        let err = MetricsError::from(EmptyInputError);
        assert_eq!(err.to_string(), EmptyInputError.to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_metrics_error_has_no_source_for_any_variant() {
        let errors = [
            MetricsError::from(ValidationError::EmptyDataset),
            MetricsError::from(InvalidArgument::NonPositiveGroupSize),
            MetricsError::from(EmptyInputError),
        ];
        for err in errors {
            assert!(err.source().is_none(), "{err}");
        }
    }

    #[test]
    fn test_validation_error_message_names_field() {
        let err = ValidationError::InvalidField {
            episode: 7,
            field: RecordField::AvgCost,
            reason: "must be finite".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid `avg_cost` in episode 7: must be finite"
        );
    }
}
