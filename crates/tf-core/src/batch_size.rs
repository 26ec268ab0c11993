//! Parsing and bounds-checking the requested number of tips

use std::num::IntErrorKind;

use thiserror::Error;

use crate::variant::Variant;

/// Why a batch size was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchSizeError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("number must be positive")]
    NotPositive,

    #[error("not more than {max} tips possible")]
    AboveMaximum { max: usize },

    #[error("{variant} needs at least {min} tips")]
    BelowMinimum { min: usize, variant: Variant },
}

/// Parse user input as a batch size for `variant`, capped at `max`
pub fn parse_batch_size(input: &str, variant: Variant, max: usize) -> Result<usize, BatchSizeError> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => BatchSizeError::AboveMaximum { max },
                IntErrorKind::NegOverflow => BatchSizeError::NotPositive,
                _ => BatchSizeError::NotANumber(trimmed.to_string()),
            });
        }
    };

    validate_batch_size(value, variant, max)
}

/// Bounds check an already parsed batch size
pub fn validate_batch_size(value: i64, variant: Variant, max: usize) -> Result<usize, BatchSizeError> {
    if value <= 0 {
        return Err(BatchSizeError::NotPositive);
    }

    let count = usize::try_from(value).map_err(|_| BatchSizeError::AboveMaximum { max })?;
    if count > max {
        return Err(BatchSizeError::AboveMaximum { max });
    }

    let min = variant.min_batch();
    if count < min {
        return Err(BatchSizeError::BelowMinimum { min, variant });
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_sizes() {
        assert_eq!(parse_batch_size("2", Variant::Swisslos, 20), Ok(2));
        assert_eq!(parse_batch_size(" 20\n", Variant::Swisslos, 20), Ok(20));
        assert_eq!(parse_batch_size("1", Variant::EuroMillions, 20), Ok(1));
    }

    #[test]
    fn test_single_swisslos_tip_rejected() {
        assert_eq!(
            parse_batch_size("1", Variant::Swisslos, 20),
            Err(BatchSizeError::BelowMinimum {
                min: 2,
                variant: Variant::Swisslos
            })
        );
    }

    #[test]
    fn test_non_positive_rejected() {
        for variant in Variant::ALL {
            assert_eq!(parse_batch_size("0", variant, 20), Err(BatchSizeError::NotPositive));
            assert_eq!(parse_batch_size("-4", variant, 20), Err(BatchSizeError::NotPositive));
        }
    }

    #[test]
    fn test_above_maximum_rejected() {
        assert_eq!(
            parse_batch_size("21", Variant::EuroMillions, 20),
            Err(BatchSizeError::AboveMaximum { max: 20 })
        );
        assert_eq!(parse_batch_size("50", Variant::EuroMillions, 50), Ok(50));
        assert_eq!(
            parse_batch_size("99999999999999999999999", Variant::Swisslos, 20),
            Err(BatchSizeError::AboveMaximum { max: 20 })
        );
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            parse_batch_size("five", Variant::Swisslos, 20),
            Err(BatchSizeError::NotANumber("five".into()))
        );
        assert!(matches!(
            parse_batch_size("", Variant::Swisslos, 20),
            Err(BatchSizeError::NotANumber(_))
        ));
        assert!(matches!(
            parse_batch_size("2.5", Variant::Swisslos, 20),
            Err(BatchSizeError::NotANumber(_))
        ));
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            BatchSizeError::NotANumber("x".into()).to_string(),
            BatchSizeError::NotPositive.to_string(),
            BatchSizeError::AboveMaximum { max: 20 }.to_string(),
            BatchSizeError::BelowMinimum {
                min: 2,
                variant: Variant::Swisslos,
            }
            .to_string(),
        ];
        assert_eq!(messages[3], "Swisslos needs at least 2 tips");
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
