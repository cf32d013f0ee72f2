//! Numeric parsing and range checks for the prediction form

use std::fmt;
use thiserror::Error;

/// Identifies one of the validated numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Bhk,
    Bathrooms,
    TotalSqft,
}

impl FieldId {
    /// All validated fields, in form order
    pub const ALL: [FieldId; 3] = [FieldId::Bhk, FieldId::Bathrooms, FieldId::TotalSqft];

    /// Element id of the input
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bhk => "bhk",
            Self::Bathrooms => "bath",
            Self::TotalSqft => "sqft",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("BHK must be between 1 and 10.")]
    BhkRange,
    #[error("Bathrooms must be between 1 and 5.")]
    BathroomsRange,
    #[error("Total Sqft must be between 200 and 10,000.")]
    SqftRange,
    #[error("Bathrooms cannot be more than BHK.")]
    BathroomsExceedBhk,
}

/// A rejected field together with the message shown under it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ValidationFailure {
    pub field: FieldId,
    pub kind: FailureKind,
}

impl ValidationFailure {
    pub fn new(field: FieldId, kind: FailureKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

pub const BHK_RANGE: (i64, i64) = (1, 10);
pub const BATHROOMS_RANGE: (i64, i64) = (1, 5);
pub const SQFT_RANGE: (f64, f64) = (200.0, 10_000.0);

/// Values that passed every check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedValues {
    pub bhk: u32,
    pub bath: u32,
    pub total_sqft: f64,
}

/// Run the range checks, then the cross-field check if all ranges held.
///
/// `None` stands for text that did not parse as a number.
pub fn check(
    bhk: Option<i64>,
    bath: Option<i64>,
    sqft: Option<f64>,
) -> Result<CheckedValues, Vec<ValidationFailure>> {
    let mut failures = Vec::new();

    let bhk = bhk.filter(|v| in_range(*v, BHK_RANGE));
    if bhk.is_none() {
        failures.push(ValidationFailure::new(FieldId::Bhk, FailureKind::BhkRange));
    }

    let bath = bath.filter(|v| in_range(*v, BATHROOMS_RANGE));
    if bath.is_none() {
        failures.push(ValidationFailure::new(
            FieldId::Bathrooms,
            FailureKind::BathroomsRange,
        ));
    }

    let sqft = sqft.filter(|v| *v >= SQFT_RANGE.0 && *v <= SQFT_RANGE.1);
    if sqft.is_none() {
        failures.push(ValidationFailure::new(
            FieldId::TotalSqft,
            FailureKind::SqftRange,
        ));
    }

    match (bhk, bath, sqft) {
        (Some(bhk), Some(bath), Some(total_sqft)) => {
            if bath > bhk {
                return Err(vec![ValidationFailure::new(
                    FieldId::Bathrooms,
                    FailureKind::BathroomsExceedBhk,
                )]);
            }
            // Both ranges start at 1, so the casts cannot wrap
            Ok(CheckedValues {
                bhk: bhk as u32,
                bath: bath as u32,
                total_sqft,
            })
        }
        _ => Err(failures),
    }
}

fn in_range(value: i64, (min, max): (i64, i64)) -> bool {
    value >= min && value <= max
}

/// Parse the leading base-10 integer of `input`.
///
/// Leading whitespace is skipped and an optional sign is accepted. Parsing
/// stops at the first non-digit, so `"3.7"` reads as 3 and `"12abc"` as 12.
/// Returns `None` when no digit follows.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the leading decimal floating-point number of `input`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and `Infinity`. Trailing text is ignored, so `"12.5ft"` reads
/// as 12.5. Returns `None` when no number starts the text.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if s[pos..].starts_with("Infinity") {
        let infinity = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -infinity } else { infinity });
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    s[..pos].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod int_prefix {
        use super::*;

        #[test]
        fn test_plain_number() {
            assert_eq!(parse_int_prefix("4"), Some(4));
        }

        #[test]
        fn test_truncates_decimal() {
            assert_eq!(parse_int_prefix("3.7"), Some(3));
        }

        #[test]
        fn test_ignores_trailing_text() {
            assert_eq!(parse_int_prefix("12abc"), Some(12));
        }

        #[test]
        fn test_skips_leading_whitespace_and_sign() {
            assert_eq!(parse_int_prefix("  -2"), Some(-2));
            assert_eq!(parse_int_prefix("+7"), Some(7));
        }

        #[test]
        fn test_not_a_number() {
            assert_eq!(parse_int_prefix(""), None);
            assert_eq!(parse_int_prefix("abc"), None);
            assert_eq!(parse_int_prefix("-"), None);
            assert_eq!(parse_int_prefix(".5"), None);
        }

        #[test]
        fn test_huge_value_saturates() {
            assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        }
    }

    mod float_prefix {
        use super::*;

        #[test]
        fn test_plain_and_fraction() {
            assert_eq!(parse_float_prefix("1200"), Some(1200.0));
            assert_eq!(parse_float_prefix("1200.5"), Some(1200.5));
            assert_eq!(parse_float_prefix(".5"), Some(0.5));
            assert_eq!(parse_float_prefix("5."), Some(5.0));
        }

        #[test]
        fn test_exponent() {
            assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
            assert_eq!(parse_float_prefix("2.5E-1"), Some(0.25));
        }

        #[test]
        fn test_dangling_exponent_is_ignored() {
            assert_eq!(parse_float_prefix("12e"), Some(12.0));
            assert_eq!(parse_float_prefix("12e+"), Some(12.0));
        }

        #[test]
        fn test_trailing_text() {
            assert_eq!(parse_float_prefix("  12.5ft"), Some(12.5));
        }

        #[test]
        fn test_infinity() {
            assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
            assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        }

        #[test]
        fn test_not_a_number() {
            assert_eq!(parse_float_prefix(""), None);
            assert_eq!(parse_float_prefix("."), None);
            assert_eq!(parse_float_prefix("sqft"), None);
            assert_eq!(parse_float_prefix("-e5"), None);
        }
    }

    mod checks {
        use super::*;

        fn kinds(result: Result<CheckedValues, Vec<ValidationFailure>>) -> Vec<FailureKind> {
            result.unwrap_err().into_iter().map(|f| f.kind).collect()
        }

        #[test]
        fn test_all_valid() {
            let values = check(Some(3), Some(2), Some(1200.0)).unwrap();
            assert_eq!(values.bhk, 3);
            assert_eq!(values.bath, 2);
            assert_eq!(values.total_sqft, 1200.0);
        }

        #[test]
        fn test_range_bounds_are_inclusive() {
            assert!(check(Some(1), Some(1), Some(200.0)).is_ok());
            assert!(check(Some(10), Some(5), Some(10_000.0)).is_ok());
        }

        #[test]
        fn test_every_field_reports_once() {
            assert_eq!(
                kinds(check(None, Some(0), Some(15_000.0))),
                vec![
                    FailureKind::BhkRange,
                    FailureKind::BathroomsRange,
                    FailureKind::SqftRange
                ]
            );
        }

        #[test]
        fn test_range_takes_precedence_over_cross_field() {
            assert_eq!(
                kinds(check(Some(8), Some(6), Some(1000.0))),
                vec![FailureKind::BathroomsRange]
            );
        }

        #[test]
        fn test_cross_field_skipped_when_other_field_fails() {
            assert_eq!(
                kinds(check(Some(2), Some(3), Some(100.0))),
                vec![FailureKind::SqftRange]
            );
        }

        #[test]
        fn test_cross_field_on_bathrooms() {
            let failures = check(Some(2), Some(3), Some(1000.0)).unwrap_err();
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].field, FieldId::Bathrooms);
            assert_eq!(failures[0].message(), "Bathrooms cannot be more than BHK.");
        }

        #[test]
        fn test_nan_sqft_fails() {
            assert_eq!(
                kinds(check(Some(2), Some(1), Some(f64::NAN))),
                vec![FailureKind::SqftRange]
            );
        }
    }

    #[test]
    fn test_messages_are_literal() {
        assert_eq!(FailureKind::BhkRange.to_string(), "BHK must be between 1 and 10.");
        assert_eq!(
            FailureKind::BathroomsRange.to_string(),
            "Bathrooms must be between 1 and 5."
        );
        assert_eq!(
            FailureKind::SqftRange.to_string(),
            "Total Sqft must be between 200 and 10,000."
        );
    }

    #[test]
    fn test_field_ids() {
        assert_eq!(FieldId::Bhk.id(), "bhk");
        assert_eq!(FieldId::Bathrooms.id(), "bath");
        assert_eq!(FieldId::TotalSqft.id(), "sqft");
        assert_eq!(FieldId::TotalSqft.to_string(), "sqft");
    }
}
