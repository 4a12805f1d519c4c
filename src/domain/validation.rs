use super::DomainError;

pub const MISSING_FEEDBACK_AND_RATING: &str = "Both feedback and rating parameters are required";
pub const MISSING_FEEDBACK: &str = "Feedback parameter is required";
pub const MISSING_RATING: &str = "Rating parameter is required";
pub const INVALID_RATING: &str = "Rating must be a valid number";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 5";
pub const RATING_NOT_WHOLE: &str = "Rating must be a whole number";

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// A user rating known to lie in `[1, 5]`. May be fractional.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The rating as a contract `uint8`, rejecting fractional values
    pub fn to_whole(&self) -> Result<u8, DomainError> {
        if self.0.fract() != 0.0 {
            return Err(DomainError::Validation(RATING_NOT_WHOLE.to_string()));
        }
        Ok(self.0 as u8)
    }
}

/// Treat absent and empty query values the same way
pub fn require_param<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::Validation(message.to_string())),
    }
}

/// Parse a rating from its query-string form.
///
/// Surrounding whitespace is ignored and a blank value reads as 0, which then
/// fails the range check rather than the number check. Unsigned integers with
/// a `0x`, `0b` or `0o` prefix are read in that radix.
pub fn parse_rating(raw: &str) -> Result<Rating, DomainError> {
    let trimmed = raw.trim();

    let parsed = if trimmed.is_empty() {
        Some(0.0)
    } else {
        match radix_literal(trimmed) {
            // from_str_radix would otherwise accept "0x+4"
            Some((_, digits)) if digits.starts_with('+') => None,
            Some((radix, digits)) => u64::from_str_radix(digits, radix).ok().map(|v| v as f64),
            None => trimmed.parse::<f64>().ok().filter(|v| !v.is_nan()),
        }
    };
    let value = parsed.ok_or_else(|| DomainError::Validation(INVALID_RATING.to_string()))?;

    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(DomainError::Validation(RATING_OUT_OF_RANGE.to_string()));
    }

    Ok(Rating(value))
}

// Split "0x1f" into (16, "1f"). Signs are not allowed in front of a prefix.
fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let radix = match s.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0b" => 2,
        "0o" => 8,
        _ => return None,
    };
    Some((radix, &s[2..]))
}
