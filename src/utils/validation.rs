//! Centralized validation and helper functions.

use crate::core::alphabet::Alphabet;
use crate::core::error::MatchError;

/// Maximum number of records loaded per invocation (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len()).is_some() {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Parse an alphabet given on the command line.
///
/// Accepts `dna` (case-insensitive) for [`Alphabet::dna`], otherwise every
/// character of the string is a symbol.
///
/// # Errors
///
/// Returns `MatchError::InvalidAlphabet` for an empty or non-ASCII string, or
/// `MatchError::AlphabetTooLarge` for too many distinct symbols.
///
/// # Examples
///
/// ```
/// use spectral_match::utils::validation::parse_alphabet;
///
/// assert_eq!(parse_alphabet("dna").unwrap().len(), 5);
/// assert_eq!(parse_alphabet("ACGU").unwrap().len(), 4);
/// assert!(parse_alphabet("").is_err());
/// ```
pub fn parse_alphabet(symbols: &str) -> Result<Alphabet, MatchError> {
    let trimmed = symbols.trim();
    if trimmed.is_empty() || !trimmed.is_ascii() {
        return Err(MatchError::InvalidAlphabet(symbols.to_string()));
    }
    if trimmed.eq_ignore_ascii_case("dna") {
        return Ok(Alphabet::dna());
    }
    Alphabet::new(trimmed.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_parse_alphabet() {
        let dna = parse_alphabet("DNA").unwrap();
        assert!(dna.covers(b"ACGTN"));

        let custom = parse_alphabet(" AB ").unwrap();
        assert_eq!(custom.len(), 2);
        assert!(!custom.covers(b" "));

        assert!(matches!(parse_alphabet("   "), Err(MatchError::InvalidAlphabet(_))));
        assert!(matches!(parse_alphabet("ÅB"), Err(MatchError::InvalidAlphabet(_))));
    }

    #[test]
    fn test_parse_alphabet_too_large() {
        let printable: String = (b'!'..=b'~').map(char::from).collect();
        assert_eq!(
            parse_alphabet(&printable),
            Err(MatchError::AlphabetTooLarge { size: 94, max: 64 })
        );
    }
}
