use crate::error::BannerError;

/// FEC committee IDs are `C` followed by eight digits.
const COMMITTEE_ID_DIGITS: usize = 8;

/// Trim and uppercase a committee ID, then check its shape.
pub fn validate_committee_id(input: &str) -> Result<String, BannerError> {
    let id = input.trim().to_ascii_uppercase();
    let digits = id.strip_prefix('C').ok_or_else(|| {
        BannerError::InvalidInput(format!(
            "committee ID '{}' must start with 'C' (e.g. C00401224)",
            input.trim()
        ))
    })?;
    if digits.len() != COMMITTEE_ID_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(BannerError::InvalidInput(format!(
            "committee ID '{}' must be 'C' followed by {} digits",
            input.trim(),
            COMMITTEE_ID_DIGITS
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_committee_id() {
        assert_eq!(validate_committee_id("C00401224").unwrap(), "C00401224");
    }

    #[test]
    fn test_committee_id_is_normalized() {
        assert_eq!(validate_committee_id("  c00401224 ").unwrap(), "C00401224");
    }

    #[test]
    fn test_committee_id_wrong_prefix() {
        assert!(matches!(
            validate_committee_id("H8CA05035"),
            Err(BannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_committee_id_wrong_length() {
        assert!(validate_committee_id("C0040122").is_err());
        assert!(validate_committee_id("C004012245").is_err());
    }

    #[test]
    fn test_committee_id_non_digits() {
        assert!(validate_committee_id("C0040A224").is_err());
        assert!(validate_committee_id("").is_err());
    }
}
