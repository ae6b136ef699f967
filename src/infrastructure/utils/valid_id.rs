use crate::errors::AppError;

/// Parses a post id path segment. Only plain decimal digits are accepted.
pub fn valid_post_id(id: &str) -> Result<u32, AppError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidInput(format!("Invalid post id: {}", id)));
    }
    id.parse::<u32>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid post id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers_only() {
        assert_eq!(valid_post_id("3").unwrap(), 3);
        assert!(valid_post_id("3abc").is_err());
        assert!(valid_post_id("+3").is_err());
        assert!(valid_post_id("").is_err());
        assert!(valid_post_id("99999999999").is_err());
    }
}
