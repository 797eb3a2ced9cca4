use rand::Rng;

/// Opaque identifier for a stored week, 8 random bytes hex-encoded.
pub fn new_record_id() -> String {
    let bytes: [u8; 8] = rand::rng().random();
    hex::encode(bytes)
}

/// Signed rendering used for profit, "+0" rather than "0".
pub fn format_signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_hex_and_unique() {
        let id = new_record_id();

        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, new_record_id());
    }

    #[test]
    fn test_format_signed_keeps_explicit_sign() {
        assert_eq!(format_signed(20), "+20");
        assert_eq!(format_signed(-20), "-20");
        assert_eq!(format_signed(0), "+0");
    }
}
