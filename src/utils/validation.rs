use regex::Regex;

pub fn validate_email(email: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(email)
}

/// Canadian numbers: (902) 555-1234, 902-555-1234, 9025551234,
/// +1 902 555 1234.
pub fn validate_phone(phone: &str) -> bool {
    let re =
        Regex::new(r"^(\+?1)?[\s.-]?\(?([2-9][0-9]{2})\)?[\s.-]?([2-9][0-9]{2})[\s.-]?([0-9]{4})$")
            .unwrap();
    re.is_match(phone)
}

/// Millisecond timestamp plus a short base36 suffix; unique enough for a
/// single-node board.
pub fn generate_id() -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_email_shapes() {
        assert!(validate_email("mary@example.com"));
        assert!(validate_email("j.doe+jobs@upei.ca"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("spaces in@example.com"));
        assert!(!validate_email("missing@tld"));
    }

    #[test]
    fn accepts_canadian_phone_formats() {
        assert!(validate_phone("(902) 555-1234"));
        assert!(validate_phone("902-555-1234"));
        assert!(validate_phone("9025551234"));
        assert!(validate_phone("+1 902 555 1234"));
        assert!(!validate_phone("123"));
        assert!(!validate_phone("102-555-1234")); // area code cannot start with 0/1
    }

    #[test]
    fn ids_carry_a_timestamp_and_suffix() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 7);
        assert_ne!(generate_id(), generate_id());
    }
}
