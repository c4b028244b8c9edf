//! Partial masking rules for email, phone and name values.

use super::PiiField;
use crate::error::{GenError, Result};

const EMAIL_KEEP: usize = 2;
const PHONE_KEEP_HEAD: usize = 4;
const PHONE_KEEP_TAIL: usize = 2;
const PHONE_MASK: &str = "******";
const MIN_PHONE_LEN: usize = 6;

/// `john.doe@example.com` → `jo***@example.com`
pub fn mask_email(email: &str) -> Result<String> {
    let (local, domain) = email.split_once('@').ok_or(GenError::Unmaskable {
        field: PiiField::Email,
        reason: "missing '@'",
    })?;
    if domain.contains('@') {
        return Err(GenError::Unmaskable {
            field: PiiField::Email,
            reason: "more than one '@'",
        });
    }
    let head: String = local.chars().take(EMAIL_KEEP).collect();
    Ok(format!("{}***@{}", head, domain))
}

/// `+1-555-123-4567` → `+1-5******67`
pub fn mask_phone(phone: &str) -> Result<String> {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < MIN_PHONE_LEN {
        return Err(GenError::Unmaskable {
            field: PiiField::Phone,
            reason: "shorter than 6 characters",
        });
    }
    let head: String = chars[..PHONE_KEEP_HEAD].iter().collect();
    let tail: String = chars[chars.len() - PHONE_KEEP_TAIL..].iter().collect();
    Ok(format!("{}{}{}", head, PHONE_MASK, tail))
}

/// `Alice Smith` → `Alice ***`, single tokens become `***`
pub fn mask_name(name: &str) -> String {
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => format!("{} ***", first),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ab@example.com").unwrap(), "ab***@example.com");
        assert_eq!(
            mask_email("john.doe@example.com").unwrap(),
            "jo***@example.com"
        );
        assert_eq!(mask_email("x@test.com").unwrap(), "x***@test.com");
    }

    #[test]
    fn test_mask_email_without_at() {
        let err = mask_email("not-an-email").unwrap_err();
        assert!(matches!(
            err,
            GenError::Unmaskable {
                field: PiiField::Email,
                ..
            }
        ));
    }

    #[test]
    fn test_mask_email_with_several_ats() {
        let err = mask_email("a@b@c.com").unwrap_err();
        assert!(matches!(
            err,
            GenError::Unmaskable {
                field: PiiField::Email,
                reason: "more than one '@'",
            }
        ));
    }

    #[test]
    fn test_unmaskable_message_omits_value() {
        let message = mask_phone("91-1").unwrap_err().to_string();
        assert_eq!(message, "cannot mask phone: shorter than 6 characters");
        assert!(!message.contains("91-1"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+1-555-123-4567").unwrap(), "+1-5******67");
        // Head and tail overlap on the shortest accepted input
        assert_eq!(mask_phone("123456").unwrap(), "1234******56");
    }

    #[test]
    fn test_mask_phone_too_short() {
        assert!(mask_phone("12345").is_err());
        assert!(mask_phone("").is_err());
    }

    #[test]
    fn test_mask_phone_counts_chars_not_bytes() {
        assert_eq!(mask_phone("☎☎☎☎☎☎").unwrap(), "☎☎☎☎******☎☎");
    }

    #[test]
    fn test_mask_name() {
        assert_eq!(mask_name("Alice Smith"), "Alice ***");
        assert_eq!(mask_name("Alice J. Smith"), "Alice ***");
        assert_eq!(mask_name("Cher"), "***");
        assert_eq!(mask_name(""), "***");
    }
}
