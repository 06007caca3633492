//! Recipient utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Remove common phone formatting characters, keeping digits and `+`
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a recipient looks like an email address
pub fn is_email_recipient(recipient: &str) -> bool {
    EMAIL_REGEX.is_match(recipient.trim())
}

/// Mask a recipient for logging (e.g., 316****5678, j***@example.com)
pub fn mask_recipient(recipient: &str) -> String {
    if is_email_recipient(recipient) {
        return mask_email(recipient.trim());
    }

    let normalized = normalize_phone_number(recipient);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "****".to_string(),
    }
}
