//! Field-level input validation.
//!
//! One module per entity, mirroring the endpoints that accept bodies. Each
//! function checks a typed DTO and returns the accumulated per-field rule
//! violations, which the error layer renders as the `errors` map of a 400
//! response. Validation always runs before any persistence attempt.

pub mod assignature;
pub mod course;
pub mod institution;
pub mod item;
pub mod person;
pub mod post;
pub mod storage;
pub mod tag;

/// Character-count based length check (so accented names count correctly).
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

/// `#RGB` or `#RRGGBB`.
pub(crate) fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

pub(crate) fn is_valid_username(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub(crate) fn is_valid_filename(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

pub(crate) fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|u| u.has_host())
        .unwrap_or(false)
}

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// 8-128 characters with at least one lowercase letter, one uppercase letter,
/// one digit and one special character.
pub(crate) fn is_strong_password(value: &str) -> bool {
    let len = char_len(value);
    len >= 8
        && len <= 128
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_emails_and_rejects_malformed_ones() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@nodot"));
        assert!(!is_valid_email("al ice@example.com"));
    }

    #[test]
    fn hex_colors_require_hash_and_three_or_six_digits() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#3498db"));
        assert!(!is_valid_hex_color("3498db"));
        assert!(!is_valid_hex_color("#3498"));
        assert!(!is_valid_hex_color("#zzzzzz"));
    }

    #[test]
    fn password_strength_requires_all_character_classes() {
        assert!(is_strong_password("Str0ng!pass"));
        assert!(!is_strong_password("alllowercase1!"));
        assert!(!is_strong_password("ALLUPPERCASE1!"));
        assert!(!is_strong_password("NoDigits!!"));
        assert!(!is_strong_password("NoSpecial123"));
        assert!(!is_strong_password("Sh0r!t"));
    }
}
