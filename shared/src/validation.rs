use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::catalog::TechTag;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern")
});

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::new("invalid_email"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(char::is_whitespace) {
        return Err(ValidationError::new("invalid_email"));
    }
    Ok(())
}

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Accepts absolute web URLs, `mailto:` links and same-page anchors.
pub fn validate_link_url(url: &str) -> Result<(), ValidationError> {
    let valid = if let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        !rest.is_empty() && !rest.contains(char::is_whitespace)
    } else if let Some(address) = url.strip_prefix("mailto:") {
        validate_email(address).is_ok()
    } else {
        url.starts_with('#')
    };

    if !valid {
        return Err(ValidationError::new("invalid_link_url"));
    }
    Ok(())
}

/// App schemes a contact card may deep-link into.
const MESSAGING_SCHEMES: [&str; 6] = ["whatsapp://", "tg://", "signal://", "skype:", "sms:", "tel:"];

/// Like [`validate_link_url`], plus deep links into messaging apps.
pub fn validate_messaging_url(url: &str) -> Result<(), ValidationError> {
    let deep_link = MESSAGING_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace));
    if deep_link {
        return Ok(());
    }
    validate_link_url(url).map_err(|_| ValidationError::new("invalid_messaging_url"))
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("empty_title"));
    }
    Ok(())
}

pub fn validate_tech_tags(tags: &[TechTag]) -> Result<(), ValidationError> {
    if tags.is_empty() {
        return Err(ValidationError::new("missing_tech_tags"));
    }
    for tag in tags {
        validate_title(&tag.name)?;
        validate_hex_color(tag.color.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Color;

    #[test]
    fn test_hex_colors() {
        assert!(validate_hex_color("#3B82F6").is_ok());
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("3B82F6").is_err());
        assert!(validate_hex_color("#3B82F").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_link_urls() {
        assert!(validate_link_url("https://github.com").is_ok());
        assert!(validate_link_url("mailto:someone@example.com").is_ok());
        assert!(validate_link_url("#projects").is_ok());
        assert!(validate_link_url("mailto:nobody").is_err());
        assert!(validate_link_url("ftp://example.com").is_err());
        assert!(validate_link_url("https://").is_err());
    }

    #[test]
    fn test_messaging_deep_links() {
        assert!(validate_messaging_url("whatsapp://send?phone=919999999999").is_ok());
        assert!(validate_messaging_url("tg://resolve?domain=someone").is_ok());
        assert!(validate_messaging_url("sms:+15550100").is_ok());
        assert!(validate_messaging_url("https://wa.me/919999999999").is_ok());
        assert_eq!(validate_messaging_url("whatsapp://").unwrap_err().code, "invalid_messaging_url");
        assert!(validate_messaging_url("javascript:alert(1)").is_err());
        assert!(validate_link_url("whatsapp://send?phone=919999999999").is_err());
    }

    #[test]
    fn test_tech_tags_require_one_entry() {
        assert_eq!(validate_tech_tags(&[]).unwrap_err().code, "missing_tech_tags");

        let tags = vec![TechTag { name: "Rust".to_string(), color: Color::new("#DEA584") }];
        assert!(validate_tech_tags(&tags).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("aniket@example.com").is_ok());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("aniket@localhost").is_err());
    }
}
