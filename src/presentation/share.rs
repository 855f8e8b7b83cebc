//! Share message and share links.
//!
//! A result can be shared three ways: a WhatsApp deep link, an email compose
//! link, or by copying the page URL. The first two carry the share message
//! with its `[link]` placeholder replaced by the page URL.

use serde::{Deserialize, Serialize};

use crate::calculation::format_pounds;
use crate::models::EarningsResult;

/// Placeholder in the share message that is replaced by the page URL.
pub const LINK_PLACEHOLDER: &str = "[link]";

/// Base of the WhatsApp share deep link.
const WHATSAPP_BASE_URL: &str = "https://wa.me/?text=";

/// Builds the share message for a result.
///
/// # Example
///
/// ```
/// use driver_earnings::calculation::compute;
/// use driver_earnings::models::{CarCategory, EarningsInput, WeeklyHours};
/// use driver_earnings::presentation::share_message;
///
/// let input = EarningsInput::new(WeeklyHours::new(40).unwrap(), vec![], false, CarCategory::Normal);
/// assert_eq!(
///     share_message(&compute(&input)),
///     "I just estimated my London Uber driver earnings: £350/week after costs. Try it yourself: [link]"
/// );
/// ```
pub fn share_message(result: &EarningsResult) -> String {
    format!(
        "I just estimated my London Uber driver earnings: {}/week after costs. Try it yourself: {}",
        format_pounds(result.net_weekly),
        LINK_PLACEHOLDER
    )
}

/// Replaces the first `[link]` placeholder in a message with a URL.
pub fn fill_link(message: &str, page_url: &str) -> String {
    message.replacen(LINK_PLACEHOLDER, page_url, 1)
}

/// Builds the WhatsApp deep link for a message.
pub fn whatsapp_url(message: &str, page_url: &str) -> String {
    format!(
        "{}{}",
        WHATSAPP_BASE_URL,
        urlencoding::encode(&fill_link(message, page_url))
    )
}

/// Builds the `mailto:` link for a message.
pub fn email_url(subject: &str, message: &str, page_url: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&fill_link(message, page_url))
    )
}

/// Text shown when the client cannot write the page URL to the clipboard.
pub fn copy_failure_message(page_url: &str) -> String {
    format!("Could not copy link. Please copy manually: {}", page_url)
}

/// The three share actions for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    /// The share message, still holding its `[link]` placeholder.
    pub message: String,
    /// WhatsApp deep link.
    pub whatsapp_url: String,
    /// Email compose link.
    pub email_url: String,
    /// The page URL to copy to the clipboard.
    pub copy_link: String,
    /// Fallback text for when the clipboard write fails.
    pub copy_failure_message: String,
}

impl ShareLinks {
    /// Builds every share action for a result.
    pub fn new(result: &EarningsResult, page_url: &str, email_subject: &str) -> Self {
        let message = share_message(result);

        Self {
            whatsapp_url: whatsapp_url(&message, page_url),
            email_url: email_url(email_subject, &message, page_url),
            copy_link: page_url.to_string(),
            copy_failure_message: copy_failure_message(page_url),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::models::{CarCategory, EarningsInput, WeeklyHours};
    use rust_decimal::Decimal;

    const PAGE_URL: &str = "https://earnings.example/calc";
    const SUBJECT: &str = "My London Uber Driver Earnings Estimate";

    fn baseline_result() -> EarningsResult {
        compute(&EarningsInput::new(
            WeeklyHours::new(40).unwrap(),
            vec![],
            false,
            CarCategory::Normal,
        ))
    }

    #[test]
    fn test_share_message_contains_net_weekly() {
        let message = share_message(&baseline_result());
        assert!(message.contains("£350/week after costs"));
        assert!(message.ends_with(LINK_PLACEHOLDER));
    }

    #[test]
    fn test_share_message_keeps_pence_when_present() {
        let result = compute(&EarningsInput::new(
            WeeklyHours::new(60).unwrap(),
            vec![Decimal::new(12, 1), Decimal::new(15, 1)],
            true,
            CarCategory::Executive,
        ));
        assert!(share_message(&result).contains("£1514.75/week after costs"));
    }

    #[test]
    fn test_fill_link_replaces_first_placeholder_only() {
        assert_eq!(fill_link("see [link] and [link]", "u"), "see u and [link]");
        assert_eq!(fill_link("no placeholder", "u"), "no placeholder");
    }

    #[test]
    fn test_whatsapp_url_is_encoded() {
        let url = whatsapp_url("Try it: [link]", PAGE_URL);
        assert_eq!(
            url,
            "https://wa.me/?text=Try%20it%3A%20https%3A%2F%2Fearnings.example%2Fcalc"
        );
    }

    #[test]
    fn test_email_url_is_encoded() {
        let url = email_url("Hi there", "Try it: [link]", PAGE_URL);
        assert_eq!(
            url,
            "mailto:?subject=Hi%20there&body=Try%20it%3A%20https%3A%2F%2Fearnings.example%2Fcalc"
        );
    }

    #[test]
    fn test_pound_sign_is_percent_encoded() {
        let links = ShareLinks::new(&baseline_result(), PAGE_URL, SUBJECT);
        assert!(links.whatsapp_url.contains("%C2%A3350%2Fweek"));
        assert!(!links.whatsapp_url.contains(LINK_PLACEHOLDER));
    }

    #[test]
    fn test_share_links_for_result() {
        let links = ShareLinks::new(&baseline_result(), PAGE_URL, SUBJECT);

        assert!(links.message.contains(LINK_PLACEHOLDER));
        assert!(links.email_url.starts_with(
            "mailto:?subject=My%20London%20Uber%20Driver%20Earnings%20Estimate&body="
        ));
        assert_eq!(links.copy_link, PAGE_URL);
        assert_eq!(
            links.copy_failure_message,
            "Could not copy link. Please copy manually: https://earnings.example/calc"
        );
    }
}
