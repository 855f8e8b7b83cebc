//! Presentation of earnings results.
//!
//! This module renders a calculated result for people: a text breakdown and
//! the share message with its WhatsApp, email and copy-link actions.

mod breakdown;
mod share;

pub use breakdown::{BREAKDOWN_TITLE, EarningsBreakdown, describe_inputs};
pub use share::{
    LINK_PLACEHOLDER, ShareLinks, copy_failure_message, email_url, fill_link, share_message,
    whatsapp_url,
};
