//! Application constants and configuration

pub const APP_NAME: &str = "Clipzy Waitlist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formspark form receiving waitlist signups
pub const WAITLIST_ENDPOINT: &str = "https://submit-form.com/ilyzrKoDA";

// User-facing messages
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email.";
pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
pub const MSG_SUCCESS_TITLE: &str = "You're on the list!";
pub const MSG_SUCCESS_BODY: &str = "We'll email you when invites roll out.";
pub const MSG_NO_SPAM: &str = "No spam. Unsubscribe anytime.";
