/// How long the success view stays up before the dialog closes itself.
pub const SUCCESS_DISMISS_DELAY_MS: u32 = 3_000;

#[cfg(debug_assertions)]
pub fn webhook_url() -> Option<&'static str> {
    // Local mock receiver unless a real endpoint is baked in
    resolve_webhook(option_env!("RESERVATION_WEBHOOK_URL"), Some("http://localhost:3001/reservations"))
}

#[cfg(not(debug_assertions))]
pub fn webhook_url() -> Option<&'static str> {
    resolve_webhook(option_env!("RESERVATION_WEBHOOK_URL"), None)
}

/// A blank configured URL counts as unset.
fn resolve_webhook(configured: Option<&'static str>, fallback: Option<&'static str>) -> Option<&'static str> {
    configured.filter(|url| !url.trim().is_empty()).or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            resolve_webhook(Some("https://hooks.example.com/r"), Some("http://localhost:3001/reservations")),
            Some("https://hooks.example.com/r")
        );
    }

    #[test]
    fn test_blank_url_falls_back() {
        let fallback = Some("http://localhost:3001/reservations");
        assert_eq!(resolve_webhook(Some(""), fallback), fallback);
        assert_eq!(resolve_webhook(Some("   "), fallback), fallback);
        assert_eq!(resolve_webhook(Some(""), None), None);
        assert_eq!(resolve_webhook(None, None), None);
    }
}
