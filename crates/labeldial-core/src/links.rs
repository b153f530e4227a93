//! Clipboard detection and messaging/call links for extracted numbers.

use serde::Serialize;

use crate::error::LinkError;
use crate::extract::patterns::NON_DIGIT;
use crate::models::config::{ClipboardConfig, LinksConfig};

/// Canned messages a courier sends on arrival.
pub const QUICK_MESSAGES: &[&str] = &[
    "Ciao! Sono il corriere, sono sotto casa.",
    "Buongiorno, ho un pacco per lei. C'è qualcuno?",
    "Le ho lasciato il pacco in portineria.",
    "Purtroppo non ho trovato nessuno, ripasso domani.",
];

/// Get a quick message by index.
pub fn quick_message(index: usize) -> Result<&'static str, LinkError> {
    QUICK_MESSAGES
        .get(index)
        .copied()
        .ok_or(LinkError::UnknownQuickMessage(index))
}

/// Strip everything but digits and drop a leading `00` international prefix.
pub fn format_number(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "").into_owned();
    if let Some(rest) = digits.strip_prefix("00") {
        return rest.to_string();
    }
    digits
}

/// Digits of clipboard text if they plausibly form a phone number.
pub fn clipboard_number(text: &str, config: &ClipboardConfig) -> Option<String> {
    let digits = NON_DIGIT.replace_all(text, "");
    (config.min_digits..=config.max_digits)
        .contains(&digits.len())
        .then(|| digits.into_owned())
}

/// Kind of action a link starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    WhatsApp,
    Call,
}

/// A URL that starts a chat or a call towards a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub kind: LinkKind,
    /// Normalized number the link targets.
    pub number: String,
    pub url: String,
}

impl ActionLink {
    /// Click-to-chat link carrying a prefilled message.
    pub fn whatsapp(number: &str, message: &str, config: &LinksConfig) -> Result<Self, LinkError> {
        let number = dialable(number, config)?;
        let url = format!(
            "{}{}?text={}",
            config.whatsapp_base_url,
            number,
            urlencoding::encode(message)
        );
        Ok(Self {
            kind: LinkKind::WhatsApp,
            number,
            url,
        })
    }

    /// `tel:` link.
    pub fn call(number: &str, config: &LinksConfig) -> Result<Self, LinkError> {
        let number = dialable(number, config)?;
        let url = format!("tel:{}", number);
        Ok(Self {
            kind: LinkKind::Call,
            number,
            url,
        })
    }
}

fn dialable(raw: &str, config: &LinksConfig) -> Result<String, LinkError> {
    let number = format_number(raw);
    if number.is_empty() || number.len() < config.min_number_length {
        return Err(LinkError::InvalidNumber(raw.to_string()));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number("+39 333 123 4567"), "393331234567");
        assert_eq!(format_number("0039 333-123-4567"), "393331234567");
        assert_eq!(format_number("333.123.4567"), "3331234567");
        assert_eq!(format_number("abc"), "");
    }

    #[test]
    fn test_clipboard_number() {
        let config = ClipboardConfig::default();
        assert_eq!(
            clipboard_number("Chiamami al +39 333 123 4567", &config),
            Some("393331234567".to_string())
        );
        assert_eq!(clipboard_number("CAP 10100", &config), None);
        assert_eq!(clipboard_number("IBAN IT60X0542811101000000123456", &config), None);
        assert_eq!(clipboard_number("", &config), None);
    }

    #[test]
    fn test_whatsapp_link() {
        let link = ActionLink::whatsapp("333 123 4567", "Sono sotto casa", &LinksConfig::default()).unwrap();
        assert_eq!(link.kind, LinkKind::WhatsApp);
        assert_eq!(link.number, "3331234567");
        assert_eq!(link.url, "https://wa.me/3331234567?text=Sono%20sotto%20casa");
    }

    #[test]
    fn test_call_link() {
        let link = ActionLink::call("0039 333 123 4567", &LinksConfig::default()).unwrap();
        assert_eq!(link.url, "tel:393331234567");
    }

    #[test]
    fn test_short_number_rejected() {
        let config = LinksConfig::default();
        assert!(matches!(
            ActionLink::call("1234567", &config),
            Err(LinkError::InvalidNumber(_))
        ));
        assert!(matches!(
            ActionLink::whatsapp("", "ciao", &config),
            Err(LinkError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_quick_message() {
        assert_eq!(quick_message(2).unwrap(), "Le ho lasciato il pacco in portineria.");
        assert!(matches!(quick_message(9), Err(LinkError::UnknownQuickMessage(9))));
    }
}
