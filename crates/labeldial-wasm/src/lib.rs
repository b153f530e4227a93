//! WASM bindings for shipping label number extraction.
//!
//! A JS shell runs its own camera and text recognizer, then hands the
//! recognized text to these functions.

use wasm_bindgen::prelude::*;

use labeldial_core::models::config::{ExtractionConfig, LinksConfig};
use labeldial_core::{Candidate, Decision, LabelDialError};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Recognized text passed from JS, which may be any value.
fn input_text(input: &JsValue) -> Result<String, LabelDialError> {
    input.as_string().ok_or_else(|| {
        LabelDialError::InvalidInput(format!(
            "expected recognized text as a string, got {}",
            input.js_typeof().as_string().unwrap_or_default()
        ))
    })
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

/// Extract mobile numbers from recognized text, recipients first.
///
/// Returns an array of `{number, role}` objects.
#[wasm_bindgen(js_name = extractNumbers)]
pub fn extract_numbers(text: JsValue) -> Result<JsValue, JsValue> {
    let text = input_text(&text).map_err(to_js_error)?;
    to_js(&labeldial_core::extract(&text))
}

/// Extract and decide: `{outcome: "not_found" | "single" | "multiple", data}`.
#[wasm_bindgen]
pub fn decide(text: JsValue) -> Result<JsValue, JsValue> {
    let text = input_text(&text).map_err(to_js_error)?;
    to_js(&Decision::from(labeldial_core::extract(&text)))
}

/// Digits of copied text when they look like a phone number.
#[wasm_bindgen(js_name = clipboardNumber)]
pub fn clipboard_number(text: &str) -> Option<String> {
    labeldial_core::clipboard_number(text, &Default::default())
}

/// Strip formatting and a leading `00` from a number.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(number: &str) -> String {
    labeldial_core::format_number(number)
}

/// WhatsApp click-to-chat URL.
#[wasm_bindgen(js_name = whatsappLink)]
pub fn whatsapp_link(number: &str, message: Option<String>) -> Result<String, JsValue> {
    let config = LinksConfig::default();
    let message = message.unwrap_or_else(|| config.default_message.clone());
    labeldial_core::ActionLink::whatsapp(number, &message, &config)
        .map(|link| link.url)
        .map_err(to_js_error)
}

/// `tel:` URL.
#[wasm_bindgen(js_name = callLink)]
pub fn call_link(number: &str) -> Result<String, JsValue> {
    labeldial_core::ActionLink::call(number, &LinksConfig::default())
        .map(|link| link.url)
        .map_err(to_js_error)
}

/// The canned courier messages.
#[wasm_bindgen(js_name = quickMessages)]
pub fn quick_messages() -> js_sys::Array {
    labeldial_core::QUICK_MESSAGES
        .iter()
        .map(|m| JsValue::from_str(m))
        .collect()
}

/// Configurable extractor class for browser use.
#[wasm_bindgen]
pub struct NumberExtractor {
    config: ExtractionConfig,
    inner: labeldial_core::NumberExtractor,
}

#[wasm_bindgen]
impl NumberExtractor {
    /// Create an extractor with the default keywords.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            inner: labeldial_core::NumberExtractor::new(),
        }
    }

    /// Characters before a number searched for role keywords.
    #[wasm_bindgen(js_name = setContextWindow)]
    pub fn set_context_window(&mut self, window: usize) -> Result<(), JsValue> {
        self.apply(ExtractionConfig {
            context_window: window,
            ..self.config.clone()
        })
    }

    /// Replace the recipient keywords.
    ///
    /// Empty keywords are rejected and leave the extractor unchanged.
    #[wasm_bindgen(js_name = setRecipientKeywords)]
    pub fn set_recipient_keywords(&mut self, keywords: Vec<String>) -> Result<(), JsValue> {
        self.apply(ExtractionConfig {
            recipient_keywords: keywords,
            ..self.config.clone()
        })
    }

    /// Replace the sender keywords.
    #[wasm_bindgen(js_name = setSenderKeywords)]
    pub fn set_sender_keywords(&mut self, keywords: Vec<String>) -> Result<(), JsValue> {
        self.apply(ExtractionConfig {
            sender_keywords: keywords,
            ..self.config.clone()
        })
    }

    /// Extract candidates from text.
    pub fn extract(&self, text: JsValue) -> Result<JsValue, JsValue> {
        let text = input_text(&text).map_err(to_js_error)?;
        to_js(&self.inner.extract_all(&text))
    }

    /// Extract and decide.
    pub fn decide(&self, text: JsValue) -> Result<JsValue, JsValue> {
        let text = input_text(&text).map_err(to_js_error)?;
        to_js(&self.inner.decide(&text))
    }

    fn apply(&mut self, config: ExtractionConfig) -> Result<(), JsValue> {
        self.inner = labeldial_core::NumberExtractor::from_config(&config).map_err(to_js_error)?;
        self.config = config;
        Ok(())
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidates as JSON, for shells that prefer strings.
#[wasm_bindgen(js_name = extractNumbersJson)]
pub fn extract_numbers_json(text: &str) -> Result<String, JsValue> {
    let candidates: Vec<Candidate> = labeldial_core::extract(text);
    serde_json::to_string(&candidates).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_extract_numbers_json() {
        let json = extract_numbers_json("Mittente: 340 111 2222. Destinatario: 347 888 9999").unwrap();
        assert_eq!(
            json,
            r#"[{"number":"3478889999","role":"recipient"},{"number":"3401112222","role":"sender"}]"#
        );
    }

    #[wasm_bindgen_test]
    fn test_non_string_input_rejected() {
        assert!(extract_numbers(JsValue::from_f64(42.0)).is_err());
        assert!(decide(JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_links() {
        assert_eq!(call_link("333 123 4567").unwrap(), "tel:3331234567");
        assert!(whatsapp_link("123", None).is_err());
        assert_eq!(clipboard_number("+39 333 123 4567"), Some("393331234567".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_configurable_extractor() {
        let mut extractor = NumberExtractor::new();
        extractor.set_recipient_keywords(vec!["consegna".to_string()]).unwrap();
        let decision = extractor.decide(JsValue::from_str("Consegna 333 123 4567")).unwrap();
        let decision: serde_json::Value = serde_wasm_bindgen::from_value(decision).unwrap();
        assert_eq!(decision["outcome"], "single");
        assert_eq!(decision["data"]["number"], "3331234567");
        assert_eq!(decision["data"]["role"], "recipient");
    }

    #[wasm_bindgen_test]
    fn test_empty_keyword_setter_rejected() {
        let mut extractor = NumberExtractor::new();
        assert!(extractor.set_recipient_keywords(vec![String::new()]).is_err());
        assert!(extractor.set_sender_keywords(vec!["mitt.".to_string(), "".to_string()]).is_err());

        // the previous keywords are still in effect
        let candidates = extractor.extract(JsValue::from_str("Mittente: 340 111 2222")).unwrap();
        let candidates: serde_json::Value = serde_wasm_bindgen::from_value(candidates).unwrap();
        assert_eq!(candidates[0]["role"], "sender");
    }
}
