//! Allow-list validated option store.
//!
//! The settings page saves feature toggles one option at a time. Every save
//! request is validated in full — capability, session token, identifier
//! against the registered allow-list, value presence — before the store is
//! touched, so a rejected request can never leave a partial write behind.
//! Re-saving the same value is idempotent.

mod error;

pub use error::SaveError;

use std::collections::HashMap;

/// One stored option.
///
/// `autoload` marks options the host should load eagerly on every page view
/// rather than on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOption {
    pub value: String,
    pub autoload: bool,
}

/// An incoming save request, exactly as the transport delivered it. Absent
/// fields stay `None`; validation turns them into structured errors.
#[derive(Debug, Clone)]
pub struct SaveRequest<'a> {
    /// Whether the caller holds the manage-settings capability.
    pub authorized: bool,
    pub token: Option<&'a str>,
    pub option_id: Option<&'a str>,
    pub value: Option<&'a str>,
    pub autoload: bool,
}

/// A successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveResponse {
    pub message: String,
}

/// In-memory option store with a registered allow-list.
///
/// Options must be registered before they can be saved; registration also
/// seeds the default value. The session `token` plays the role of a
/// nonce: requests must echo it back.
#[derive(Debug, Clone)]
pub struct SettingStore {
    token: String,
    options: HashMap<String, StoredOption>,
}

impl SettingStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), options: HashMap::new() }
    }

    /// Token the settings page must echo back with each save.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Adds `id` to the allow-list with its default value.
    ///
    /// Re-registering an id resets it to the default.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        default: impl Into<String>,
        autoload: bool,
    ) {
        self.options
            .insert(id.into(), StoredOption { value: default.into(), autoload });
    }

    pub fn get(&self, id: &str) -> Option<&StoredOption> {
        self.options.get(id)
    }

    /// Validates and applies one save request.
    ///
    /// Validation order: capability, token, identifier presence, allow-list
    /// membership, value presence. The store is written only after every
    /// check passes.
    pub fn save(&mut self, req: &SaveRequest<'_>) -> Result<SaveResponse, SaveError> {
        if !req.authorized {
            return Err(SaveError::Unauthorized);
        }
        match req.token {
            Some(t) if t == self.token => {}
            _ => return Err(SaveError::InvalidToken),
        }
        let id = req.option_id.ok_or(SaveError::MissingOptionId)?;
        if !self.options.contains_key(id) {
            return Err(SaveError::UnknownOption(id.to_string()));
        }
        let value = req.value.ok_or(SaveError::MissingValue)?;

        self.options
            .insert(id.to_string(), StoredOption { value: value.to_string(), autoload: req.autoload });

        Ok(SaveResponse { message: format!("Option {id:?} saved.") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingStore {
        let mut s = SettingStore::new("session-token");
        s.register("lazy_load", "off", true);
        s.register("chart_palette", "default", false);
        s
    }

    fn request<'a>(option_id: Option<&'a str>, value: Option<&'a str>) -> SaveRequest<'a> {
        SaveRequest {
            authorized: true,
            token: Some("session-token"),
            option_id,
            value,
            autoload: false,
        }
    }

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn save_updates_value_and_autoload() {
        let mut s = store();
        let mut req = request(Some("lazy_load"), Some("on"));
        req.autoload = true;

        let resp = s.save(&req).unwrap();
        assert!(resp.message.contains("lazy_load"));
        assert_eq!(
            s.get("lazy_load"),
            Some(&StoredOption { value: "on".to_string(), autoload: true })
        );
    }

    #[test]
    fn resave_of_same_value_is_idempotent() {
        let mut s = store();
        let req = request(Some("chart_palette"), Some("dark"));
        s.save(&req).unwrap();
        s.save(&req).unwrap();
        assert_eq!(s.get("chart_palette").unwrap().value, "dark");
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn unauthorized_caller_is_rejected() {
        let mut s = store();
        let mut req = request(Some("lazy_load"), Some("on"));
        req.authorized = false;
        assert_eq!(s.save(&req), Err(SaveError::Unauthorized));
    }

    #[test]
    fn wrong_or_missing_token_is_rejected() {
        let mut s = store();
        let mut req = request(Some("lazy_load"), Some("on"));
        req.token = Some("forged");
        assert_eq!(s.save(&req), Err(SaveError::InvalidToken));
        req.token = None;
        assert_eq!(s.save(&req), Err(SaveError::InvalidToken));
    }

    #[test]
    fn missing_identifier_is_rejected() {
        let mut s = store();
        assert_eq!(s.save(&request(None, Some("on"))), Err(SaveError::MissingOptionId));
    }

    #[test]
    fn unregistered_identifier_is_rejected() {
        let mut s = store();
        assert_eq!(
            s.save(&request(Some("evil_option"), Some("on"))),
            Err(SaveError::UnknownOption("evil_option".to_string()))
        );
    }

    #[test]
    fn missing_value_is_rejected() {
        let mut s = store();
        assert_eq!(s.save(&request(Some("lazy_load"), None)), Err(SaveError::MissingValue));
    }

    #[test]
    fn rejected_request_leaves_store_unchanged() {
        let mut s = store();
        s.save(&request(Some("lazy_load"), Some("on"))).unwrap();

        // Fails at the value check, after the id was already validated.
        let _ = s.save(&request(Some("lazy_load"), None)).unwrap_err();
        assert_eq!(s.get("lazy_load").unwrap().value, "on");
    }

    #[test]
    fn error_messages_are_distinct() {
        let errors = [
            SaveError::Unauthorized,
            SaveError::InvalidToken,
            SaveError::MissingOptionId,
            SaveError::UnknownOption("x".to_string()),
            SaveError::MissingValue,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
