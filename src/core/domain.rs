use std::env;
use serde::{Deserialize, Serialize};
use crate::core::messages::Locale;

// Identifiable defines the key under which an object shows up in domain events
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub locale: Locale,
    // reject a second return of the same loan instead of silently re-applying it
    pub strict_returns: bool,
    // reject books with a known isbn and users with a known id or email
    pub enforce_unique_keys: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            locale: Locale::Russian,
            strict_returns: true,
            enforce_unique_keys: false,
        }
    }

    pub fn from_env() -> Self {
        let defaults = Configuration::new(
            env::var("LIBRARY_BRANCH").unwrap_or_else(|_| "main".to_string()).as_str());
        Configuration {
            locale: env::var("LIBRARY_LOCALE").map(Locale::from).unwrap_or(defaults.locale),
            strict_returns: env_flag("LIBRARY_STRICT_RETURNS").unwrap_or(defaults.strict_returns),
            enforce_unique_keys: env_flag("LIBRARY_UNIQUE_KEYS").unwrap_or(defaults.enforce_unique_keys),
            ..defaults
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_strict_returns(mut self, strict_returns: bool) -> Self {
        self.strict_returns = strict_returns;
        self
    }

    pub fn with_unique_keys(mut self, enforce_unique_keys: bool) -> Self {
        self.enforce_unique_keys = enforce_unique_keys;
        self
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|val| parse_flag(val.as_str()))
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
