//! Preference operations
//!
//! Preferences are declared once with a key, label and data type, then set
//! with the matching typed setter. The native SDK owns validation and sync.

use super::PushIoManager;
use crate::dispatch::Completion;
use crate::types::PreferenceType;
use serde_json::Value;

impl PushIoManager {
    /// Declares a preference to be set later with one of the typed setters.
    pub fn declare_preference(
        &self,
        key: &str,
        label: &str,
        kind: PreferenceType,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "declarePreference",
            vec![
                Value::from(key),
                Value::from(label),
                Value::from(kind.as_str()),
            ],
            completion,
        );
    }

    /// Gets all declared preferences and their current values.
    pub fn get_preferences(&self, completion: impl Into<Completion>) {
        self.forward("getPreferences", Vec::new(), completion);
    }

    /// Gets a single preference for the given key.
    pub fn get_preference(&self, key: &str, completion: impl Into<Completion>) {
        self.forward("getPreference", vec![Value::from(key)], completion);
    }

    pub fn set_string_preference(
        &self,
        key: &str,
        value: &str,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setStringPreference",
            vec![Value::from(key), Value::from(value)],
            completion,
        );
    }

    pub fn set_number_preference(&self, key: &str, value: f64, completion: impl Into<Completion>) {
        self.forward(
            "setNumberPreference",
            vec![Value::from(key), Value::from(value)],
            completion,
        );
    }

    pub fn set_boolean_preference(
        &self,
        key: &str,
        value: bool,
        completion: impl Into<Completion>,
    ) {
        self.forward(
            "setBooleanPreference",
            vec![Value::from(key), Value::from(value)],
            completion,
        );
    }

    /// Removes the preference data for the given key.
    pub fn remove_preference(&self, key: &str, completion: impl Into<Completion>) {
        self.forward("removePreference", vec![Value::from(key)], completion);
    }

    /// Removes all preference data.
    pub fn clear_all_preferences(&self, completion: impl Into<Completion>) {
        self.forward("clearAllPreferences", Vec::new(), completion);
    }
}
