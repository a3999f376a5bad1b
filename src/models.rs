use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label (original casing) -> payload (greeting).
pub type Vocabulary = BTreeMap<String, String>;

/// Byte span of the matched query inside a suggestion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub start: usize,
    pub len: usize,
}

impl Highlight {
    /// Split a label into the parts before, inside and after the span.
    pub fn split<'a>(&self, label: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
        let end = self.start.checked_add(self.len)?;
        Some((
            label.get(..self.start)?,
            label.get(self.start..end)?,
            label.get(end..)?,
        ))
    }
}

/// A single autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

impl Suggestion {
    /// Wrap the highlighted span of the label in the given markers.
    pub fn marked(&self, open: &str, close: &str) -> String {
        match self.highlight.and_then(|h| h.split(&self.label)) {
            Some((pre, mid, post)) => format!("{}{}{}{}{}", pre, open, mid, close, post),
            None => self.label.clone(),
        }
    }
}

/// Outcome of a changed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryResult {
    /// Blank query. Suggestions should be hidden.
    Empty,

    /// One or more labels matched the prefix.
    Matches { suggestions: Vec<Suggestion> },

    /// Nothing matched. Offer to add `name` as a new entry.
    Create { name: String },
}

/// Result of a successful exact lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub label: String,
    pub title: String,
    pub message: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteConfig {
    /// Max suggestions per query. 0 = unlimited.
    #[serde(default)]
    pub max_suggestions: usize,

    /// Optional two column (label, payload) CSV file to seed the vocabulary with.
    #[serde(default)]
    pub seed_file: String,
}

/// User facing strings. `{label}` and `{name}` are substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_add_prompt")]
    pub add_prompt: String,
    #[serde(default = "default_add_entry")]
    pub add_entry: String,
    #[serde(default = "default_not_found")]
    pub not_found: String,
    #[serde(default = "default_greeting_title")]
    pub greeting_title: String,
}

fn default_add_prompt() -> String {
    "Masukkan salam untuk {label}".to_string()
}

fn default_add_entry() -> String {
    "Tambah \"{name}\"".to_string()
}

fn default_not_found() -> String {
    "Negara tidak ditemukan!".to_string()
}

fn default_greeting_title() -> String {
    "Kamu dari {label}!".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            add_prompt: default_add_prompt(),
            add_entry: default_add_entry(),
            not_found: default_not_found(),
            greeting_title: default_greeting_title(),
        }
    }
}

impl MessagesConfig {
    pub fn add_prompt(&self, label: &str) -> String {
        self.add_prompt.replace("{label}", label)
    }

    pub fn add_entry(&self, name: &str) -> String {
        self.add_entry.replace("{name}", name)
    }

    pub fn greeting_title(&self, label: &str) -> String {
        self.greeting_title.replace("{label}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_split() {
        let h = Highlight { start: 0, len: 2 };
        assert_eq!(h.split("Japan"), Some(("", "Ja", "pan")));

        let h = Highlight { start: 3, len: 2 };
        assert_eq!(h.split("Japan"), Some(("Jap", "an", "")));

        // Out of range or not on a char boundary.
        assert_eq!(Highlight { start: 4, len: 5 }.split("Japan"), None);
        assert_eq!(Highlight { start: 1, len: 1 }.split("Ödön"), None);
    }

    #[test]
    fn test_suggestion_marked() {
        let s = Suggestion {
            label: "Germany".to_string(),
            highlight: Some(Highlight { start: 0, len: 3 }),
        };
        assert_eq!(s.marked("[", "]"), "[Ger]many");

        let s = Suggestion {
            label: "Germany".to_string(),
            highlight: None,
        };
        assert_eq!(s.marked("[", "]"), "Germany");
    }

    #[test]
    fn test_query_result_json() {
        let r = QueryResult::Create {
            name: "zam".to_string(),
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v, serde_json::json!({"type": "create", "name": "zam"}));

        let v = serde_json::to_value(QueryResult::Empty).unwrap();
        assert_eq!(v, serde_json::json!({"type": "empty"}));
    }

    #[test]
    fn test_config_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [app]
            address = "0.0.0.0:9000"

            [vocabulary]
            Japan = "Konnichiwa"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.app.address, "0.0.0.0:9000");
        assert_eq!(cfg.autocomplete.max_suggestions, 0);
        assert_eq!(cfg.messages.not_found, "Negara tidak ditemukan!");
        assert_eq!(cfg.vocabulary.get("Japan").map(String::as_str), Some("Konnichiwa"));
    }

    #[test]
    fn test_messages() {
        let m = MessagesConfig::default();
        assert_eq!(m.add_prompt("Zambia"), "Masukkan salam untuk Zambia");
        assert_eq!(m.add_entry("zam"), "Tambah \"zam\"");
        assert_eq!(m.greeting_title("Italy"), "Kamu dari Italy!");
    }
}
