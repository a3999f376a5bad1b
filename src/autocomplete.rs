use crate::{
    models::{Highlight, QueryResult, Suggestion, Vocabulary},
    trie::{fold, PrefixIndex},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),
}

/// Uppercase the first character of a name and leave the rest untouched.
pub fn canonicalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Locate the first case-insensitive, literal occurrence of `query` in `label`.
/// The span is in bytes of `label` and always falls on char boundaries.
pub fn highlight(label: &str, query: &str) -> Option<Highlight> {
    let needle: Vec<char> = fold(query).collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in label.char_indices() {
        let mut want = needle.iter();

        for (i, c) in label[start..].char_indices() {
            // Compare the lowercase expansion of this char with the next needle chars.
            let mut ok = true;
            for lc in c.to_lowercase() {
                match want.next() {
                    Some(&w) if w == lc => {}
                    _ => {
                        ok = false;
                        break;
                    }
                }
            }
            if !ok {
                break;
            }

            if want.len() == 0 {
                return Some(Highlight {
                    start,
                    len: i + c.len_utf8(),
                });
            }
        }
    }

    None
}

/// A new entry waiting for its payload. Returned by [`Autocomplete::request_entry`]
/// so that the caller can ask the user for a payload without blocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    label: String,
}

impl PendingEntry {
    /// The canonical label the entry will be stored under.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Autocomplete controller. Owns the vocabulary and the prefix index built from it.
pub struct Autocomplete {
    vocab: Vocabulary,
    index: PrefixIndex,
    max_suggestions: usize,
}

impl Autocomplete {
    /// Build the index from a seed vocabulary. `max_suggestions` of 0 means unlimited.
    pub fn new(vocab: Vocabulary, max_suggestions: usize) -> Self {
        let mut index = PrefixIndex::new();
        for label in vocab.keys() {
            index.insert(label);
        }

        if index.is_empty() {
            log::warn!("vocabulary is empty");
        }
        log::debug!("indexed {} labels ({} nodes)", index.len(), index.node_count());

        Self {
            vocab,
            index,
            max_suggestions,
        }
    }

    /// Run a (raw, untrimmed) query against the index.
    pub fn query(&self, raw: &str) -> QueryResult {
        let q = raw.trim();
        if q.is_empty() {
            return QueryResult::Empty;
        }

        let mut labels = self.index.search(q);
        if labels.is_empty() {
            return QueryResult::Create {
                name: q.to_string(),
            };
        }

        if self.max_suggestions > 0 {
            labels.truncate(self.max_suggestions);
        }

        let suggestions = labels
            .into_iter()
            .map(|label| Suggestion {
                highlight: highlight(&label, q),
                label,
            })
            .collect();

        QueryResult::Matches { suggestions }
    }

    /// Start adding a new entry. Nothing is stored until [`Self::complete_entry`].
    pub fn request_entry(&self, name: &str) -> PendingEntry {
        PendingEntry {
            label: canonicalize(name),
        }
    }

    /// Store a pending entry with its payload. A missing or empty payload aborts
    /// the add and leaves the vocabulary untouched.
    pub fn complete_entry(
        &mut self,
        pending: PendingEntry,
        payload: Option<&str>,
    ) -> Option<String> {
        let payload = match payload {
            Some(p) if !p.is_empty() => p,
            _ => {
                log::debug!("no payload for '{}', skipping", pending.label);
                return None;
            }
        };

        if self.index.contains(&pending.label) {
            log::info!("updating entry '{}'", pending.label);
        } else {
            log::info!("adding entry '{}'", pending.label);
        }

        self.vocab.insert(pending.label.clone(), payload.to_string());
        self.index.insert(&pending.label);

        Some(pending.label)
    }

    /// Add an entry in one step. Returns the canonical label it was stored under,
    /// or None if the payload is empty.
    pub fn add_entry(&mut self, name: &str, payload: &str) -> Option<String> {
        let pending = self.request_entry(name);
        self.complete_entry(pending, Some(payload))
    }

    /// Exact, case-sensitive lookup of a label's payload.
    pub fn lookup(&self, label: &str) -> Result<&str, Error> {
        self.vocab
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::NotFound(label.to_string()))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn len(&self) -> usize {
        self.vocab.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(entries: &[(&str, &str)]) -> Autocomplete {
        let vocab = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Autocomplete::new(vocab, 0)
    }

    fn labels(r: &QueryResult) -> Vec<&str> {
        match r {
            QueryResult::Matches { suggestions } => {
                suggestions.iter().map(|s| s.label.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("italy"), "Italy");
        assert_eq!(canonicalize("new zealand"), "New zealand");
        assert_eq!(canonicalize("Italy"), "Italy");
        assert_eq!(canonicalize("ßaxony"), "SSaxony");
        assert_eq!(canonicalize("élan"), "Élan");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(highlight("Japan", "ja"), Some(Highlight { start: 0, len: 2 }));
        assert_eq!(highlight("Japan", "AN"), Some(Highlight { start: 3, len: 2 }));
        assert_eq!(highlight("Japan", "pa"), Some(Highlight { start: 2, len: 2 }));
        assert_eq!(highlight("Japan", "x"), None);
        assert_eq!(highlight("Japan", ""), None);
        assert_eq!(highlight("Ja", "jap"), None);
    }

    #[test]
    fn test_highlight_multibyte() {
        // 'Ö' is two bytes.
        assert_eq!(highlight("Österreich", "öst"), Some(Highlight { start: 0, len: 4 }));
        assert_eq!(highlight("Curaçao", "ÇA"), Some(Highlight { start: 4, len: 3 }));
    }

    #[test]
    fn test_highlight_metachars() {
        // Regex metacharacters are matched literally.
        assert_eq!(highlight("C(ountry)", "(ou"), Some(Highlight { start: 1, len: 3 }));
        assert_eq!(highlight("Japan", ".*"), None);
        assert_eq!(highlight("a.*b", ".*"), Some(Highlight { start: 1, len: 2 }));
    }

    #[test]
    fn test_query_empty() {
        let ac = seed(&[("Japan", "x")]);
        assert_eq!(ac.query(""), QueryResult::Empty);
        assert_eq!(ac.query("   \t"), QueryResult::Empty);
    }

    #[test]
    fn test_query_matches() {
        let ac = seed(&[("Japan", "a"), ("Germany", "b"), ("France", "c")]);

        let r = ac.query("  ja ");
        assert_eq!(
            r,
            QueryResult::Matches {
                suggestions: vec![Suggestion {
                    label: "Japan".to_string(),
                    highlight: Some(Highlight { start: 0, len: 2 }),
                }]
            }
        );

        assert_eq!(labels(&ac.query("FRA")), vec!["France"]);
    }

    #[test]
    fn test_query_no_match() {
        let ac = seed(&[("Japan", "a")]);
        assert_eq!(
            ac.query(" z "),
            QueryResult::Create {
                name: "z".to_string()
            }
        );

        // Metacharacters are not an error.
        assert_eq!(
            ac.query("(["),
            QueryResult::Create {
                name: "([".to_string()
            }
        );
    }

    #[test]
    fn test_query_limit() {
        let vocab = [("India", "a"), ("Indonesia", "b"), ("Ireland", "c"), ("Italy", "d")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let ac = Autocomplete::new(vocab, 2);
        assert_eq!(labels(&ac.query("i")), vec!["India", "Indonesia"]);
    }

    #[test]
    fn test_create_flow() {
        let mut ac = seed(&[("Japan", "a"), ("Germany", "b"), ("France", "c")]);
        assert_eq!(labels(&ac.query("ja")), vec!["Japan"]);

        let name = match ac.query("z") {
            QueryResult::Create { name } => name,
            r => panic!("unexpected result: {:?}", r),
        };

        let pending = ac.request_entry(&name);
        assert_eq!(pending.label(), "Z");
        assert_eq!(ac.add_entry("zambia", "Muli shani"), Some("Zambia".to_string()));
        assert_eq!(labels(&ac.query("z")), vec!["Zambia"]);
        assert_eq!(ac.lookup("Zambia"), Ok("Muli shani"));
    }

    #[test]
    fn test_add_and_lookup_case_sensitive() {
        let mut ac = seed(&[]);
        assert_eq!(ac.add_entry("italy", "Ciao!"), Some("Italy".to_string()));
        assert_eq!(ac.lookup("Italy"), Ok("Ciao!"));
        assert_eq!(ac.lookup("italy"), Err(Error::NotFound("italy".to_string())));
    }

    #[test]
    fn test_missing_payload_aborts() {
        let mut ac = seed(&[("Japan", "a")]);

        let pending = ac.request_entry("zambia");
        assert_eq!(ac.complete_entry(pending, None), None);

        let pending = ac.request_entry("zambia");
        assert_eq!(ac.complete_entry(pending, Some("")), None);

        assert_eq!(ac.len(), 1);
        assert_eq!(
            ac.query("z"),
            QueryResult::Create {
                name: "z".to_string()
            }
        );
        assert!(ac.lookup("Zambia").is_err());
    }

    #[test]
    fn test_add_existing_overwrites_payload() {
        let mut ac = seed(&[("Japan", "a")]);
        ac.add_entry("japan", "b");
        assert_eq!(ac.lookup("Japan"), Ok("b"));
        assert_eq!(ac.len(), 1);
        assert_eq!(labels(&ac.query("j")), vec!["Japan"]);
    }
}
