use std::{collections::HashMap, fs, path::Path};

use crate::keywords::scan::Category;

/// Phishing signature dictionary, `lowercase phrase -> risk category`.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct KeywordCorpus {
    entries: HashMap<String, Category>,
}

impl KeywordCorpus {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(phrase, category)| {
                let phrase = phrase.as_ref().trim().to_lowercase();
                if phrase.is_empty() {
                    return None;
                }
                Some((phrase, Category::from_label(category.as_ref().trim())))
            })
            .collect();
        Self { entries }
    }

    /// Loads the CSV signature file (`Keyword,Category` columns). Any load
    /// failure degrades to an empty corpus so the service still starts;
    /// the local scanner then reports everything as safe.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let corpus = Self::parse_csv(&raw);
                tracing::info!(
                    target: "keywords",
                    path = %path.display(),
                    signatures = corpus.len(),
                    "loaded phishing signatures"
                );
                corpus
            }
            Err(err) => {
                tracing::warn!(
                    target: "keywords",
                    path = %path.display(),
                    error = %err,
                    "keyword corpus unavailable; falling back to empty corpus"
                );
                Self::empty()
            }
        }
    }

    fn parse_csv(raw: &str) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let mut lines = raw.lines();

        let Some((keyword_col, category_col)) = lines.next().and_then(locate_columns) else {
            tracing::warn!(target: "keywords", "keyword CSV missing Keyword/Category header");
            return Self::empty();
        };

        let entries = lines.filter_map(|line| {
            let fields: Vec<&str> = line.split(',').map(csv_field).collect();
            let phrase = fields.get(keyword_col)?.trim();
            let category = fields.get(category_col)?.trim();
            if phrase.is_empty() || category.is_empty() {
                return None;
            }
            Some((phrase, category))
        });
        Self::from_entries(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn locate_columns(header: &str) -> Option<(usize, usize)> {
    let names: Vec<String> = header
        .split(',')
        .map(|field| csv_field(field).trim().to_lowercase())
        .collect();
    let keyword = names.iter().position(|name| name == "keyword")?;
    let category = names.iter().position(|name| name == "category")?;
    Some((keyword, category))
}

fn csv_field(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}
