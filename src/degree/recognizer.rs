use std::collections::HashMap;

use regex::Regex;

use crate::degree::dictionary::{normalize_abbreviation, seed_alternation, Dictionary};
use crate::error::Result;
use crate::models::Rank;

/// Look an abbreviation up after lower-casing and dropping periods.
pub fn lookup_abbreviation(dictionary: &Dictionary, abbreviation: &str) -> Option<Rank> {
    dictionary.get(&normalize_abbreviation(abbreviation))
}

/// Full-text matcher over the fixed taxonomy seeds.
///
/// Built once and never extended, unlike the dictionary pattern.
#[derive(Debug, Clone)]
pub struct BasePattern {
    regex: Regex,
    ranks: HashMap<&'static str, Rank>,
}

impl BasePattern {
    pub fn new() -> Result<Self> {
        let ranks = Rank::RANKED
            .into_iter()
            .filter_map(|r| r.seed().map(|s| (s, r)))
            .collect();
        Ok(Self {
            regex: Regex::new(&seed_alternation())?,
            ranks,
        })
    }

    /// Rank of the first seed occurring in the lower-cased text.
    ///
    /// Position decides, not seniority: `"master ... phd"` is a master.
    pub fn find(&self, text: &str) -> Option<Rank> {
        let lower = text.to_lowercase();
        self.regex
            .find(&lower)
            .and_then(|m| self.ranks.get(m.as_str()).copied())
    }
}

/// Last-chance recognition against the grown dictionary.
///
/// Tries the whole normalized string as an abbreviation, then the same with
/// spaces removed, then scans for every dictionary key and keeps the most
/// senior one found regardless of position. Errors only if the dictionary
/// pattern fails to compile.
pub fn fuzzy_match(dictionary: &Dictionary, text: &str) -> Result<Option<Rank>> {
    let normalized = normalize_abbreviation(text);
    if let Some(rank) = dictionary.get(&normalized) {
        return Ok(Some(rank));
    }

    let no_space = normalized.replace(' ', "");
    if let Some(rank) = dictionary.get(&no_space) {
        return Ok(Some(rank));
    }

    Ok(dictionary
        .pattern()?
        .find_iter(&normalized)
        .filter_map(|m| dictionary.get(m.as_str()))
        .max())
}
