use std::cell::OnceCell;
use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::models::Rank;

/// Lower-case and drop periods: the form every dictionary key is stored in.
pub fn normalize_abbreviation(raw: &str) -> String {
    raw.to_lowercase().replace('.', "")
}

/// Alternation over the taxonomy seeds, highest rank first.
pub fn seed_alternation() -> String {
    Rank::RANKED
        .iter()
        .filter_map(|r| r.seed())
        .collect::<Vec<_>>()
        .join("|")
}

/// Abbreviation → rank map for one run.
///
/// Keys are never overwritten, so the first rank learned for an abbreviation
/// wins. The alternation over all keys is compiled on first read and dropped
/// by every [`Dictionary::discover`], so it never lags behind the keys and a
/// run of discoveries compiles it once.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, Rank>,
    /// Keys in pattern order: seeds by descending rank, aliases, then discoveries.
    order: Vec<String>,
    /// Start of the runtime discoveries in `order`.
    learned_from: usize,
    pattern: OnceCell<Regex>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Dictionary holding only the taxonomy seeds.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let mut order = Vec::new();
        for rank in Rank::RANKED {
            if let Some(seed) = rank.seed() {
                entries.insert(seed.to_string(), rank);
                order.push(seed.to_string());
            }
        }
        let learned_from = order.len();
        Self {
            entries,
            order,
            learned_from,
            pattern: OnceCell::new(),
        }
    }

    /// Seeds plus configured aliases. Aliases are normalized like lookups and
    /// go through the same insert-once path as runtime discoveries, but are
    /// not reported by [`Dictionary::discovered`].
    pub fn with_aliases<'a, I>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Rank)>,
    {
        let mut dictionary = Self::new();
        for (abbreviation, rank) in aliases {
            dictionary.discover(&normalize_abbreviation(abbreviation), rank);
        }
        dictionary.learned_from = dictionary.order.len();
        dictionary
    }

    pub fn get(&self, abbreviation: &str) -> Option<Rank> {
        self.entries.get(abbreviation).copied()
    }

    pub fn contains(&self, abbreviation: &str) -> bool {
        self.entries.contains_key(abbreviation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current alternation over all keys, compiled if a key was added since
    /// the last read.
    pub fn pattern(&self) -> Result<&Regex> {
        if let Some(pattern) = self.pattern.get() {
            return Ok(pattern);
        }
        let alternation = self
            .order
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let compiled = Regex::new(&alternation)?;
        debug!(keys = self.order.len(), "compiled dictionary pattern");
        Ok(self.pattern.get_or_init(|| compiled))
    }

    /// Learn `abbreviation → rank`. Returns `true` if the key was new.
    ///
    /// `abbreviation` must already be in normalized form (see
    /// [`normalize_abbreviation`]) or later lookups will miss it. Blank keys and
    /// [`Rank::Invalid`] are refused: a blank alternative would match at every
    /// position or every space.
    pub fn discover(&mut self, abbreviation: &str, rank: Rank) -> bool {
        if abbreviation.trim().is_empty() || rank == Rank::Invalid || self.contains(abbreviation)
        {
            return false;
        }

        self.entries.insert(abbreviation.to_string(), rank);
        self.order.push(abbreviation.to_string());
        self.pattern.take();

        debug!(abbreviation, rank = %rank, "learned abbreviation");
        true
    }

    /// Keys learned at runtime, in discovery order. Excludes seeds and aliases.
    pub fn discovered(&self) -> &[String] {
        &self.order[self.learned_from..]
    }
}
