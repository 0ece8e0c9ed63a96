//! Three-pass batch labelling.
//!
//! ```text
//! Unclassified ──pass 1──▶ Resolved | PendingText
//! PendingText  ──pass 2──▶ Resolved | PendingFallback
//! PendingFallback ─pass 3─▶ Resolved (Rank::Invalid if nothing matched)
//! ```
//!
//! Pass 1 is the only one that writes to the dictionary, and it walks the
//! batch in input order so the learned abbreviations are deterministic.
//! Results come out in pass-completion order, not input order.

use tracing::debug;

use crate::degree::dictionary::{normalize_abbreviation, Dictionary};
use crate::degree::extractor::extract_abbreviation;
use crate::degree::recognizer::{fuzzy_match, lookup_abbreviation, BasePattern};
use crate::error::Result;
use crate::models::{ClassificationResult, Rank, Resolution};

/// Where an item sits between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Unclassified,
    /// Waiting for pass 2. `fallback_queued` is set when pass 1 already put
    /// the item on the fallback queue (abbreviation present but unresolved).
    PendingText { fallback_queued: bool },
    PendingFallback,
    Resolved,
}

struct Item {
    raw: String,
    stage: Stage,
}

/// Owns the per-run dictionary and labels batches with it.
pub struct Pipeline {
    dictionary: Dictionary,
    base: BasePattern,
}

impl Pipeline {
    pub fn with_dictionary(dictionary: Dictionary) -> Result<Self> {
        Ok(Self {
            dictionary,
            base: BasePattern::new()?,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Label every descriptor. Exactly one result is produced per input.
    pub fn run<I>(&mut self, descriptors: I) -> Result<Vec<ClassificationResult>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut items: Vec<Item> = descriptors
            .into_iter()
            .map(|raw| Item {
                raw,
                stage: Stage::Unclassified,
            })
            .collect();
        let mut results = Vec::with_capacity(items.len());
        let mut pending_text = Vec::new();
        let mut pending_fallback = Vec::new();

        // Pass 1: embedded abbreviations
        for (idx, item) in items.iter_mut().enumerate() {
            debug_assert_eq!(item.stage, Stage::Unclassified);
            match self.recognize_abbreviation(&item.raw)? {
                AbbreviationOutcome::Resolved(rank, resolution) => {
                    item.stage = Stage::Resolved;
                    results.push(result(&item.raw, rank, resolution));
                }
                AbbreviationOutcome::Unresolved => {
                    pending_fallback.push(idx);
                    pending_text.push(idx);
                    item.stage = Stage::PendingText {
                        fallback_queued: true,
                    };
                }
                AbbreviationOutcome::Absent => {
                    pending_text.push(idx);
                    item.stage = Stage::PendingText {
                        fallback_queued: false,
                    };
                }
            }
        }
        debug!(
            resolved = results.len(),
            pending_text = pending_text.len(),
            pending_fallback = pending_fallback.len(),
            "abbreviation pass done"
        );

        // Pass 2: plain text
        for idx in pending_text {
            let item = &mut items[idx];
            let Stage::PendingText { fallback_queued } = item.stage else {
                continue;
            };
            if let Some(rank) = self.base.find(&item.raw) {
                item.stage = Stage::Resolved;
                results.push(result(&item.raw, rank, Resolution::Text));
            } else {
                if !fallback_queued {
                    pending_fallback.push(idx);
                }
                item.stage = Stage::PendingFallback;
            }
        }
        debug!(
            resolved = results.len(),
            pending_fallback = pending_fallback.len(),
            "text pass done"
        );

        // Pass 3: fuzzy fallback, always terminal
        for idx in pending_fallback {
            let item = &mut items[idx];
            if item.stage != Stage::PendingFallback {
                continue;
            }
            item.stage = Stage::Resolved;
            let labelled = match fuzzy_match(&self.dictionary, &item.raw)? {
                Some(rank) => result(&item.raw, rank, Resolution::Fuzzy),
                None => result(&item.raw, Rank::Invalid, Resolution::Unranked),
            };
            results.push(labelled);
        }

        debug_assert!(items.iter().all(|i| i.stage == Stage::Resolved));
        debug_assert_eq!(results.len(), items.len());
        Ok(results)
    }

    /// Pass-1 step for a single descriptor. Learns the extracted abbreviation
    /// when the full text resolves it.
    fn recognize_abbreviation(&mut self, raw: &str) -> Result<AbbreviationOutcome> {
        let Some(abbreviation) = extract_abbreviation(raw) else {
            return Ok(AbbreviationOutcome::Absent);
        };

        if let Some(rank) = lookup_abbreviation(&self.dictionary, abbreviation) {
            return Ok(AbbreviationOutcome::Resolved(rank, Resolution::Abbreviation));
        }

        match self.base.find(raw) {
            Some(rank) => {
                self.dictionary
                    .discover(&normalize_abbreviation(abbreviation), rank);
                Ok(AbbreviationOutcome::Resolved(rank, Resolution::Discovery))
            }
            None => Ok(AbbreviationOutcome::Unresolved),
        }
    }
}

enum AbbreviationOutcome {
    Resolved(Rank, Resolution),
    /// Marker present but neither lookup nor full text resolved it.
    Unresolved,
    /// No marker.
    Absent,
}

fn result(raw: &str, rank: Rank, resolution: Resolution) -> ClassificationResult {
    ClassificationResult {
        original: raw.to_string(),
        rank,
        resolution,
    }
}
