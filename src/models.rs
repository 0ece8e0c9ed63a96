use serde::Serialize;

/// Canonical degree level, ordered by seniority.
///
/// Variants are declared lowest first so the derived `Ord` matches seniority:
/// `Rank::Postdoc > Rank::Phd > ... > Rank::Bachelor > Rank::Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    /// Unranked / unrecognized. Its label is the empty string.
    Invalid,
    Bachelor,
    Master,
    Mba,
    Jd,
    Md,
    Phd,
    Postdoc,
}

impl Rank {
    /// Every ranked variant, highest first. `Invalid` is not part of the taxonomy.
    pub const RANKED: [Rank; 7] = [
        Rank::Postdoc,
        Rank::Phd,
        Rank::Md,
        Rank::Jd,
        Rank::Mba,
        Rank::Master,
        Rank::Bachelor,
    ];

    /// Canonical display label written to the output table.
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Postdoc => "POSTDOC",
            Rank::Phd => "PHD",
            Rank::Md => "MD",
            Rank::Jd => "JD",
            Rank::Mba => "MBA",
            Rank::Master => "MASTER",
            Rank::Bachelor => "BACHELOR",
            Rank::Invalid => "",
        }
    }

    /// Seed abbreviation the dictionary and base pattern start from.
    pub const fn seed(self) -> Option<&'static str> {
        match self {
            Rank::Postdoc => Some("postdoc"),
            Rank::Phd => Some("phd"),
            Rank::Md => Some("md"),
            Rank::Jd => Some("jd"),
            Rank::Mba => Some("mba"),
            Rank::Master => Some("master"),
            Rank::Bachelor => Some("bachelor"),
            Rank::Invalid => None,
        }
    }

    /// Parse a display label (case-insensitive). Used for config aliases.
    pub fn from_label(label: &str) -> Option<Rank> {
        Rank::RANKED
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which recognition strategy settled an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Pass 1: the extracted abbreviation was already in the dictionary.
    Abbreviation,
    /// Pass 1: full-text match succeeded and taught the dictionary the abbreviation.
    Discovery,
    /// Pass 2: full-text match on an item without a usable abbreviation.
    Text,
    /// Pass 3: lookup or fuzzy match against the grown dictionary.
    Fuzzy,
    /// Pass 3: nothing matched.
    Unranked,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Abbreviation => write!(f, "abbreviation"),
            Resolution::Discovery => write!(f, "discovery"),
            Resolution::Text => write!(f, "text"),
            Resolution::Fuzzy => write!(f, "fuzzy"),
            Resolution::Unranked => write!(f, "unranked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub original: String,
    pub rank: Rank,
    pub resolution: Resolution,
}

impl ClassificationResult {
    pub fn label(&self) -> &'static str {
        self.rank.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Rank::Postdoc > Rank::Phd);
        assert!(Rank::Md > Rank::Jd);
        assert!(Rank::Bachelor > Rank::Invalid);
        let mut sorted = Rank::RANKED.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, Rank::RANKED.to_vec());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rank::Mba.label(), "MBA");
        assert_eq!(Rank::Invalid.label(), "");
        assert_eq!(Rank::Phd.to_string(), "PHD");
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Rank::from_label("phd"), Some(Rank::Phd));
        assert_eq!(Rank::from_label(" Master "), Some(Rank::Master));
        assert_eq!(Rank::from_label(""), None);
        assert_eq!(Rank::from_label("associate"), None);
    }

    #[test]
    fn test_result_json_shape() {
        let result = ClassificationResult {
            original: "Ph.D. - PHD".to_string(),
            rank: Rank::Phd,
            resolution: Resolution::Abbreviation,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "original": "Ph.D. - PHD",
                "rank": "PHD",
                "resolution": "abbreviation",
            })
        );
    }
}
