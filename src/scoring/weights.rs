use serde::{Deserialize, Serialize};
use std::fmt;

// ── Keyword sets ─────────────────────────────────────────────────────────────

pub const ENVIRONMENTAL_KEYWORDS: &[&str] = &[
    "GHG Emissions",
    "Energy Management",
    "Water Management",
    "Ecological Impacts",
    "Air Quality",
    "Emissions",
];

pub const SOCIAL_KEYWORDS: &[&str] = &[
    "Employee Engagement",
    "Labor Practices",
    "Community Relations",
    "Customer Privacy",
    "Product Quality & Safety",
    "Access to Healthcare",
    "Ethical Marketing Practices",
    "Human Rights",
    "Workforce Safety",
];

pub const GOVERNANCE_KEYWORDS: &[&str] = &[
    "Data Security",
    "Business Ethics",
    "Systemic Risk",
    "Governance",
    "Transparency",
    "Privacy",
];

/// Substrings tried after every keyword set missed, in this order.
const FALLBACK_TERMS: &[(&str, Pillar)] = &[
    ("environmental", Pillar::Environmental),
    ("social", Pillar::Social),
    ("governance", Pillar::Governance),
    ("data security", Pillar::Governance),
];

// ── Types ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Environmental => "E",
            Self::Social => "S",
            Self::Governance => "G",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCounts {
    pub environmental: u32,
    pub social: u32,
    pub governance: u32,
}

impl TopicCounts {
    pub fn total(&self) -> u32 {
        self.environmental + self.social + self.governance
    }

    fn bump(&mut self, pillar: Pillar) {
        match pillar {
            Pillar::Environmental => self.environmental += 1,
            Pillar::Social => self.social += 1,
            Pillar::Governance => self.governance += 1,
        }
    }
}

/// Normalized pillar weights. Always sums to 1 within float tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub w_e: f64,
    pub w_s: f64,
    pub w_g: f64,
}

impl Weights {
    pub const EQUAL: Self = Self {
        w_e: 1.0 / 3.0,
        w_s: 1.0 / 3.0,
        w_g: 1.0 / 3.0,
    };

    pub fn sum(&self) -> f64 {
        self.w_e + self.w_s + self.w_g
    }

    /// Display copy rounded to two decimals. The rounded values may not sum
    /// to exactly 1, so never feed them back into [`composite`].
    pub fn rounded(&self) -> Self {
        Self {
            w_e: round2(self.w_e),
            w_s: round2(self.w_s),
            w_g: round2(self.w_g),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarScores {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl PillarScores {
    pub fn new(environmental: f64, social: f64, governance: f64) -> Self {
        Self {
            environmental,
            social,
            governance,
        }
    }
}

// ── Engine ───────────────────────────────────────────────────────────────────

/// Pillar a single topic label falls into, if any.
///
/// Keyword sets are checked case-insensitively in E, S, G order and the first
/// hit wins. A topic that matches neither a keyword nor a fallback term
/// belongs to no pillar and is not counted.
pub fn classify_topic(topic: &str) -> Option<Pillar> {
    let lower = topic.to_lowercase();
    let hits = |keywords: &[&str]| {
        keywords
            .iter()
            .any(|keyword| lower.contains(&keyword.to_lowercase()))
    };

    if hits(ENVIRONMENTAL_KEYWORDS) {
        return Some(Pillar::Environmental);
    }
    if hits(SOCIAL_KEYWORDS) {
        return Some(Pillar::Social);
    }
    if hits(GOVERNANCE_KEYWORDS) {
        return Some(Pillar::Governance);
    }

    FALLBACK_TERMS
        .iter()
        .find(|(term, _)| lower.contains(term))
        .map(|(_, pillar)| *pillar)
}

pub fn classify<S: AsRef<str>>(topics: &[S]) -> TopicCounts {
    let mut counts = TopicCounts::default();
    for pillar in topics.iter().filter_map(|t| classify_topic(t.as_ref())) {
        counts.bump(pillar);
    }
    counts
}

/// Share of each pillar in `counts`; equal thirds when nothing was counted.
pub fn weights(counts: TopicCounts) -> Weights {
    let total = counts.total();
    if total == 0 {
        return Weights::EQUAL;
    }
    let total = f64::from(total);
    Weights {
        w_e: f64::from(counts.environmental) / total,
        w_s: f64::from(counts.social) / total,
        w_g: f64::from(counts.governance) / total,
    }
}

/// Weighted sum of the pillar scores, rounded to two decimals.
pub fn composite(scores: PillarScores, weights: Weights) -> f64 {
    round2(
        weights.w_e * scores.environmental
            + weights.w_s * scores.social
            + weights.w_g * scores.governance,
    )
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
