use super::weights::{TopicCounts, Weights, classify, weights};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_TICKER: &str = "UNKNOWN";
pub const UNKNOWN_INDUSTRY: &str = "Unknown (Offline Dummy)";

const TICKER_INDUSTRIES: &[(&str, &str)] = &[
    ("AAPL", "Technology Hardware"),
    ("MSFT", "Software & IT Services"),
    ("GOOG", "Internet Media & Services"),
    ("AMZN", "E-Commerce & Cloud Services"),
    ("TSLA", "Automobiles"),
    ("JPM", "Banks"),
    ("XOM", "Oil & Gas"),
    ("JNJ", "Healthcare"),
];

const INDUSTRY_TOPICS: &[(&str, &[&str])] = &[
    (
        "Technology Hardware",
        &[
            "Product Lifecycle Management",
            "Supply Chain Management",
            "Labor Practices",
            "Data Privacy & Security",
            "Energy Management",
        ],
    ),
    (
        "Software & IT Services",
        &[
            "Data Privacy & Security",
            "Business Ethics",
            "Employee Engagement & Inclusion",
            "Energy Management (Data Centers)",
        ],
    ),
    (
        "Internet Media & Services",
        &[
            "Data Privacy & Security",
            "Content Governance",
            "Business Ethics",
            "Human Rights & User Safety",
        ],
    ),
    (
        "E-Commerce & Cloud Services",
        &[
            "Data Privacy & Security",
            "Labor Practices",
            "Packaging & Waste",
            "Energy Management (Logistics/Data Centers)",
        ],
    ),
    (
        "Automobiles",
        &[
            "Product Safety",
            "Fuel Economy & Emissions",
            "Supply Chain Management",
            "Materials Sourcing",
            "Labor Practices",
        ],
    ),
    (
        "Banks",
        &[
            "Business Ethics",
            "Customer Privacy",
            "Systemic Risk Management",
            "Responsible Lending",
        ],
    ),
    (
        "Oil & Gas",
        &[
            "GHG Emissions",
            "Water & Wastewater Management",
            "Safety & Emergency Management",
            "Biodiversity Impacts",
            "Business Ethics",
        ],
    ),
    (
        "Healthcare",
        &[
            "Product Quality & Safety",
            "Access to Healthcare",
            "GHG Emissions",
            "Ethical Marketing Practices",
        ],
    ),
];

const GENERIC_TOPICS: &[&str] = &[
    "GHG Emissions & Energy Management",
    "Labor Practices & Workforce Safety",
    "Business Ethics & Transparency",
    "Data Privacy & Cybersecurity",
    "Product Quality & Customer Welfare",
];

/// Industry and material topics for one company, independent of any model run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialityProfile {
    pub ticker: String,
    pub industry: String,
    pub material_topics: Vec<String>,
}

impl MaterialityProfile {
    pub fn counts(&self) -> TopicCounts {
        classify(&self.material_topics)
    }

    pub fn weights(&self) -> Weights {
        weights(self.counts())
    }
}

/// Look up the industry and its material topics for `ticker`.
///
/// Unknown tickers get the placeholder industry and the generic topic list.
pub fn resolve_material_topics(ticker: &str) -> MaterialityProfile {
    let ticker = match ticker.trim().to_uppercase() {
        t if t.is_empty() => UNKNOWN_TICKER.to_string(),
        t => t,
    };

    let industry = TICKER_INDUSTRIES
        .iter()
        .find(|(known, _)| *known == ticker)
        .map_or(UNKNOWN_INDUSTRY, |(_, industry)| *industry);

    let topics = INDUSTRY_TOPICS
        .iter()
        .find(|(name, _)| *name == industry)
        .map_or(GENERIC_TOPICS, |(_, topics)| *topics);

    MaterialityProfile {
        ticker,
        industry: industry.to_string(),
        material_topics: topics.iter().map(|t| (*t).to_string()).collect(),
    }
}
