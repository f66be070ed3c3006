//! Deterministic materiality weighting.
//!
//! Weights come from the company's industry topic list, never from what a
//! model reported, so the same ticker always weighs the same way.

pub mod materiality;
pub mod weights;

pub use materiality::{MaterialityProfile, resolve_material_topics};
pub use weights::{
    Pillar, PillarScores, TopicCounts, Weights, classify, classify_topic, composite, weights,
};
