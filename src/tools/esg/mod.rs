//! Reference ESG research tools backed by fixed, illustrative lookup tables.

pub mod controversies;
pub mod environmental;
pub mod governance;
pub mod materiality;
pub mod peers;

pub use controversies::ControversyScanTool;
pub use environmental::EnvironmentalMetricsTool;
pub use governance::GovernanceDataTool;
pub use materiality::SasbMaterialityTool;
pub use peers::PeerComparisonTool;
