pub(crate) mod common;
pub mod esg;
pub mod factory;
pub mod registry;
pub mod traits;
pub mod types;

pub use factory::{default_registry, default_tools};
pub use registry::ToolRegistry;
pub use traits::Tool;
pub use types::{ToolOutput, ToolSpec};
