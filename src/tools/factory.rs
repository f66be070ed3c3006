use super::esg::{
    ControversyScanTool, EnvironmentalMetricsTool, GovernanceDataTool, PeerComparisonTool,
    SasbMaterialityTool,
};
use super::{Tool, ToolRegistry};

/// The five research tools the assessment prompt refers to by name.
pub fn default_tools() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(EnvironmentalMetricsTool),
        Box::new(ControversyScanTool),
        Box::new(GovernanceDataTool),
        Box::new(SasbMaterialityTool),
        Box::new(PeerComparisonTool),
    ]
}

pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for tool in default_tools() {
        registry.register(tool);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_registry_exposes_all_research_tools() {
        let registry = default_registry();
        assert_eq!(
            registry.tool_names(),
            vec![
                "get_environmental_metrics",
                "get_governance_data",
                "get_peer_esg_scores",
                "get_sasb_materiality",
                "scan_controversies",
            ]
        );
    }

    #[test]
    fn every_default_tool_rejects_empty_arguments() {
        let registry = default_registry();
        for name in registry.tool_names() {
            assert!(registry.invoke(name, &json!({})).is_err(), "{name}");
        }
    }

    #[test]
    fn every_schema_declares_one_required_string() {
        for spec in default_registry().specs() {
            let required = spec.parameters["required"].as_array().unwrap();
            assert_eq!(required.len(), 1, "{}", spec.name);
        }
    }
}
