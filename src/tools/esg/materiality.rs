use crate::error::ToolError;
use crate::tools::common::{required_str, single_string_schema};
use crate::tools::{Tool, ToolOutput};
use serde_json::{Value, json};

pub const NAME: &str = "get_sasb_materiality";

/// SASB material topics and key metrics for a broad industry bucket.
pub struct SasbMaterialityTool;

fn industry_entry(industry: &str) -> Value {
    match industry {
        "Technology" => json!({
            "material_topics": [
                "Data Security", "Employee Engagement & Diversity", "GHG Emissions",
                "Energy Management", "Supply Chain Management",
                "Product Lifecycle Management", "Materials Sourcing"
            ],
            "sasb_industry": "Hardware / Software & IT Services",
            "key_metrics": [
                "Scope 1, 2, 3 GHG emissions", "Employee turnover",
                "Supply chain labor standards", "Renewable energy percentage", "Data breaches"
            ]
        }),
        "Oil & Gas" => json!({
            "material_topics": [
                "GHG Emissions", "Air Quality", "Water & Wastewater Management",
                "Biodiversity & Ecological Impacts", "Community Relations",
                "Business Ethics & Transparency", "Safety Management", "Operational Efficiency"
            ],
            "sasb_industry": "Oil & Gas - Exploration & Production",
            "key_metrics": [
                "Total GHG emissions", "Methane emissions", "Spills and incidents",
                "Water withdrawn/consumed", "TRIR (safety)", "Reserves replacement"
            ]
        }),
        "Financial Services" => json!({
            "material_topics": [
                "Data Security & Customer Privacy", "Business Ethics & Fraud Prevention",
                "Systemic Risk Management", "Employee Engagement & Diversity",
                "Incorporation of ESG Factors in Investment", "Financed Emissions"
            ],
            "sasb_industry": "Commercial Banks",
            "key_metrics": [
                "Data breaches", "Regulatory fines", "Gender/racial pay gap",
                "Sustainable finance volume", "Financed emissions"
            ]
        }),
        "Healthcare" => json!({
            "material_topics": [
                "Product Quality & Safety", "Access to Healthcare & Affordability",
                "GHG Emissions", "Ethical Marketing Practices", "Drug Pricing & Transparency",
                "Clinical Trial Ethics", "Counterfeit Products"
            ],
            "sasb_industry": "Pharmaceuticals / Medical Equipment",
            "key_metrics": [
                "Product recalls", "Access programs value", "R&D investment",
                "Emissions intensity", "Marketing compliance incidents"
            ]
        }),
        "Consumer Cyclical" => json!({
            "material_topics": [
                "Labor Practices", "Supply Chain Management", "Product Safety & Quality",
                "Data Security", "Raw Material Sourcing", "Packaging & Waste"
            ],
            "sasb_industry": "Multiline and Specialty Retailers & Distributors",
            "key_metrics": [
                "Supply chain audits", "Product recalls", "Worker safety incidents",
                "Sustainable sourcing percentage", "Packaging recycled content"
            ]
        }),
        _ => json!({
            "material_topics": [
                "GHG Emissions", "Employee Engagement", "Business Ethics", "Community Relations"
            ],
            "sasb_industry": "General",
            "key_metrics": ["Emissions", "Employee metrics", "Compliance incidents"]
        }),
    }
}

impl Tool for SasbMaterialityTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get SASB material ESG topics for a given industry. This mapping guides the materiality-driven analysis."
    }

    fn parameters_schema(&self) -> Value {
        single_string_schema(
            "industry",
            "The industry for which to retrieve material ESG topics.",
        )
    }

    fn invoke(&self, args: &Value) -> Result<ToolOutput, ToolError> {
        let industry = required_str(NAME, args, "industry")?;
        let mut payload = json!({ "industry": industry });
        if let (Value::Object(out), Value::Object(entry)) = (&mut payload, industry_entry(industry))
        {
            out.extend(entry);
        }
        Ok(ToolOutput::Structured(payload))
    }
}
