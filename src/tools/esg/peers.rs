use crate::error::ToolError;
use crate::tools::common::{single_string_schema, ticker_arg};
use crate::tools::{Tool, ToolOutput};
use serde_json::{Value, json};

pub const NAME: &str = "get_peer_esg_scores";

/// Company metrics side by side with sector averages.
pub struct PeerComparisonTool;

fn peers_for(ticker: &str) -> Value {
    match ticker {
        "AAPL" => json!({
            "sector": "Technology Hardware",
            "peers": ["SAMSUNG", "DELL", "HP", "LENOVO"],
            "sector_avg_emissions_intensity": 45,
            "company_emissions_intensity": 12.5,
            "sector_avg_renewable_energy_pct": 55,
            "company_renewable_energy_pct": 100,
            "sector_avg_board_independence": 82,
            "company_board_independence": 87.5,
            "sector_avg_board_diversity": 35,
            "company_board_diversity": 50,
            "sector_avg_esg_disclosure_score": 72,
            "company_esg_disclosure_score": 89,
            "esg_rating_proxy": "AA (top quartile)",
            "esg_ranking": "Ranked #2 out of 45 tech hardware companies",
            "peer_performance": "Significantly outperforms sector average on environmental metrics, above average on governance"
        }),
        "MSFT" => json!({
            "sector": "Software & IT Services",
            "peers": ["GOOGLE", "AMAZON", "META", "SALESFORCE"],
            "sector_avg_emissions_intensity": 30,
            "company_emissions_intensity": 8.3,
            "sector_avg_renewable_energy_pct": 68,
            "company_renewable_energy_pct": 95,
            "sector_avg_board_independence": 88,
            "company_board_independence": 90.0,
            "sector_avg_board_diversity": 40,
            "company_board_diversity": 60,
            "sector_avg_esg_disclosure_score": 85,
            "company_esg_disclosure_score": 95,
            "esg_rating_proxy": "AAA (top 5%)",
            "esg_ranking": "Ranked #1 out of 78 software companies",
            "peer_performance": "Best-in-class across all ESG dimensions, particularly strong on carbon negative commitment"
        }),
        "XOM" => json!({
            "sector": "Oil & Gas - Integrated",
            "peers": ["CHEVRON", "SHELL", "BP", "TOTALENERGIES"],
            "sector_avg_emissions_intensity": 200,
            "company_emissions_intensity": 285.4,
            "sector_avg_renewable_energy_pct": 8,
            "company_renewable_energy_pct": 3,
            "sector_avg_board_independence": 89,
            "company_board_independence": 91.7,
            "sector_avg_board_diversity": 30,
            "company_board_diversity": 33,
            "sector_avg_esg_disclosure_score": 58,
            "company_esg_disclosure_score": 62,
            "esg_rating_proxy": "BBB (bottom quartile)",
            "esg_ranking": "Ranked #42 out of 55 oil & gas companies",
            "peer_performance": "Below sector average on emissions intensity and renewable investments, average governance"
        }),
        "JPM" => json!({
            "sector": "Commercial Banks",
            "peers": ["BANK_OF_AMERICA", "CITIGROUP", "WELLS_FARGO", "GOLDMAN_SACHS"],
            "sector_avg_emissions_intensity": 10,
            "company_emissions_intensity": 4.2,
            "sector_avg_renewable_energy_pct": 55,
            "company_renewable_energy_pct": 70,
            "sector_avg_board_independence": 87,
            "company_board_independence": 85.7,
            "sector_avg_board_diversity": 40,
            "company_board_diversity": 45,
            "sector_avg_esg_disclosure_score": 78,
            "company_esg_disclosure_score": 82,
            "esg_rating_proxy": "A (second quartile)",
            "esg_ranking": "Ranked #15 out of 62 commercial banks",
            "peer_performance": "Above average on climate finance commitments, average to above average governance"
        }),
        "JNJ" => json!({
            "sector": "Pharmaceuticals",
            "peers": ["PFIZER", "ROCHE", "NOVARTIS", "MERCK"],
            "sector_avg_emissions_intensity": 60,
            "company_emissions_intensity": 95.3,
            "sector_avg_renewable_energy_pct": 48,
            "company_renewable_energy_pct": 60,
            "sector_avg_board_independence": 85,
            "company_board_independence": 81.8,
            "sector_avg_board_diversity": 38,
            "company_board_diversity": 40,
            "sector_avg_esg_disclosure_score": 80,
            "company_esg_disclosure_score": 84,
            "esg_rating_proxy": "A (second quartile)",
            "esg_ranking": "Ranked #12 out of 48 pharmaceutical companies",
            "peer_performance": "Average across most metrics, stronger on renewable energy adoption than peers"
        }),
        _ => json!({ "note": "Peer comparison data not available." }),
    }
}

impl Tool for PeerComparisonTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Compare ESG metrics to sector peers for a given company ticker."
    }

    fn parameters_schema(&self) -> Value {
        single_string_schema(
            "ticker",
            "The ticker symbol of the company for which to get peer esg scores.",
        )
    }

    fn invoke(&self, args: &Value) -> Result<ToolOutput, ToolError> {
        let ticker = ticker_arg(NAME, args)?;
        Ok(ToolOutput::Structured(peers_for(&ticker)))
    }
}
