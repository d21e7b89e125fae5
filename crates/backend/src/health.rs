//! Health: predictive risk analysis over free-form patient data.

use serde::Deserialize;

use crate::client::{BackendError, GeminiClient, TEXT_MODEL};
use crate::wire::{GenerateContentRequest, GenerationConfig, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub identified_risks: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

fn analysis_schema() -> Schema {
    Schema::object(
        [
            (
                "riskLevel",
                Schema::string().one_of(&["Low", "Moderate", "High", "Critical"]),
            ),
            ("riskScore", Schema::integer().describe("0-100 scale")),
            ("identifiedRisks", Schema::array(Schema::string())),
            (
                "alerts",
                Schema::array(Schema::string()).describe("Urgent warnings"),
            ),
            ("recommendations", Schema::array(Schema::string())),
            ("summary", Schema::string()),
        ],
        &["riskLevel", "riskScore", "identifiedRisks", "recommendations"],
    )
}

pub fn analyze_health_risks(
    client: &GeminiClient,
    patient_data: &str,
) -> Result<RiskAnalysis, BackendError> {
    let prompt = format!(
        "Analyze the following patient data to identify potential health risks. \
         Provide a risk assessment for a healthcare provider.\nPatient Data: {patient_data}"
    );
    let request = GenerateContentRequest::from_text(prompt)
        .with_config(GenerationConfig::json(analysis_schema()));

    let response = client.generate(TEXT_MODEL, &request)?;
    let text = response.text().ok_or(BackendError::EmptyResponse)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_parses_camel_case_payload() {
        let analysis: RiskAnalysis = serde_json::from_str(
            r#"{
                "riskLevel": "High",
                "riskScore": 78,
                "identifiedRisks": ["hypertension", "tachycardia"],
                "alerts": ["BP trending upward"],
                "recommendations": ["cardiology referral"],
                "summary": "Elevated cardiovascular risk."
            }"#,
        )
        .unwrap();
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.risk_score, 78);
        assert_eq!(analysis.identified_risks.len(), 2);
    }

    #[test]
    fn alerts_and_summary_are_optional() {
        let analysis: RiskAnalysis = serde_json::from_str(
            r#"{
                "riskLevel": "Low",
                "riskScore": 5,
                "identifiedRisks": [],
                "recommendations": ["routine follow-up"]
            }"#,
        )
        .unwrap();
        assert!(analysis.alerts.is_empty());
        assert_eq!(analysis.summary, "");
    }

    #[test]
    fn unknown_risk_level_is_rejected() {
        let result: Result<RiskAnalysis, _> = serde_json::from_str(
            r#"{
                "riskLevel": "Severe",
                "riskScore": 50,
                "identifiedRisks": [],
                "recommendations": []
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn schema_constrains_risk_level_values() {
        let value = serde_json::to_value(analysis_schema()).unwrap();
        assert_eq!(
            value["properties"]["riskLevel"]["enum"],
            serde_json::json!(["Low", "Moderate", "High", "Critical"])
        );
    }
}
