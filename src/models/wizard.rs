use serde::{Deserialize, Serialize};
use crate::models::sections::{CertificationRecord, LanguageRecord, ProjectRecord, RoleRecord};

/// Everything the profile-wizard endpoint returns: one field per step payload
/// plus the list of completed step indices. Missing fields default so a brand
/// new profile deserializes cleanly.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardStateResponse {
    pub professional_summary: Option<String>,
    pub functional_roles: Vec<RoleRecord>,
    pub technical_roles: Vec<RoleRecord>,
    pub projects: Vec<ProjectRecord>,
    pub technical_skills: Vec<String>,
    pub certifications: Vec<CertificationRecord>,
    pub services_offered: Vec<String>,
    pub languages: Vec<LanguageRecord>,
    pub completed_steps: Vec<usize>,
}

/// Upsert body for one wizard step. The same call serves the wizard and the
/// standalone section editor; `data` carries `{ "<sectionName>": payload }`.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SaveStepRequest {
    pub step: usize,
    pub data: serde_json::Value,
    pub is_completed: bool,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SaveStepResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SaveStepResponse {
    /// Error text to surface when the service reports a rejected payload.
    pub fn rejection_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "The service rejected this step".to_string())
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TaglineResponse {
    pub success: bool,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_step_request_uses_the_upsert_wire_shape() {
        let request = SaveStepRequest {
            step: 3,
            data: json!({ "projects": [] }),
            is_completed: true,
        };
        let value = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(
            value,
            json!({ "step": 3, "data": { "projects": [] }, "isCompleted": true })
        );
    }

    #[test]
    fn wizard_state_parses_the_full_response() {
        let json = r#"{
            "professionalSummary": "Senior SAP consultant",
            "functionalRoles": [{"year":"2021","role":"Lead","responsibility":"Rollout","teamSize":"8","industry":"Retail"}],
            "technicalRoles": [],
            "projects": [],
            "technicalSkills": ["SAP", "Oracle"],
            "certifications": [{"name":"SAP FI","exam":"C_TS4FI","number":"001","issuedBy":"SAP SE","validity":"2027"}],
            "servicesOffered": ["Implementation"],
            "languages": [{"language":"English","proficiency":"Fluent"}],
            "completedSteps": [0, 1]
        }"#;
        let state: WizardStateResponse = serde_json::from_str(json).expect("state should parse");
        assert_eq!(state.professional_summary.as_deref(), Some("Senior SAP consultant"));
        assert_eq!(state.functional_roles.len(), 1);
        assert_eq!(state.technical_skills, vec!["SAP", "Oracle"]);
        assert_eq!(state.completed_steps, vec![0, 1]);
    }

    #[test]
    fn wizard_state_defaults_every_missing_field() {
        let state: WizardStateResponse = serde_json::from_str("{}").expect("empty state should parse");
        assert!(state.professional_summary.is_none());
        assert!(state.certifications.is_empty());
        assert!(state.completed_steps.is_empty());
    }
}
