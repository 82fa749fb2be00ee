// ============================================================================
// SECTION REGISTRY - one entry per profile section
// ============================================================================
// Wizard steps and standalone profile sections share indices and payload
// shapes by design. Everything the wizard or the section editor needs to
// know about a section (payload key, step index, empty payload, editable
// fields) lives here, so adding a section is one registry entry.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Maximum length of the professional summary, enforced before save.
pub const SUMMARY_MAX_LEN: usize = 150;

/// Proficiency choices offered by the language editor.
pub const PROFICIENCY_LEVELS: [&str; 4] = ["Basic", "Conversational", "Fluent", "Native"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionKind {
    ProfessionalSummary,
    FunctionalRoles,
    TechnicalRoles,
    Projects,
    TechnicalSkills,
    Certifications,
    ServicesOffered,
    Languages,
}

impl SectionKind {
    /// Wizard order. Step indices are positions in this array.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ProfessionalSummary,
        SectionKind::FunctionalRoles,
        SectionKind::TechnicalRoles,
        SectionKind::Projects,
        SectionKind::TechnicalSkills,
        SectionKind::Certifications,
        SectionKind::ServicesOffered,
        SectionKind::Languages,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn step_index(&self) -> usize {
        match self {
            SectionKind::ProfessionalSummary => 0,
            SectionKind::FunctionalRoles => 1,
            SectionKind::TechnicalRoles => 2,
            SectionKind::Projects => 3,
            SectionKind::TechnicalSkills => 4,
            SectionKind::Certifications => 5,
            SectionKind::ServicesOffered => 6,
            SectionKind::Languages => 7,
        }
    }

    pub fn from_step_index(step: usize) -> Option<SectionKind> {
        Self::ALL.get(step).copied()
    }

    /// Key this section uses inside the step-upsert payload.
    pub fn api_name(&self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => "professionalSummary",
            SectionKind::FunctionalRoles => "functionalRoles",
            SectionKind::TechnicalRoles => "technicalRoles",
            SectionKind::Projects => "projects",
            SectionKind::TechnicalSkills => "technicalSkills",
            SectionKind::Certifications => "certifications",
            SectionKind::ServicesOffered => "servicesOffered",
            SectionKind::Languages => "languages",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => "Professional Summary",
            SectionKind::FunctionalRoles => "Functional Roles",
            SectionKind::TechnicalRoles => "Technical Roles",
            SectionKind::Projects => "Project History",
            SectionKind::TechnicalSkills => "Technical Skills",
            SectionKind::Certifications => "Certifications",
            SectionKind::ServicesOffered => "Services Offered",
            SectionKind::Languages => "Languages",
        }
    }

    /// Short helper text shown under the section title.
    pub fn hint(&self) -> &'static str {
        match self {
            SectionKind::ProfessionalSummary => "A short pitch shown on your public card (150 characters max).",
            SectionKind::FunctionalRoles => "Functional positions you have held on ERP engagements.",
            SectionKind::TechnicalRoles => "Technical positions you have held on ERP engagements.",
            SectionKind::Projects => "Engagements you want buyers to see, most relevant first.",
            SectionKind::TechnicalSkills => "Modules, stacks and tools, one per entry.",
            SectionKind::Certifications => "The first certification listed is treated as your primary one.",
            SectionKind::ServicesOffered => "Services buyers can engage you for, one per entry.",
            SectionKind::Languages => "Working languages and proficiency.",
        }
    }

    /// Empty-payload factory for this section's shape.
    pub fn empty_data(&self) -> SectionData {
        match self {
            SectionKind::ProfessionalSummary => SectionData::Text(String::new()),
            SectionKind::FunctionalRoles | SectionKind::TechnicalRoles => SectionData::Roles(Vec::new()),
            SectionKind::Projects => SectionData::Projects(Vec::new()),
            SectionKind::TechnicalSkills | SectionKind::ServicesOffered => SectionData::Entries(Vec::new()),
            SectionKind::Certifications => SectionData::Certifications(Vec::new()),
            SectionKind::Languages => SectionData::Languages(Vec::new()),
        }
    }

    /// Editable fields of one list record, empty for text/plain-entry sections.
    pub fn field_specs(&self) -> &'static [FieldSpec] {
        match self {
            SectionKind::FunctionalRoles | SectionKind::TechnicalRoles => RoleRecord::FIELDS,
            SectionKind::Projects => ProjectRecord::FIELDS,
            SectionKind::Certifications => CertificationRecord::FIELDS,
            SectionKind::Languages => LanguageRecord::FIELDS,
            _ => &[],
        }
    }

    /// Pre-save validation. Only the summary carries a constraint today.
    pub fn validate(&self, data: &SectionData) -> Result<(), String> {
        if let (SectionKind::ProfessionalSummary, SectionData::Text(text)) = (*self, data) {
            if text.chars().count() > SUMMARY_MAX_LEN {
                return Err(format!(
                    "The summary must be {} characters or fewer",
                    SUMMARY_MAX_LEN
                ));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldInput {
    Text,
    Number,
    Select(&'static [&'static str]),
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
}

/// One section's editable payload. Serializes transparently to the shape
/// the step-upsert call expects (plain string or plain array).
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    Text(String),
    Entries(Vec<String>),
    Roles(Vec<RoleRecord>),
    Projects(Vec<ProjectRecord>),
    Certifications(Vec<CertificationRecord>),
    Languages(Vec<LanguageRecord>),
}

impl SectionData {
    pub fn len(&self) -> usize {
        match self {
            SectionData::Text(_) => 0,
            SectionData::Entries(items) => items.len(),
            SectionData::Roles(items) => items.len(),
            SectionData::Projects(items) => items.len(),
            SectionData::Certifications(items) => items.len(),
            SectionData::Languages(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionData::Text(text) => text.trim().is_empty(),
            _ => self.len() == 0,
        }
    }

    /// Append one template record whose fields are all empty/default.
    pub fn push_default(&mut self) {
        match self {
            SectionData::Text(_) => {}
            SectionData::Entries(items) => items.push(String::new()),
            SectionData::Roles(items) => items.push(RoleRecord::default()),
            SectionData::Projects(items) => items.push(ProjectRecord::default()),
            SectionData::Certifications(items) => items.push(CertificationRecord::default()),
            SectionData::Languages(items) => items.push(LanguageRecord::default()),
        }
    }

    /// Remove by position, preserving the relative order of the rest.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        match self {
            SectionData::Text(_) => {}
            SectionData::Entries(items) => {
                items.remove(index);
            }
            SectionData::Roles(items) => {
                items.remove(index);
            }
            SectionData::Projects(items) => {
                items.remove(index);
            }
            SectionData::Certifications(items) => {
                items.remove(index);
            }
            SectionData::Languages(items) => {
                items.remove(index);
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SectionData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_text(&mut self, value: String) {
        if let SectionData::Text(text) = self {
            *text = value;
        }
    }

    pub fn entry(&self, index: usize) -> Option<&str> {
        match self {
            SectionData::Entries(items) => items.get(index).map(String::as_str),
            _ => None,
        }
    }

    /// Replace one plain-string entry (skills / services sections).
    pub fn set_entry(&mut self, index: usize, value: String) {
        if let SectionData::Entries(items) = self {
            if let Some(entry) = items.get_mut(index) {
                *entry = value;
            }
        }
    }

    pub fn record_field(&self, index: usize, field: &str) -> Option<String> {
        match self {
            SectionData::Roles(items) => items.get(index).map(|r| r.field(field)),
            SectionData::Projects(items) => items.get(index).map(|r| r.field(field)),
            SectionData::Certifications(items) => items.get(index).map(|r| r.field(field)),
            SectionData::Languages(items) => items.get(index).map(|r| r.field(field)),
            _ => None,
        }
    }

    /// Edit one field of one record by position.
    pub fn set_record_field(&mut self, index: usize, field: &str, value: String) {
        match self {
            SectionData::Roles(items) => {
                if let Some(record) = items.get_mut(index) {
                    record.set_field(field, value);
                }
            }
            SectionData::Projects(items) => {
                if let Some(record) = items.get_mut(index) {
                    record.set_field(field, value);
                }
            }
            SectionData::Certifications(items) => {
                if let Some(record) = items.get_mut(index) {
                    record.set_field(field, value);
                }
            }
            SectionData::Languages(items) => {
                if let Some(record) = items.get_mut(index) {
                    record.set_field(field, value);
                }
            }
            _ => {}
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleRecord {
    pub year: String,
    pub role: String,
    pub responsibility: String,
    pub team_size: String,
    pub industry: String,
}

impl RoleRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { id: "year", label: "Year", input: FieldInput::Number },
        FieldSpec { id: "role", label: "Role", input: FieldInput::Text },
        FieldSpec { id: "responsibility", label: "Responsibility", input: FieldInput::Text },
        FieldSpec { id: "teamSize", label: "Team size", input: FieldInput::Number },
        FieldSpec { id: "industry", label: "Industry", input: FieldInput::Text },
    ];

    pub fn field(&self, id: &str) -> String {
        match id {
            "year" => self.year.clone(),
            "role" => self.role.clone(),
            "responsibility" => self.responsibility.clone(),
            "teamSize" => self.team_size.clone(),
            "industry" => self.industry.clone(),
            _ => String::new(),
        }
    }

    pub fn set_field(&mut self, id: &str, value: String) {
        match id {
            "year" => self.year = value,
            "role" => self.role = value,
            "responsibility" => self.responsibility = value,
            "teamSize" => self.team_size = value,
            "industry" => self.industry = value,
            _ => {}
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub name: String,
    pub client: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

impl ProjectRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { id: "name", label: "Project name", input: FieldInput::Text },
        FieldSpec { id: "client", label: "Client", input: FieldInput::Text },
        FieldSpec { id: "role", label: "Your role", input: FieldInput::Text },
        FieldSpec { id: "duration", label: "Duration", input: FieldInput::Text },
        FieldSpec { id: "description", label: "Description", input: FieldInput::Text },
    ];

    pub fn field(&self, id: &str) -> String {
        match id {
            "name" => self.name.clone(),
            "client" => self.client.clone(),
            "role" => self.role.clone(),
            "duration" => self.duration.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    pub fn set_field(&mut self, id: &str, value: String) {
        match id {
            "name" => self.name = value,
            "client" => self.client = value,
            "role" => self.role = value,
            "duration" => self.duration = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRecord {
    pub name: String,
    pub exam: String,
    pub number: String,
    pub issued_by: String,
    pub validity: String,
}

impl CertificationRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { id: "name", label: "Certification", input: FieldInput::Text },
        FieldSpec { id: "exam", label: "Exam", input: FieldInput::Text },
        FieldSpec { id: "number", label: "Certificate number", input: FieldInput::Text },
        FieldSpec { id: "issuedBy", label: "Issued by", input: FieldInput::Text },
        FieldSpec { id: "validity", label: "Valid until", input: FieldInput::Text },
    ];

    pub fn field(&self, id: &str) -> String {
        match id {
            "name" => self.name.clone(),
            "exam" => self.exam.clone(),
            "number" => self.number.clone(),
            "issuedBy" => self.issued_by.clone(),
            "validity" => self.validity.clone(),
            _ => String::new(),
        }
    }

    pub fn set_field(&mut self, id: &str, value: String) {
        match id {
            "name" => self.name = value,
            "exam" => self.exam = value,
            "number" => self.number = value,
            "issuedBy" => self.issued_by = value,
            "validity" => self.validity = value,
            _ => {}
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRecord {
    pub language: String,
    pub proficiency: String,
}

impl LanguageRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { id: "language", label: "Language", input: FieldInput::Text },
        FieldSpec {
            id: "proficiency",
            label: "Proficiency",
            input: FieldInput::Select(&PROFICIENCY_LEVELS),
        },
    ];

    pub fn field(&self, id: &str) -> String {
        match id {
            "language" => self.language.clone(),
            "proficiency" => self.proficiency.clone(),
            _ => String::new(),
        }
    }

    pub fn set_field(&mut self, id: &str, value: String) {
        match id {
            "language" => self.language = value,
            "proficiency" => self.proficiency = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_index_round_trips_for_every_kind() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_step_index(kind.step_index()), Some(kind));
        }
        assert_eq!(SectionKind::from_step_index(SectionKind::COUNT), None);
    }

    #[test]
    fn empty_data_matches_section_shape() {
        assert_eq!(
            SectionKind::ProfessionalSummary.empty_data(),
            SectionData::Text(String::new())
        );
        assert_eq!(
            SectionKind::TechnicalSkills.empty_data(),
            SectionData::Entries(Vec::new())
        );
        assert_eq!(
            SectionKind::Certifications.empty_data(),
            SectionData::Certifications(Vec::new())
        );
    }

    #[test]
    fn push_default_appends_one_blank_record() {
        let mut data = SectionKind::FunctionalRoles.empty_data();
        data.push_default();
        assert_eq!(data.len(), 1);
        for spec in SectionKind::FunctionalRoles.field_specs() {
            assert_eq!(data.record_field(0, spec.id), Some(String::new()));
        }
    }

    #[test]
    fn remove_at_preserves_relative_order() {
        let mut data = SectionData::Entries(vec![
            "SAP".to_string(),
            "Oracle".to_string(),
            "ABAP".to_string(),
        ]);
        data.remove_at(1);
        assert_eq!(
            data,
            SectionData::Entries(vec!["SAP".to_string(), "ABAP".to_string()])
        );

        // Out-of-range removals are no-ops
        data.remove_at(7);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn record_fields_are_editable_by_id() {
        let mut data = SectionKind::Languages.empty_data();
        data.push_default();
        data.set_record_field(0, "language", "German".to_string());
        data.set_record_field(0, "proficiency", "Fluent".to_string());
        assert_eq!(data.record_field(0, "language"), Some("German".to_string()));
        assert_eq!(data.record_field(0, "proficiency"), Some("Fluent".to_string()));
    }

    #[test]
    fn summary_validation_enforces_the_character_cap() {
        let kind = SectionKind::ProfessionalSummary;
        let short = SectionData::Text("Senior SAP consultant".to_string());
        assert!(kind.validate(&short).is_ok());

        let long = SectionData::Text("x".repeat(SUMMARY_MAX_LEN + 1));
        assert!(kind.validate(&long).is_err());
    }

    #[test]
    fn section_data_serializes_to_plain_wire_shapes() {
        let text = SectionData::Text("ERP migrations".to_string());
        assert_eq!(serde_json::to_value(&text).ok(), Some(serde_json::json!("ERP migrations")));

        let entries = SectionData::Entries(vec!["SAP".to_string()]);
        assert_eq!(serde_json::to_value(&entries).ok(), Some(serde_json::json!(["SAP"])));

        let mut certifications = SectionKind::Certifications.empty_data();
        certifications.push_default();
        certifications.set_record_field(0, "issuedBy", "SAP SE".to_string());
        let value = serde_json::to_value(&certifications).expect("should serialize");
        assert_eq!(value[0]["issuedBy"], "SAP SE");
    }
}
