// ============================================================================
// SECTION DRAFT - standalone editor state for one profile section
// ============================================================================
// The dashboard section editor works on a disposable copy of the section:
// created on open, thrown away on save or cancel, never shared with the
// wizard's draft set.
// ============================================================================

use serde_json::{json, Value};

use crate::models::sections::{SectionData, SectionKind};
use crate::stores::wizard_store::SaveStatus;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionDraft {
    pub kind: SectionKind,
    pub data: SectionData,
    pub status: SaveStatus,
}

impl SectionDraft {
    /// Seed the draft from the dashboard's copy of the section. When the
    /// profile has nothing for it yet (or the shape does not match the
    /// slot), the draft starts from the section's empty shape.
    pub fn open_for(kind: SectionKind, current: Option<SectionData>) -> Self {
        let empty = kind.empty_data();
        let data = match current {
            Some(data)
                if std::mem::discriminant(&data) == std::mem::discriminant(&empty) =>
            {
                data
            }
            _ => empty,
        };
        Self {
            kind,
            data,
            status: SaveStatus::Idle,
        }
    }

    pub fn step_index(&self) -> usize {
        self.kind.step_index()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.kind.validate(&self.data)
    }

    /// Wire payload for the step upsert: `{ "<sectionName>": data }`.
    pub fn payload(&self) -> Value {
        json!({ (self.kind.api_name()): self.data })
    }

    fn editable(&self) -> bool {
        !self.status.is_saving()
    }

    /// An in-flight draft must stay on screen until its save resolves;
    /// throwing it away would let a reopened card start a second save
    /// for the same step.
    pub fn dismissible(&self) -> bool {
        !self.status.is_saving()
    }

    pub fn add_item(&mut self) {
        if self.editable() {
            self.data.push_default();
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if self.editable() {
            self.data.remove_at(index);
        }
    }

    pub fn set_text(&mut self, value: String) {
        if self.editable() {
            self.data.set_text(value);
        }
    }

    pub fn set_entry(&mut self, index: usize, value: String) {
        if self.editable() {
            self.data.set_entry(index, value);
        }
    }

    pub fn set_record_field(&mut self, index: usize, field: &str, value: String) {
        if self.editable() {
            self.data.set_record_field(index, field, value);
        }
    }

    pub fn begin_save(&mut self) -> bool {
        if self.status.is_saving() {
            return false;
        }
        self.status = SaveStatus::Saving;
        true
    }

    pub fn apply_save_failure(&mut self, message: String) {
        self.status = SaveStatus::Error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmodified_draft_round_trips_the_section() {
        let current = SectionData::Entries(vec![
            "SAP".to_string(),
            "Oracle".to_string(),
        ]);
        let draft = SectionDraft::open_for(SectionKind::TechnicalSkills, Some(current));
        assert_eq!(
            draft.payload(),
            json!({ "technicalSkills": ["SAP", "Oracle"] })
        );
    }

    #[test]
    fn adding_and_filling_an_entry_extends_the_payload_in_order() {
        let current = SectionData::Entries(vec![
            "SAP".to_string(),
            "Oracle".to_string(),
        ]);
        let mut draft =
            SectionDraft::open_for(SectionKind::TechnicalSkills, Some(current));

        draft.add_item();
        assert_eq!(draft.data.len(), 3);
        draft.set_entry(2, "ABAP".to_string());

        assert_eq!(
            draft.payload(),
            json!({ "technicalSkills": ["SAP", "Oracle", "ABAP"] })
        );
    }

    #[test]
    fn missing_section_opens_with_the_empty_shape() {
        let draft = SectionDraft::open_for(SectionKind::Projects, None);
        assert_eq!(draft.data.len(), 0);
        assert_eq!(draft.payload(), json!({ "projects": [] }));

        let summary = SectionDraft::open_for(SectionKind::ProfessionalSummary, None);
        assert_eq!(summary.payload(), json!({ "professionalSummary": "" }));
    }

    #[test]
    fn mismatched_shape_is_replaced_by_the_empty_shape() {
        let wrong = SectionData::Text("not a list".to_string());
        let draft = SectionDraft::open_for(SectionKind::Languages, Some(wrong));
        assert_eq!(draft.payload(), json!({ "languages": [] }));
    }

    #[test]
    fn failed_save_keeps_the_draft_for_retry() {
        let mut draft = SectionDraft::open_for(
            SectionKind::TechnicalSkills,
            Some(SectionData::Entries(vec!["SAP".to_string()])),
        );

        assert!(draft.begin_save());
        assert!(!draft.begin_save());
        // Edits are frozen while the save is in flight
        draft.set_entry(0, "changed".to_string());
        assert_eq!(
            draft.payload(),
            json!({ "technicalSkills": ["SAP"] })
        );

        draft.apply_save_failure("Network error: connection refused".to_string());
        assert_eq!(
            draft.payload(),
            json!({ "technicalSkills": ["SAP"] })
        );
        assert!(draft.status.error_message().is_some());
        assert!(draft.begin_save());
    }

    #[test]
    fn in_flight_draft_cannot_be_dismissed() {
        let mut draft = SectionDraft::open_for(
            SectionKind::TechnicalSkills,
            Some(SectionData::Entries(vec!["SAP".to_string()])),
        );
        assert!(draft.dismissible());

        // While the save is pending the modal must stay up, otherwise a
        // reopened card would hand out a fresh Idle draft and a second
        // save for the same step could start.
        assert!(draft.begin_save());
        assert!(!draft.dismissible());

        draft.apply_save_failure("Network error: connection refused".to_string());
        assert!(draft.dismissible());
        assert!(draft.begin_save());
    }

    #[test]
    fn record_edits_flow_into_the_payload() {
        let mut draft = SectionDraft::open_for(SectionKind::Languages, None);
        draft.add_item();
        draft.set_record_field(0, "language", "German".to_string());
        draft.set_record_field(0, "proficiency", "Fluent".to_string());

        assert_eq!(
            draft.payload(),
            json!({ "languages": [{ "language": "German", "proficiency": "Fluent" }] })
        );
    }

    #[test]
    fn oversized_summary_fails_validation() {
        let mut draft = SectionDraft::open_for(SectionKind::ProfessionalSummary, None);
        draft.set_text("x".repeat(151));
        assert!(draft.validate().is_err());
        draft.set_text("x".repeat(150));
        assert!(draft.validate().is_ok());
    }
}
