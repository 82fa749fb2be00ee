// ============================================================================
// WIZARD STORE - step machine for the guided profile wizard
// ============================================================================
// Every transition here is a pure function over plain data. The use_wizard
// hook owns the async save choreography and applies these transitions to a
// use_state handle; nothing in this file touches the network or the DOM.
// ============================================================================

use std::collections::BTreeSet;

use crate::models::sections::{SectionData, SectionKind};
use crate::models::wizard::WizardStateResponse;
use crate::models::{
    CertificationRecord, LanguageRecord, ProjectRecord, RoleRecord,
};

/// Outcome of the most recent persistence attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Error(String),
}

impl SaveStatus {
    pub fn is_saving(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SaveStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// In-memory drafts for every section, keyed by position. Edits made on a
/// step survive back/forward navigation until the wizard is closed.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WizardData {
    pub professional_summary: String,
    pub functional_roles: Vec<RoleRecord>,
    pub technical_roles: Vec<RoleRecord>,
    pub projects: Vec<ProjectRecord>,
    pub technical_skills: Vec<String>,
    pub certifications: Vec<CertificationRecord>,
    pub services_offered: Vec<String>,
    pub languages: Vec<LanguageRecord>,
}

impl WizardData {
    pub fn from_remote(response: &WizardStateResponse) -> Self {
        Self {
            professional_summary: response
                .professional_summary
                .clone()
                .unwrap_or_default(),
            functional_roles: response.functional_roles.clone(),
            technical_roles: response.technical_roles.clone(),
            projects: response.projects.clone(),
            technical_skills: response.technical_skills.clone(),
            certifications: response.certifications.clone(),
            services_offered: response.services_offered.clone(),
            languages: response.languages.clone(),
        }
    }

    /// Snapshot of one section as editable data.
    pub fn section(&self, kind: SectionKind) -> SectionData {
        match kind {
            SectionKind::ProfessionalSummary => {
                SectionData::Text(self.professional_summary.clone())
            }
            SectionKind::FunctionalRoles => {
                SectionData::Roles(self.functional_roles.clone())
            }
            SectionKind::TechnicalRoles => {
                SectionData::Roles(self.technical_roles.clone())
            }
            SectionKind::Projects => SectionData::Projects(self.projects.clone()),
            SectionKind::TechnicalSkills => {
                SectionData::Entries(self.technical_skills.clone())
            }
            SectionKind::Certifications => {
                SectionData::Certifications(self.certifications.clone())
            }
            SectionKind::ServicesOffered => {
                SectionData::Entries(self.services_offered.clone())
            }
            SectionKind::Languages => SectionData::Languages(self.languages.clone()),
        }
    }

    /// Write an edited snapshot back. Payloads with the wrong shape for the
    /// slot are dropped; the editor only ever produces matching shapes.
    pub fn set_section(&mut self, kind: SectionKind, data: SectionData) {
        match (kind, data) {
            (SectionKind::ProfessionalSummary, SectionData::Text(text)) => {
                self.professional_summary = text;
            }
            (SectionKind::FunctionalRoles, SectionData::Roles(roles)) => {
                self.functional_roles = roles;
            }
            (SectionKind::TechnicalRoles, SectionData::Roles(roles)) => {
                self.technical_roles = roles;
            }
            (SectionKind::Projects, SectionData::Projects(projects)) => {
                self.projects = projects;
            }
            (SectionKind::TechnicalSkills, SectionData::Entries(entries)) => {
                self.technical_skills = entries;
            }
            (SectionKind::Certifications, SectionData::Certifications(certs)) => {
                self.certifications = certs;
            }
            (SectionKind::ServicesOffered, SectionData::Entries(entries)) => {
                self.services_offered = entries;
            }
            (SectionKind::Languages, SectionData::Languages(languages)) => {
                self.languages = languages;
            }
            (kind, _) => {
                log::warn!("⚠️ Dropped mismatched payload for section {:?}", kind);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WizardStore {
    /// Always a valid position in [0, SectionKind::COUNT).
    pub step_index: usize,
    pub completed_steps: BTreeSet<usize>,
    pub data: WizardData,
    pub save_status: SaveStatus,
}

impl WizardStore {
    /// Seed the machine from the server snapshot. The wizard resumes at the
    /// first step the server has not recorded as completed.
    pub fn from_remote(response: WizardStateResponse) -> Self {
        let data = WizardData::from_remote(&response);
        let completed_steps: BTreeSet<usize> = response
            .completed_steps
            .into_iter()
            .filter(|step| *step < SectionKind::COUNT)
            .collect();
        let step_index = (0..SectionKind::COUNT)
            .find(|step| !completed_steps.contains(step))
            .unwrap_or(SectionKind::COUNT - 1);
        Self {
            step_index,
            completed_steps,
            data,
            save_status: SaveStatus::Idle,
        }
    }

    pub fn current_kind(&self) -> SectionKind {
        SectionKind::from_step_index(self.step_index)
            .unwrap_or(SectionKind::ProfessionalSummary)
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 == SectionKind::COUNT
    }

    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    pub fn completion_percent(&self) -> u8 {
        ((self.completed_steps.len() * 100) / SectionKind::COUNT) as u8
    }

    /// Navigation is frozen while a save is in flight.
    pub fn can_navigate(&self) -> bool {
        !self.save_status.is_saving()
    }

    /// A step chip is reachable when every earlier chip has been completed
    /// at least once: positions up to and including the completed count.
    pub fn can_jump_to(&self, target: usize) -> bool {
        self.can_navigate()
            && target < SectionKind::COUNT
            && target <= self.completed_steps.len()
    }

    /// Claim the single save slot. Returns false when one is already running.
    pub fn begin_save(&mut self) -> bool {
        if self.save_status.is_saving() {
            return false;
        }
        self.save_status = SaveStatus::Saving;
        true
    }

    pub fn apply_save_success(&mut self, step: usize) {
        self.completed_steps.insert(step);
        self.save_status = SaveStatus::Saved;
    }

    /// A failed save releases the slot and leaves position and drafts alone
    /// so the seller can retry in place.
    pub fn apply_save_failure(&mut self, message: String) {
        self.save_status = SaveStatus::Error(message);
    }

    pub fn advance_to_next(&mut self) -> bool {
        if !self.can_navigate() || self.step_index + 1 >= SectionKind::COUNT {
            return false;
        }
        self.step_index += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_navigate() || self.step_index == 0 {
            return false;
        }
        self.step_index -= 1;
        true
    }

    pub fn jump(&mut self, target: usize) -> bool {
        if !self.can_jump_to(target) {
            return false;
        }
        self.step_index = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_store() -> WizardStore {
        WizardStore::from_remote(WizardStateResponse::default())
    }

    fn store_with_completed(steps: &[usize]) -> WizardStore {
        let mut store = fresh_store();
        for step in steps {
            store.completed_steps.insert(*step);
        }
        store
    }

    #[test]
    fn fresh_wizard_starts_at_the_first_step() {
        let store = fresh_store();
        assert_eq!(store.step_index, 0);
        assert_eq!(store.current_kind(), SectionKind::ProfessionalSummary);
        assert!(store.completed_steps.is_empty());
        assert_eq!(store.save_status, SaveStatus::Idle);
        assert_eq!(store.completion_percent(), 0);
    }

    #[test]
    fn resume_lands_on_the_first_incomplete_step() {
        let mut response = WizardStateResponse::default();
        response.completed_steps = vec![0, 1, 3];
        let store = WizardStore::from_remote(response);
        assert_eq!(store.step_index, 2);

        let mut all_done = WizardStateResponse::default();
        all_done.completed_steps = (0..SectionKind::COUNT).collect();
        let store = WizardStore::from_remote(all_done);
        assert_eq!(store.step_index, SectionKind::COUNT - 1);
    }

    #[test]
    fn out_of_range_completed_steps_are_ignored() {
        let mut response = WizardStateResponse::default();
        response.completed_steps = vec![0, 42];
        let store = WizardStore::from_remote(response);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.step_index, 1);
    }

    #[test]
    fn successful_save_marks_the_step_and_advances() {
        let mut store = fresh_store();
        store.data.set_section(
            SectionKind::ProfessionalSummary,
            SectionData::Text("Senior SAP consultant".to_string()),
        );

        assert!(store.begin_save());
        assert!(store.save_status.is_saving());
        store.apply_save_success(0);
        assert!(store.advance_to_next());

        assert_eq!(store.step_index, 1);
        assert!(store.completed_steps.contains(&0));
        assert_eq!(store.save_status, SaveStatus::Saved);
        assert_eq!(
            store.data.professional_summary,
            "Senior SAP consultant".to_string()
        );
    }

    #[test]
    fn failed_save_keeps_position_and_completion() {
        let mut store = store_with_completed(&[0, 1]);
        store.step_index = 2;

        assert!(store.begin_save());
        store.apply_save_failure("Network error: request timed out".to_string());

        assert_eq!(store.step_index, 2);
        assert_eq!(store.completed_count(), 2);
        assert!(store.save_status.error_message().is_some());
        // The slot is free again for a retry
        assert!(store.begin_save());
    }

    #[test]
    fn only_one_save_runs_at_a_time() {
        let mut store = fresh_store();
        assert!(store.begin_save());
        assert!(!store.begin_save());
        assert!(!store.advance_to_next());
        assert!(!store.retreat());
        assert!(!store.jump(0));
    }

    #[test]
    fn jump_is_bounded_by_the_completed_count() {
        let mut store = store_with_completed(&[0, 1]);
        store.step_index = 1;

        assert!(store.can_jump_to(0));
        assert!(store.can_jump_to(2));
        assert!(!store.can_jump_to(3));
        assert!(!store.can_jump_to(SectionKind::COUNT));

        assert!(!store.jump(3));
        assert_eq!(store.step_index, 1);
        assert!(store.jump(2));
        assert_eq!(store.step_index, 2);
    }

    #[test]
    fn retreat_stops_at_the_first_step() {
        let mut store = fresh_store();
        assert!(!store.retreat());
        store.step_index = 2;
        assert!(store.retreat());
        assert_eq!(store.step_index, 1);
    }

    #[test]
    fn drafts_survive_navigation() {
        let mut store = store_with_completed(&[0, 1, 2, 3, 4]);
        store.step_index = 4;
        store.data.set_section(
            SectionKind::TechnicalSkills,
            SectionData::Entries(vec!["SAP FI".to_string(), "ABAP".to_string()]),
        );

        assert!(store.retreat());
        assert!(store.jump(4));
        assert_eq!(
            store.data.section(SectionKind::TechnicalSkills),
            SectionData::Entries(vec!["SAP FI".to_string(), "ABAP".to_string()])
        );
    }

    #[test]
    fn completion_percent_counts_distinct_steps() {
        let store = store_with_completed(&[0, 1]);
        assert_eq!(store.completion_percent(), 25);
        let full = store_with_completed(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(full.completion_percent(), 100);
    }

    #[test]
    fn last_step_is_detected() {
        let mut store = fresh_store();
        store.step_index = SectionKind::COUNT - 1;
        assert!(store.is_last_step());
        assert!(!store.advance_to_next());
        assert_eq!(store.step_index, SectionKind::COUNT - 1);
    }
}
