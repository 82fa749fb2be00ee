pub mod section_store;
pub mod session_store;
pub mod wizard_store;

pub use section_store::SectionDraft;
pub use session_store::SessionStore;
pub use wizard_store::{SaveStatus, WizardData, WizardStore};
