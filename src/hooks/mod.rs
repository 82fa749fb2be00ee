pub mod session_context;
pub mod use_section_editor;
pub mod use_session;
pub mod use_wizard;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_section_editor::{use_section_editor, UseSectionEditorHandle};
pub use use_session::{use_session, UseSessionHandle};
pub use use_wizard::{use_wizard, UseWizardHandle, WizardState};
