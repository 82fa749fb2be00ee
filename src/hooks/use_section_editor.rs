// ============================================================================
// USE SECTION EDITOR HOOK - one section at a time, outside the wizard
// ============================================================================
// Backs the dashboard's per-section edit modal. The draft is created when a
// card is opened and destroyed on save or cancel; a failed save leaves it
// on screen untouched for a retry.
// ============================================================================

use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::models::sections::{SectionData, SectionKind};
use crate::services::wizard_service;
use crate::stores::SectionDraft;

pub struct UseSectionEditorHandle {
    pub draft: UseStateHandle<Option<SectionDraft>>,
    /// Open the editor seeded with the dashboard's copy of the section.
    pub open_for: Callback<(SectionKind, Option<SectionData>)>,
    pub close: Callback<()>,
    pub save: Callback<()>,
    pub set_text: Callback<String>,
    pub add_item: Callback<()>,
    pub remove_item: Callback<usize>,
    pub set_entry: Callback<(usize, String)>,
    pub set_record_field: Callback<(usize, &'static str, String)>,
}

#[hook]
pub fn use_section_editor(on_saved: Callback<SectionKind>) -> UseSectionEditorHandle {
    let session = use_session_context();
    let draft = use_state(|| None::<SectionDraft>);

    let open_for = {
        let draft = draft.clone();
        Callback::from(move |(kind, current): (SectionKind, Option<SectionData>)| {
            log::info!("📝 Editing section '{}'", kind.title());
            draft.set(Some(SectionDraft::open_for(kind, current)));
        })
    };

    let close = {
        let draft = draft.clone();
        Callback::from(move |_| {
            // The modal stays up while its save is in flight; dropping the
            // draft here would let a reopened card start a second save for
            // the same step.
            if (*draft).as_ref().is_some_and(|d| !d.dismissible()) {
                return;
            }
            draft.set(None);
        })
    };

    let save = {
        let draft = draft.clone();
        let session = session.clone();
        let on_saved = on_saved.clone();
        Callback::from(move |_| {
            let current = match (*draft).clone() {
                Some(current) => current,
                None => return,
            };
            if let Err(message) = current.validate() {
                let mut failed = current;
                failed.apply_save_failure(message);
                draft.set(Some(failed));
                return;
            }
            let token = match session.bearer_token() {
                Some(token) => token,
                None => {
                    session.expire.emit(());
                    return;
                }
            };

            let mut saving = current.clone();
            if !saving.begin_save() {
                return;
            }
            draft.set(Some(saving));

            let draft = draft.clone();
            let session = session.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let kind = current.kind;
                let step = current.step_index();
                match wizard_service::save_step(&token, step, current.payload(), true).await {
                    Ok(reply) if reply.success => {
                        log::info!("✅ Section '{}' saved", kind.title());
                        draft.set(None);
                        on_saved.emit(kind);
                    }
                    Ok(reply) => {
                        let message = reply.rejection_message();
                        log::warn!("⚠️ Section '{}' was rejected: {}", kind.title(), message);
                        let mut failed = current;
                        failed.apply_save_failure(message);
                        draft.set(Some(failed));
                    }
                    Err(e) => {
                        let handled = session.guard(&e);
                        if !handled {
                            log::error!("❌ Section '{}' save failed: {}", kind.title(), e);
                        }
                        let mut failed = current;
                        failed.apply_save_failure(e.to_string());
                        draft.set(Some(failed));
                    }
                }
            });
        })
    };

    let set_text = {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            edit_draft(&draft, move |d| d.set_text(value));
        })
    };

    let add_item = {
        let draft = draft.clone();
        Callback::from(move |_| {
            edit_draft(&draft, |d| d.add_item());
        })
    };

    let remove_item = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            edit_draft(&draft, move |d| d.remove_item(index));
        })
    };

    let set_entry = {
        let draft = draft.clone();
        Callback::from(move |(index, value): (usize, String)| {
            edit_draft(&draft, move |d| d.set_entry(index, value));
        })
    };

    let set_record_field = {
        let draft = draft.clone();
        Callback::from(move |(index, field, value): (usize, &'static str, String)| {
            edit_draft(&draft, move |d| d.set_record_field(index, field, value));
        })
    };

    UseSectionEditorHandle {
        draft,
        open_for,
        close,
        save,
        set_text,
        add_item,
        remove_item,
        set_entry,
        set_record_field,
    }
}

fn edit_draft<F>(draft: &UseStateHandle<Option<SectionDraft>>, edit: F)
where
    F: FnOnce(&mut SectionDraft),
{
    if let Some(mut current) = (**draft).clone() {
        edit(&mut current);
        draft.set(Some(current));
    }
}
