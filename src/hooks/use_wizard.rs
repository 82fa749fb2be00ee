// ============================================================================
// USE WIZARD HOOK - async choreography for the profile wizard
// ============================================================================
// Owns opening (token probe + state fetch) and the save-then-navigate cycle.
// All state transitions live in WizardStore; this hook only decides when to
// apply them and talks to the services.
// ============================================================================

use serde_json::json;
use yew::prelude::*;

use crate::hooks::session_context::use_session_context;
use crate::hooks::use_session::UseSessionHandle;
use crate::models::sections::SectionData;
use crate::services::{auth_service, wizard_service};
use crate::stores::WizardStore;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct WizardState {
    /// Present once the server snapshot has loaded.
    pub wizard: Option<WizardStore>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Where navigation lands after the current step persists.
#[derive(Clone, Copy)]
enum Destination {
    Next,
    Step(usize),
}

pub struct UseWizardHandle {
    pub state: UseStateHandle<WizardState>,
    pub open: Callback<()>,
    pub advance: Callback<()>,
    pub retreat: Callback<()>,
    pub jump_to: Callback<usize>,
    pub set_text: Callback<String>,
    pub add_item: Callback<()>,
    pub remove_item: Callback<usize>,
    pub set_entry: Callback<(usize, String)>,
    pub set_record_field: Callback<(usize, &'static str, String)>,
}

#[hook]
pub fn use_wizard(on_completed: Callback<()>) -> UseWizardHandle {
    let session = use_session_context();
    let state = use_state(WizardState::default);

    let open = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let token = match session.bearer_token() {
                Some(token) => token,
                None => {
                    session.expire.emit(());
                    return;
                }
            };
            state.set(WizardState {
                wizard: None,
                loading: true,
                error: None,
            });

            let state = state.clone();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("🧭 Opening the profile wizard");

                // Probe the token before fetching anything
                match auth_service::verify_token(&token).await {
                    Ok(reply) if reply.success => {}
                    Ok(_) => {
                        session.expire.emit(());
                        state.set(WizardState::default());
                        return;
                    }
                    Err(e) => {
                        if session.guard(&e) {
                            state.set(WizardState::default());
                        } else {
                            state.set(WizardState {
                                wizard: None,
                                loading: false,
                                error: Some(e.to_string()),
                            });
                        }
                        return;
                    }
                }

                match wizard_service::fetch_wizard_state(&token).await {
                    Ok(remote) => {
                        let store = WizardStore::from_remote(remote);
                        log::info!(
                            "✅ Wizard ready at step {} ({} completed)",
                            store.step_index,
                            store.completed_count()
                        );
                        state.set(WizardState {
                            wizard: Some(store),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        if session.guard(&e) {
                            state.set(WizardState::default());
                        } else {
                            log::error!("❌ Could not load the wizard: {}", e);
                            state.set(WizardState {
                                wizard: None,
                                loading: false,
                                error: Some(e.to_string()),
                            });
                        }
                    }
                }
            });
        })
    };

    let advance = {
        let state = state.clone();
        let session = session.clone();
        let on_completed = on_completed.clone();
        Callback::from(move |_| {
            persist_and_navigate(
                state.clone(),
                session.clone(),
                Destination::Next,
                on_completed.clone(),
            );
        })
    };

    let jump_to = {
        let state = state.clone();
        let session = session.clone();
        let on_completed = on_completed.clone();
        Callback::from(move |target: usize| {
            persist_and_navigate(
                state.clone(),
                session.clone(),
                Destination::Step(target),
                on_completed.clone(),
            );
        })
    };

    // Going back never saves; the draft stays in memory for when the
    // seller returns to the step.
    let retreat = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            if let Some(wizard) = next.wizard.as_mut() {
                if wizard.retreat() {
                    state.set(next);
                }
            }
        })
    };

    let set_text = {
        let state = state.clone();
        Callback::from(move |value: String| {
            edit_current_section(&state, move |data| data.set_text(value));
        })
    };

    let add_item = {
        let state = state.clone();
        Callback::from(move |_| {
            edit_current_section(&state, |data| data.push_default());
        })
    };

    let remove_item = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            edit_current_section(&state, move |data| data.remove_at(index));
        })
    };

    let set_entry = {
        let state = state.clone();
        Callback::from(move |(index, value): (usize, String)| {
            edit_current_section(&state, move |data| data.set_entry(index, value));
        })
    };

    let set_record_field = {
        let state = state.clone();
        Callback::from(move |(index, field, value): (usize, &'static str, String)| {
            edit_current_section(&state, move |data| {
                data.set_record_field(index, field, value)
            });
        })
    };

    UseWizardHandle {
        state,
        open,
        advance,
        retreat,
        jump_to,
        set_text,
        add_item,
        remove_item,
        set_entry,
        set_record_field,
    }
}

/// Apply one edit to the step currently on screen. Edits are ignored while
/// a save is in flight so the payload being sent stays stable.
fn edit_current_section<F>(state: &UseStateHandle<WizardState>, edit: F)
where
    F: FnOnce(&mut SectionData),
{
    let mut next = (**state).clone();
    if let Some(wizard) = next.wizard.as_mut() {
        if wizard.save_status.is_saving() {
            return;
        }
        let kind = wizard.current_kind();
        let mut data = wizard.data.section(kind);
        edit(&mut data);
        wizard.data.set_section(kind, data);
        state.set(next);
    }
}

/// Persist the step on screen, then move. Every forward move and every chip
/// jump goes through this path so nothing navigates past an unsaved edit.
fn persist_and_navigate(
    state: UseStateHandle<WizardState>,
    session: UseSessionHandle,
    destination: Destination,
    on_completed: Callback<()>,
) {
    let current = (*state).clone();
    let wizard = match current.wizard {
        Some(wizard) => wizard,
        None => return,
    };
    if !wizard.can_navigate() {
        return;
    }
    if let Destination::Step(target) = destination {
        if !wizard.can_jump_to(target) {
            log::warn!("⚠️ Step {} is not reachable yet", target);
            return;
        }
    }

    let kind = wizard.current_kind();
    let data = wizard.data.section(kind);
    if let Err(message) = kind.validate(&data) {
        let mut next = (*state).clone();
        if let Some(w) = next.wizard.as_mut() {
            w.apply_save_failure(message);
        }
        state.set(next);
        return;
    }

    let token = match session.bearer_token() {
        Some(token) => token,
        None => {
            session.expire.emit(());
            return;
        }
    };

    // Claim the single save slot before spawning
    let mut saving = (*state).clone();
    match saving.wizard.as_mut() {
        Some(w) => {
            if !w.begin_save() {
                return;
            }
        }
        None => return,
    }
    state.set(saving);

    let step = wizard.step_index;
    wasm_bindgen_futures::spawn_local(async move {
        let payload = json!({ (kind.api_name()): data });
        match wizard_service::save_step(&token, step, payload, true).await {
            Ok(reply) if reply.success => {
                let mut after = (*state).clone();
                let mut finished = false;
                if let Some(w) = after.wizard.as_mut() {
                    w.apply_save_success(step);
                    match destination {
                        Destination::Next => {
                            if w.is_last_step() {
                                finished = true;
                            } else {
                                w.advance_to_next();
                            }
                        }
                        Destination::Step(target) => {
                            w.jump(target);
                        }
                    }
                }
                state.set(after);

                if finished {
                    log::info!("🎉 Profile wizard completed");
                    // Best effort: a failed tagline never blocks completion
                    match wizard_service::generate_tagline(&token).await {
                        Ok(reply) if reply.success => log::info!("✅ Tagline refreshed"),
                        Ok(_) => log::warn!("⚠️ Tagline regeneration was declined"),
                        Err(e) => {
                            if session.guard(&e) {
                                return;
                            }
                            log::warn!("⚠️ Tagline regeneration failed: {}", e);
                        }
                    }
                    on_completed.emit(());
                }
            }
            Ok(reply) => {
                let message = reply.rejection_message();
                log::warn!("⚠️ Step {} was rejected: {}", step, message);
                let mut after = (*state).clone();
                if let Some(w) = after.wizard.as_mut() {
                    w.apply_save_failure(message);
                }
                state.set(after);
            }
            Err(e) => {
                let handled = session.guard(&e);
                if !handled {
                    log::error!("❌ Step {} save failed: {}", step, e);
                }
                let mut after = (*state).clone();
                if let Some(w) = after.wizard.as_mut() {
                    w.apply_save_failure(e.to_string());
                }
                state.set(after);
            }
        }
    });
}
