// ============================================================================
// USE SESSION HOOK - sign-in state, persistence, session guard
// ============================================================================
// The only code in the app that touches the persisted session record. Every
// other module sees sessions through this handle, and every authenticated
// flow reports 401s back to it through `guard`.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::StoredSession;
use crate::services::auth_service;
use crate::services::http::ApiError;
use crate::stores::SessionStore;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

const EXPIRY_NOTICE: &str = "Your session has expired. Please sign in again.";

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    /// Session guard entry point: clears the stored session, shows the
    /// notice, and schedules the fallback to the sign-in view.
    pub expire: Callback<()>,
    pub update_display_name: Callback<String>,
    pub dismiss_notice: Callback<()>,
}

impl UseSessionHandle {
    pub fn bearer_token(&self) -> Option<String> {
        self.state.bearer_token()
    }

    /// Route an API failure through the guard. Returns true when it was an
    /// authentication rejection and the guard took over; callers stop
    /// rendering errors in that case.
    pub fn guard(&self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            self.expire.emit(());
            true
        } else {
            false
        }
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(SessionStore::default);

    // Restore a persisted session once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = load_from_storage::<StoredSession>(STORAGE_KEY_SESSION) {
                log::info!("✅ Session restored for {}", saved.user.display_name);
                state.set(SessionStore::from_stored(saved));
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let mut pending = (*state).clone();
            pending.loading = true;
            pending.error = None;
            state.set(pending);

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email, &password).await {
                    Ok(response) if response.success => {
                        match (response.token, response.user) {
                            (Some(token), Some(user)) => {
                                let stored = StoredSession {
                                    token: token.clone(),
                                    user: user.clone(),
                                };
                                if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &stored) {
                                    log::error!("❌ Could not persist the session: {}", e);
                                }
                                log::info!("✅ Signed in as {} ({})", user.display_name, user.role.label());
                                state.set(SessionStore::signed_in(token, user));
                            }
                            _ => {
                                log::error!("❌ Sign-in reply was missing token or user");
                                let mut failed = (*state).clone();
                                failed.loading = false;
                                failed.error = Some("Unexpected reply from the server".to_string());
                                state.set(failed);
                            }
                        }
                    }
                    Ok(response) => {
                        let message = response
                            .error
                            .and_then(|e| e.message)
                            .unwrap_or_else(|| "Invalid email or password".to_string());
                        log::warn!("⚠️ Sign-in rejected: {}", message);
                        let mut failed = (*state).clone();
                        failed.loading = false;
                        failed.error = Some(message);
                        state.set(failed);
                    }
                    Err(e) => {
                        log::error!("❌ Sign-in failed: {}", e);
                        let mut failed = (*state).clone();
                        failed.loading = false;
                        failed.error = Some(e.to_string());
                        state.set(failed);
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let _ = remove_from_storage(STORAGE_KEY_SESSION);
            log::info!("👋 Signed out");
            state.set(SessionStore::default());
        })
    };

    let expire = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.expiring {
                // A redirect is already scheduled
                return;
            }
            log::warn!("⚠️ Session rejected by the backend, returning to sign-in");
            let _ = remove_from_storage(STORAGE_KEY_SESSION);

            let mut current = (*state).clone();
            current.begin_expiry(EXPIRY_NOTICE);
            state.set(current);

            let state = state.clone();
            Timeout::new(CONFIG.ui_config.session_redirect_delay_ms, move || {
                let mut after = (*state).clone();
                after.finish_expiry();
                state.set(after);
            })
            .forget();
        })
    };

    let update_display_name = {
        let state = state.clone();
        Callback::from(move |name: String| {
            let mut current = (*state).clone();
            current.set_display_name(name);
            // Keep the persisted record in step with the cached user
            if let Some(stored) = current.to_stored() {
                if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &stored) {
                    log::error!("❌ Could not persist the session: {}", e);
                }
            }
            state.set(current);
        })
    };

    let dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current = (*state).clone();
            current.notice = None;
            state.set(current);
        })
    };

    UseSessionHandle {
        state,
        login,
        logout,
        expire,
        update_display_name,
        dismiss_notice,
    }
}
