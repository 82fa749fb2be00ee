// ============================================================================
// SELLER DASHBOARD - profile home for consultants
// ============================================================================
// Loads the seller profile and the wizard snapshot together; the snapshot
// drives both the completion banner and the per-section cards. Every
// mutation (wizard finish, section save, photo, basic info) bumps a
// refresh counter that refetches both.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::photo_uploader::PhotoUploader;
use crate::components::profile_wizard::ProfileWizard;
use crate::components::section_editor::SectionEditor;
use crate::hooks::{use_section_editor, use_session_context};
use crate::models::sections::SectionKind;
use crate::models::wizard::WizardStateResponse;
use crate::models::{SellerProfile, UpdateSellerProfileRequest};
use crate::services::{profile_service, wizard_service};
use crate::stores::WizardData;

#[function_component(SellerDashboard)]
pub fn seller_dashboard() -> Html {
    let session = use_session_context();
    let profile = use_state(|| None::<SellerProfile>);
    let snapshot = use_state(|| None::<WizardStateResponse>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let show_wizard = use_state(|| false);
    let show_basic_info = use_state(|| false);
    let refresh_tick = use_state(|| 0u32);

    // Fetch profile + wizard snapshot whenever the tick bumps
    {
        let session = session.clone();
        let profile = profile.clone();
        let snapshot = snapshot.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(*refresh_tick, move |_| {
            match session.bearer_token() {
                Some(token) => {
                    loading.set(true);
                    error.set(None);

                    wasm_bindgen_futures::spawn_local(async move {
                        match profile_service::fetch_seller_profile(&token).await {
                            Ok(fetched) => profile.set(Some(fetched)),
                            Err(e) => {
                                if !session.guard(&e) {
                                    log::error!("❌ Could not load the seller profile: {}", e);
                                    error.set(Some(e.to_string()));
                                }
                                loading.set(false);
                                return;
                            }
                        }
                        match wizard_service::fetch_wizard_state(&token).await {
                            Ok(fetched) => snapshot.set(Some(fetched)),
                            Err(e) => {
                                if !session.guard(&e) {
                                    log::error!("❌ Could not load the profile sections: {}", e);
                                    error.set(Some(e.to_string()));
                                }
                            }
                        }
                        loading.set(false);
                    });
                }
                None => session.expire.emit(()),
            }
            || ()
        });
    }

    let refresh = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_: ()| refresh_tick.set(*refresh_tick + 1))
    };

    // Standalone per-section editing
    let editor = use_section_editor({
        let refresh = refresh.clone();
        Callback::from(move |_kind: SectionKind| refresh.emit(()))
    });

    let open_wizard = {
        let show_wizard = show_wizard.clone();
        Callback::from(move |_: MouseEvent| show_wizard.set(true))
    };
    let close_wizard = {
        let show_wizard = show_wizard.clone();
        Callback::from(move |_| show_wizard.set(false))
    };
    let wizard_completed = {
        let show_wizard = show_wizard.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            show_wizard.set(false);
            refresh.emit(());
        })
    };

    let on_photo_uploaded = {
        let profile = profile.clone();
        Callback::from(move |url: String| {
            if let Some(mut current) = (*profile).clone() {
                current.profile_image = Some(url);
                profile.set(Some(current));
            }
        })
    };

    let open_basic_info = {
        let show_basic_info = show_basic_info.clone();
        Callback::from(move |_: MouseEvent| show_basic_info.set(true))
    };
    let close_basic_info = {
        let show_basic_info = show_basic_info.clone();
        Callback::from(move |_| show_basic_info.set(false))
    };
    let basic_info_saved = {
        let profile = profile.clone();
        let show_basic_info = show_basic_info.clone();
        let session = session.clone();
        Callback::from(move |updated: SellerProfile| {
            session.update_display_name.emit(updated.display_name.clone());
            profile.set(Some(updated));
            show_basic_info.set(false);
        })
    };

    let open_section = {
        let snapshot = snapshot.clone();
        let open_for = editor.open_for.clone();
        Callback::from(move |kind: SectionKind| {
            let current = snapshot
                .as_ref()
                .map(|snap| WizardData::from_remote(snap).section(kind));
            open_for.emit((kind, current));
        })
    };

    if *loading && profile.is_none() {
        return html! {
            <main class="dashboard">
                <p class="dashboard-loading">{"Loading your profile..."}</p>
            </main>
        };
    }

    if let Some(message) = (*error).clone() {
        if profile.is_none() {
            let retry = {
                let refresh = refresh.clone();
                Callback::from(move |_: MouseEvent| refresh.emit(()))
            };
            return html! {
                <main class="dashboard">
                    <div class="dashboard-error">
                        <p class="form-error">{message}</p>
                        <button class="btn-secondary" onclick={retry}>{"Try again"}</button>
                    </div>
                </main>
            };
        }
    }

    html! {
        <main class="dashboard seller-dashboard">
            {
                if let Some(current) = (*profile).clone() {
                    render_hero(&current, on_photo_uploaded, open_basic_info)
                } else {
                    html! {}
                }
            }

            {
                if let Some(snap) = (*snapshot).clone() {
                    render_completion_banner(&snap, open_wizard.clone())
                } else {
                    html! {}
                }
            }

            {
                if let Some(snap) = (*snapshot).clone() {
                    render_section_cards(&snap, open_section)
                } else {
                    html! {}
                }
            }

            {
                if *show_wizard {
                    html! {
                        <ProfileWizard
                            on_close={close_wizard}
                            on_completed={wizard_completed}
                        />
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(draft) = (*editor.draft).clone() {
                    html! {
                        <SectionEditor
                            draft={draft}
                            on_close={editor.close.clone()}
                            on_save={editor.save.clone()}
                            on_set_text={editor.set_text.clone()}
                            on_add_item={editor.add_item.clone()}
                            on_remove_item={editor.remove_item.clone()}
                            on_set_entry={editor.set_entry.clone()}
                            on_set_record_field={editor.set_record_field.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }

            {
                if *show_basic_info {
                    if let Some(current) = (*profile).clone() {
                        html! {
                            <BasicInfoModal
                                profile={current}
                                on_close={close_basic_info}
                                on_saved={basic_info_saved}
                            />
                        }
                    } else {
                        html! {}
                    }
                } else {
                    html! {}
                }
            }
        </main>
    }
}

fn render_hero(
    profile: &SellerProfile,
    on_photo_uploaded: Callback<String>,
    open_basic_info: Callback<MouseEvent>,
) -> Html {
    let rating_line = match profile.rating {
        Some(rating) => format!("★ {:.1} ({} reviews)", rating, profile.review_count),
        None => "No reviews yet".to_string(),
    };
    let rate_line = profile
        .hourly_rate
        .map(|rate| format!("${}/h", rate))
        .unwrap_or_else(|| "Rate not set".to_string());

    html! {
        <section class="hero-card">
            <PhotoUploader
                image_url={profile.profile_image.clone()}
                display_name={profile.display_name.clone()}
                on_uploaded={on_photo_uploaded}
            />
            <div class="hero-details">
                <h2>{&profile.display_name}</h2>
                <p class="hero-title">{format!("{} · {}", profile.title, profile.location)}</p>
                {
                    if let Some(tagline) = &profile.tagline {
                        html! { <p class="hero-tagline">{tagline.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="hero-meta">{format!("{} · {}", rating_line, rate_line)}</p>
            </div>
            <button class="btn-secondary" onclick={open_basic_info}>{"Edit"}</button>
        </section>
    }
}

fn render_completion_banner(snapshot: &WizardStateResponse, open_wizard: Callback<MouseEvent>) -> Html {
    let completed = snapshot
        .completed_steps
        .iter()
        .filter(|step| **step < SectionKind::COUNT)
        .count();
    let percent = (completed * 100) / SectionKind::COUNT;

    if completed >= SectionKind::COUNT {
        return html! {};
    }

    html! {
        <section class="completion-banner">
            <div class="completion-text">
                <strong>{format!("Your profile is {}% complete", percent)}</strong>
                <p>{"Buyers see complete profiles first. Finish yours in a few minutes."}</p>
            </div>
            <button class="btn-primary" onclick={open_wizard}>
                {if completed == 0 { "Set up profile" } else { "Resume setup" }}
            </button>
        </section>
    }
}

fn render_section_cards(
    snapshot: &WizardStateResponse,
    open_section: Callback<SectionKind>,
) -> Html {
    let data = WizardData::from_remote(snapshot);

    let cards = SectionKind::ALL.iter().map(|kind| {
        let kind = *kind;
        let section = data.section(kind);
        let subtitle = match kind {
            SectionKind::ProfessionalSummary => {
                if section.is_empty() {
                    "Not written yet".to_string()
                } else {
                    section.as_text().unwrap_or_default().to_string()
                }
            }
            _ => {
                let count = section.len();
                if count == 1 {
                    "1 item".to_string()
                } else {
                    format!("{} items", count)
                }
            }
        };

        let onclick = {
            let open_section = open_section.clone();
            Callback::from(move |_: MouseEvent| open_section.emit(kind))
        };

        html! {
            <button type="button" class="section-card" onclick={onclick} key={kind.step_index()}>
                <h3>{kind.title()}</h3>
                <p class="section-card-subtitle">{subtitle}</p>
                <span class="section-card-action">{"Edit ›"}</span>
            </button>
        }
    });

    html! {
        <section class="section-grid">
            { for cards }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BasicInfoModalProps {
    profile: SellerProfile,
    on_close: Callback<()>,
    on_saved: Callback<SellerProfile>,
}

/// Name, headline, location and rate in one small form. Saves through the
/// flat seller profile endpoint.
#[function_component(BasicInfoModal)]
fn basic_info_modal(props: &BasicInfoModalProps) -> Html {
    let session = use_session_context();
    let display_name = use_state(|| props.profile.display_name.clone());
    let title = use_state(|| props.profile.title.clone());
    let location = use_state(|| props.profile.location.clone());
    let hourly_rate = use_state(|| {
        props
            .profile
            .hourly_rate
            .map(|rate| rate.to_string())
            .unwrap_or_default()
    });
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let on_close = props.on_close.clone();
        let saving = saving.clone();
        // Overlay, ✕ and Cancel may not dismiss the modal mid-save
        Callback::from(move |_: MouseEvent| {
            if !*saving {
                on_close.emit(());
            }
        })
    };

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_save = {
        let session = session.clone();
        let display_name = display_name.clone();
        let title = title.clone();
        let location = location.clone();
        let hourly_rate = hourly_rate.clone();
        let saving = saving.clone();
        let error = error.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let name = display_name.trim().to_string();
            if name.is_empty() {
                error.set(Some("Display name cannot be empty".to_string()));
                return;
            }
            let token = match session.bearer_token() {
                Some(token) => token,
                None => {
                    session.expire.emit(());
                    return;
                }
            };
            let request = UpdateSellerProfileRequest {
                display_name: name,
                title: title.trim().to_string(),
                location: location.trim().to_string(),
                hourly_rate: hourly_rate.trim().parse::<u32>().ok(),
            };

            saving.set(true);
            error.set(None);

            let session = session.clone();
            let saving = saving.clone();
            let error = error.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match profile_service::update_seller_profile(&token, &request).await {
                    Ok(updated) => {
                        log::info!("✅ Seller profile updated");
                        on_saved.emit(updated);
                    }
                    Err(e) => {
                        if !session.guard(&e) {
                            log::error!("❌ Profile update failed: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="modal active basic-info-modal">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <h2>{"Edit basic info"}</h2>
                    <button class="btn-close" onclick={close_click.clone()} disabled={*saving}>{"✕"}</button>
                </div>

                <div class="form-group">
                    <label>{"Display name"}</label>
                    <input type="text" value={(*display_name).clone()} oninput={bind_input(&display_name)} />
                </div>
                <div class="form-group">
                    <label>{"Headline"}</label>
                    <input type="text" value={(*title).clone()} oninput={bind_input(&title)} />
                </div>
                <div class="form-group">
                    <label>{"Location"}</label>
                    <input type="text" value={(*location).clone()} oninput={bind_input(&location)} />
                </div>
                <div class="form-group">
                    <label>{"Hourly rate (USD)"}</label>
                    <input type="number" min="0" value={(*hourly_rate).clone()} oninput={bind_input(&hourly_rate)} />
                </div>

                {
                    if let Some(message) = (*error).clone() {
                        html! { <p class="form-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }

                <div class="modal-footer">
                    <button class="btn-secondary" onclick={close_click} disabled={*saving}>
                        {"Cancel"}
                    </button>
                    <button class="btn-primary" onclick={on_save} disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
