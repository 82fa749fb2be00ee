// ============================================================================
// BUYER DASHBOARD - browse the consultant directory
// ============================================================================
// The directory comes through the cached listing call; search filters the
// loaded list locally. Buyers edit their own small profile from here too.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::{BuyerProfile, SellerListing, UpdateBuyerProfileRequest};
use crate::services::profile_service;

#[function_component(BuyerDashboard)]
pub fn buyer_dashboard() -> Html {
    let session = use_session_context();
    let sellers = use_state(Vec::<SellerListing>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let query = use_state(String::new);
    let selected = use_state(|| None::<SellerListing>);
    let show_profile = use_state(|| false);
    let refresh_tick = use_state(|| 0u32);

    {
        let session = session.clone();
        let sellers = sellers.clone();
        let loading = loading.clone();
        let error = error.clone();
        let tick = *refresh_tick;

        use_effect_with(tick, move |_| {
            match session.bearer_token() {
                Some(token) => {
                    loading.set(true);
                    error.set(None);

                    wasm_bindgen_futures::spawn_local(async move {
                        // A bumped tick means the user asked for fresh data
                        match profile_service::load_sellers(&token, tick > 0).await {
                            Ok(listing) => {
                                log::info!("✅ Directory loaded: {} sellers", listing.len());
                                sellers.set(listing);
                            }
                            Err(e) => {
                                if !session.guard(&e) {
                                    log::error!("❌ Could not load the directory: {}", e);
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

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_refresh = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_: MouseEvent| refresh_tick.set(*refresh_tick + 1))
    };

    let close_details = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let open_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_: MouseEvent| show_profile.set(true))
    };
    let close_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_| show_profile.set(false))
    };
    let profile_saved = {
        let session = session.clone();
        let show_profile = show_profile.clone();
        Callback::from(move |updated: BuyerProfile| {
            session.update_display_name.emit(updated.display_name.clone());
            show_profile.set(false);
        })
    };

    let needle = query.trim().to_lowercase();
    let visible: Vec<SellerListing> = sellers
        .iter()
        .filter(|seller| matches_query(seller, &needle))
        .cloned()
        .collect();

    let cards = visible.into_iter().map(|seller| {
        let onclick = {
            let selected = selected.clone();
            let seller = seller.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(seller.clone())))
        };

        let rating_line = match seller.rating {
            Some(rating) => format!("★ {:.1} ({})", rating, seller.review_count),
            None => "New".to_string(),
        };
        let skills: Vec<Html> = seller
            .technical_skills
            .iter()
            .take(4)
            .map(|skill| html! { <span class="skill-chip">{skill.clone()}</span> })
            .collect();

        html! {
            <button type="button" class="seller-card" onclick={onclick} key={seller.id.clone()}>
                {
                    match &seller.profile_image {
                        Some(url) => html! { <img class="seller-photo" src={url.clone()} alt="" /> },
                        None => {
                            let initial = seller
                                .display_name
                                .chars()
                                .next()
                                .map(|c| c.to_uppercase().to_string())
                                .unwrap_or_else(|| "?".to_string());
                            html! { <div class="seller-photo placeholder">{initial}</div> }
                        }
                    }
                }
                <div class="seller-summary">
                    <h3>{seller.display_name.clone()}</h3>
                    <p class="seller-title">{format!("{} · {}", seller.title, seller.location)}</p>
                    {
                        if let Some(tagline) = &seller.tagline {
                            html! { <p class="seller-tagline">{tagline.clone()}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="skill-chips">{skills}</div>
                </div>
                <div class="seller-side">
                    <span class="seller-rating">{rating_line}</span>
                    {
                        if let Some(rate) = seller.hourly_rate {
                            html! { <span class="seller-rate">{format!("${}/h", rate)}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </button>
        }
    });

    html! {
        <main class="dashboard buyer-dashboard">
            <div class="directory-toolbar">
                <input
                    type="search"
                    class="directory-search"
                    placeholder="Search by name, skill or specialty"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <button class="btn-secondary" onclick={on_refresh} disabled={*loading}>
                    {if *loading { "Loading..." } else { "Refresh" }}
                </button>
                <button class="btn-secondary" onclick={open_profile}>{"My profile"}</button>
            </div>

            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }
            }

            {
                if *loading && sellers.is_empty() {
                    html! { <p class="dashboard-loading">{"Loading consultants..."}</p> }
                } else if sellers.is_empty() {
                    html! { <p class="directory-empty">{"No consultants published yet."}</p> }
                } else {
                    html! { <div class="seller-grid">{ for cards }</div> }
                }
            }

            {
                if let Some(seller) = (*selected).clone() {
                    html! { <SellerDetailsModal seller={seller} on_close={close_details} /> }
                } else {
                    html! {}
                }
            }

            {
                if *show_profile {
                    html! {
                        <BuyerProfileModal
                            on_close={close_profile}
                            on_saved={profile_saved}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </main>
    }
}

fn matches_query(seller: &SellerListing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    seller.display_name.to_lowercase().contains(needle)
        || seller.title.to_lowercase().contains(needle)
        || seller
            .technical_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
        || seller
            .services_offered
            .iter()
            .any(|service| service.to_lowercase().contains(needle))
}

#[derive(Properties, PartialEq)]
struct SellerDetailsModalProps {
    seller: SellerListing,
    on_close: Callback<()>,
}

#[function_component(SellerDetailsModal)]
fn seller_details_modal(props: &SellerDetailsModalProps) -> Html {
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let seller = &props.seller;

    let chip_list = |items: &[String]| -> Html {
        html! {
            <div class="skill-chips">
                { for items.iter().map(|item| html! { <span class="skill-chip">{item.clone()}</span> }) }
            </div>
        }
    };

    html! {
        <div class="modal active seller-details-modal">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <h2>{seller.display_name.clone()}</h2>
                    <button class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>

                <p class="seller-title">{format!("{} · {}", seller.title, seller.location)}</p>
                {
                    if let Some(tagline) = &seller.tagline {
                        html! { <p class="seller-tagline">{tagline.clone()}</p> }
                    } else {
                        html! {}
                    }
                }

                {
                    if !seller.technical_skills.is_empty() {
                        html! {
                            <section class="details-section">
                                <h3>{"Technical skills"}</h3>
                                {chip_list(&seller.technical_skills)}
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !seller.services_offered.is_empty() {
                        html! {
                            <section class="details-section">
                                <h3>{"Services offered"}</h3>
                                {chip_list(&seller.services_offered)}
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !seller.projects.is_empty() {
                        html! {
                            <section class="details-section">
                                <h3>{"Projects"}</h3>
                                <ul class="details-list">
                                    {
                                        for seller.projects.iter().map(|project| html! {
                                            <li>
                                                <strong>{project.name.clone()}</strong>
                                                {format!(" · {} · {} · {}", project.client, project.role, project.duration)}
                                            </li>
                                        })
                                    }
                                </ul>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !seller.certifications.is_empty() {
                        html! {
                            <section class="details-section">
                                <h3>{"Certifications"}</h3>
                                <ul class="details-list">
                                    {
                                        for seller.certifications.iter().map(|cert| html! {
                                            <li>
                                                <strong>{cert.name.clone()}</strong>
                                                {format!(" · {}", cert.issued_by)}
                                            </li>
                                        })
                                    }
                                </ul>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !seller.languages.is_empty() {
                        html! {
                            <section class="details-section">
                                <h3>{"Languages"}</h3>
                                <ul class="details-list">
                                    {
                                        for seller.languages.iter().map(|lang| html! {
                                            <li>{format!("{} · {}", lang.language, lang.proficiency)}</li>
                                        })
                                    }
                                </ul>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BuyerProfileModalProps {
    on_close: Callback<()>,
    on_saved: Callback<BuyerProfile>,
}

/// Fetches the buyer's own profile when opened, then saves edits through
/// the enveloped buyer endpoint.
#[function_component(BuyerProfileModal)]
fn buyer_profile_modal(props: &BuyerProfileModalProps) -> Html {
    let session = use_session_context();
    let display_name = use_state(String::new);
    let company = use_state(String::new);
    let industry = use_state(String::new);
    let location = use_state(String::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let session = session.clone();
        let display_name = display_name.clone();
        let company = company.clone();
        let industry = industry.clone();
        let location = location.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            match session.bearer_token() {
                Some(token) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match profile_service::fetch_buyer_profile(&token).await {
                            Ok(profile) => {
                                display_name.set(profile.display_name);
                                company.set(profile.company);
                                industry.set(profile.industry);
                                location.set(profile.location);
                            }
                            Err(e) => {
                                if !session.guard(&e) {
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
        let company = company.clone();
        let industry = industry.clone();
        let location = location.clone();
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
            let request = UpdateBuyerProfileRequest {
                display_name: name,
                company: company.trim().to_string(),
                industry: industry.trim().to_string(),
                location: location.trim().to_string(),
            };

            saving.set(true);
            error.set(None);

            let session = session.clone();
            let saving = saving.clone();
            let error = error.clone();
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match profile_service::update_buyer_profile(&token, &request).await {
                    Ok(updated) => {
                        log::info!("✅ Buyer profile updated");
                        on_saved.emit(updated);
                    }
                    Err(e) => {
                        if !session.guard(&e) {
                            log::error!("❌ Buyer profile update failed: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="modal active buyer-profile-modal">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content" onclick={stop}>
                <div class="modal-header">
                    <h2>{"My profile"}</h2>
                    <button class="btn-close" onclick={close_click.clone()} disabled={*saving}>{"✕"}</button>
                </div>

                {
                    if *loading {
                        html! { <p class="dashboard-loading">{"Loading..."}</p> }
                    } else {
                        html! {
                            <>
                                <div class="form-group">
                                    <label>{"Display name"}</label>
                                    <input type="text" value={(*display_name).clone()} oninput={bind_input(&display_name)} />
                                </div>
                                <div class="form-group">
                                    <label>{"Company"}</label>
                                    <input type="text" value={(*company).clone()} oninput={bind_input(&company)} />
                                </div>
                                <div class="form-group">
                                    <label>{"Industry"}</label>
                                    <input type="text" value={(*industry).clone()} oninput={bind_input(&industry)} />
                                </div>
                                <div class="form-group">
                                    <label>{"Location"}</label>
                                    <input type="text" value={(*location).clone()} oninput={bind_input(&location)} />
                                </div>
                            </>
                        }
                    }
                }

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
                    <button class="btn-primary" onclick={on_save} disabled={*saving || *loading}>
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
