// ============================================================================
// PHOTO UPLOADER - profile image with immediate upload
// ============================================================================
// Picking a file uploads it right away; the profile picture is not part of
// any wizard step. The parent swaps the displayed URL on success.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::services::profile_service;

#[derive(Properties, PartialEq)]
pub struct PhotoUploaderProps {
    pub image_url: Option<String>,
    pub display_name: String,
    pub on_uploaded: Callback<String>,
}

#[function_component(PhotoUploader)]
pub fn photo_uploader(props: &PhotoUploaderProps) -> Html {
    let session = use_session_context();
    let input_ref = use_node_ref();
    let uploading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_change = {
        let session = session.clone();
        let uploading = uploading.clone();
        let error = error.clone();
        let on_uploaded = props.on_uploaded.clone();

        Callback::from(move |e: Event| {
            let input = match e.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input,
                None => return,
            };
            let file = input.files().and_then(|files| files.get(0));
            // Reset so picking the same file again still fires a change
            input.set_value("");
            let file = match file {
                Some(file) => file,
                None => return,
            };
            let token = match session.bearer_token() {
                Some(token) => token,
                None => {
                    session.expire.emit(());
                    return;
                }
            };

            uploading.set(true);
            error.set(None);

            let session = session.clone();
            let uploading = uploading.clone();
            let error = error.clone();
            let on_uploaded = on_uploaded.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match profile_service::upload_profile_image(&token, file).await {
                    Ok(reply) => {
                        log::info!("✅ Profile image updated");
                        on_uploaded.emit(reply.profile_image);
                    }
                    Err(e) => {
                        if !session.guard(&e) {
                            log::error!("❌ Image upload failed: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                }
                uploading.set(false);
            });
        })
    };

    let avatar = match &props.image_url {
        Some(url) => html! {
            <img class="avatar-image" src={url.clone()} alt="Profile photo" />
        },
        None => {
            let initial = props
                .display_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            html! { <div class="avatar-placeholder">{initial}</div> }
        }
    };

    html! {
        <div class="photo-uploader">
            <div class="avatar">
                {avatar}
                <button type="button" class="btn-camera" onclick={open_picker} disabled={*uploading}>
                    {if *uploading { "⏳" } else { "📷" }}
                </button>
            </div>
            <input
                type="file"
                accept="image/*"
                class="file-input-hidden"
                ref={input_ref}
                onchange={on_change}
            />
            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
