// ============================================================================
// TOAST - transient notice banner
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Fixed banner that dismisses itself after a few seconds. The session
/// guard's expiry notice renders through this.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout = Timeout::new(CONFIG.ui_config.toast_dismiss_ms, move || {
                on_dismiss.emit(());
            });
            move || drop(timeout)
        });
    }

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" onclick={on_click}>
            <span class="toast-icon">{"⚠️"}</span>
            <span class="toast-message">{props.message.clone()}</span>
        </div>
    }
}
