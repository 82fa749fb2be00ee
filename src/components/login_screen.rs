use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.trim().is_empty() || password.is_empty() {
                    return;
                }

                login.emit((email.trim().to_string(), password));
            }
        })
    };

    let loading = session.state.loading;
    let error = session.state.error.clone();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🤝"}</div>
                    </div>
                    <h1>{"ConsultBridge"}</h1>
                    <p>{"ERP consulting, matched"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@company.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    {
                        if let Some(message) = error {
                            html! { <p class="form-error">{message}</p> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="btn-login" disabled={loading}>
                        <span class="btn-text">
                            {if loading { "Signing in..." } else { "Sign in" }}
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
