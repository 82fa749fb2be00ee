use yew::prelude::*;

use crate::hooks::use_session_context;

/// Top bar shared by every dashboard: brand, who is signed in, and a small
/// menu with the sign-out action.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session_context();
    let show_menu = use_state(|| false);

    let toggle_menu = {
        let show_menu = show_menu.clone();
        Callback::from(move |_: MouseEvent| show_menu.set(!*show_menu))
    };

    let on_logout = {
        let logout = session.logout.clone();
        let show_menu = show_menu.clone();
        Callback::from(move |_: MouseEvent| {
            show_menu.set(false);
            logout.emit(());
        })
    };

    let user_line = match session.state.user.as_ref() {
        Some(user) => format!("{} · {}", user.display_name, user.role.label()),
        None => String::new(),
    };

    html! {
        <header class="app-header">
            <h1>{"ConsultBridge"}</h1>
            <div class="header-actions">
                <span class="header-user">{user_line}</span>
                <button class="btn-settings" onclick={toggle_menu}>
                    {"⚙️"}
                </button>
                {
                    if *show_menu {
                        html! {
                            <div class="header-menu">
                                <button class="menu-item" onclick={on_logout}>
                                    {"Sign out"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
