// ============================================================================
// APP - root component
// ============================================================================
// The session context wraps everything; the shell below it picks the view:
// sign-in when no session, otherwise the dashboard for the user's role.
// When the session guard fires, the expiring session drops a moment later
// and this shell falls back to the sign-in view on its own.
// ============================================================================

use yew::prelude::*;

use crate::components::admin_dashboard::AdminDashboard;
use crate::components::buyer_dashboard::BuyerDashboard;
use crate::components::header::Header;
use crate::components::login_screen::LoginScreen;
use crate::components::seller_dashboard::SellerDashboard;
use crate::components::toast::Toast;
use crate::hooks::{use_session_context, SessionContextProvider};
use crate::models::Role;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <AppShell />
        </SessionContextProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session_context();

    let toast = match session.state.notice.clone() {
        Some(message) => html! {
            <Toast message={message} on_dismiss={session.dismiss_notice.clone()} />
        },
        None => html! {},
    };

    if !session.state.is_logged_in() {
        return html! {
            <>
                <LoginScreen />
                {toast}
            </>
        };
    }

    let view = match session.state.role() {
        Some(Role::Seller) => html! { <SellerDashboard /> },
        Some(Role::Buyer) => html! { <BuyerDashboard /> },
        Some(Role::Admin) => html! { <AdminDashboard /> },
        None => html! {},
    };

    html! {
        <>
            <Header />
            {view}
            {toast}
        </>
    }
}
