// ============================================================================
// SESSION CONTEXT - share the session handle across the tree
// ============================================================================
// One use_session instance lives in the provider at the app root; everything
// below consumes it through use_session_context. No component manages its
// own copy of the session.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// Fetch the shared session handle. Panics when no provider is mounted,
/// which is a wiring bug, not a runtime condition.
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("SessionContextProvider is not mounted")
}
