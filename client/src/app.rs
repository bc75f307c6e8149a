//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use assistant::CompletionConfig;

use crate::pages::{dashboard::DashboardPage, inspection::InspectionPage, login::LoginPage};
use crate::state::{auth::AuthState, chat::ChatWidgetState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. The
/// completion credential is injected here once; surfaces see `None` and hide
/// their AI features when no key was configured at build time.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatWidgetState::default());
    let completion_config = CompletionConfig::from_key(option_env!("GROQ_API_KEY"));

    provide_context(auth);
    provide_context(ui);
    provide_context(chat);
    provide_context(completion_config);

    // Resolve the session user once on mount; route guards wait on `loading`.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    // Apply the persisted theme before the first paint the user sees.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/thermoview.css"/>
        <Title text="ThermoView"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("inspection"), ParamSegment("id")) view=InspectionPage/>
            </Routes>
        </Router>
    }
}
