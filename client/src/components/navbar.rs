//! Top navigation bar with brand, links, theme toggle, and session menu.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = crate::util::dark_mode::toggle(u.dark_mode));
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"ThermoView"</a>
            <div class="navbar__links">
                <a href="/">"Dashboard"</a>
            </div>
            <div class="navbar__actions">
                <button
                    class="btn navbar__theme"
                    title="Toggle theme"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
                <Show when=move || auth.get().user.is_some()>
                    <span class="navbar__user">{user_name}</span>
                    <button class="btn" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </nav>
    }
}
