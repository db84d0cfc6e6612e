//! Top navigation bar shared by every authenticated page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{Section, UiState};

/// Top bar with section links, dark-mode toggle, and logout.
#[component]
pub fn TopNav(active: Section) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let self_name = move || auth.get().user.map(|u| u.name).unwrap_or_else(|| "me".to_owned());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="topnav">
            <span class="topnav__brand">"VoiceDash"</span>
            <nav class="topnav__sections">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        let is_active = section == active;
                        view! {
                            <a
                                href=section.path()
                                class="topnav__link"
                                class:topnav__link--active=is_active
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <span class="topnav__spacer"></span>

            <button
                class="btn topnav__dark-toggle"
                on:click=move |_| {
                    let next = !ui.get().dark_mode;
                    crate::util::dark_mode::set(next);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="topnav__self">{self_name}</span>

            <button class="btn topnav__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
