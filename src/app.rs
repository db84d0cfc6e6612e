//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Every page reads shared state (`AuthState`, `UiState`, `ToastState`,
//! `QueryClient`) from context signals provided here. Routes map one-to-one
//! onto the admin sections of the platform.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    api_keys::ApiKeysPage, banned_words::BannedWordsPage, calls::CallsPage, dashboard::DashboardPage,
    elevenlabs_pool::ElevenLabsPoolPage, flows::FlowsPage, login::LoginPage, phone_numbers::PhoneNumbersPage,
    system_settings::SystemSettingsPage, widgets::WidgetsPage,
};
use crate::state::{auth::AuthState, query::QueryClient, toast::ToastState, ui::UiState};

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let queries = RwSignal::new(QueryClient::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(queries);

    // Resolve the current session once on mount.
    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    // Resolve and apply the theme before first paint.
    #[cfg(feature = "hydrate")]
    {
        let prefer_dark = crate::util::dark_mode::initial();
        ui.update(|u| u.dark_mode = prefer_dark);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/voicedash.css"/>
        <Title text="VoiceDash"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("api-keys") view=ApiKeysPage/>
                <Route path=StaticSegment("banned-words") view=BannedWordsPage/>
                <Route path=StaticSegment("elevenlabs-pool") view=ElevenLabsPoolPage/>
                <Route path=StaticSegment("settings") view=SystemSettingsPage/>
                <Route path=StaticSegment("calls") view=CallsPage/>
                <Route path=(StaticSegment("calls"), ParamSegment("id")) view=CallsPage/>
                <Route path=StaticSegment("phone-numbers") view=PhoneNumbersPage/>
                <Route path=StaticSegment("widgets") view=WidgetsPage/>
                <Route path=(StaticSegment("widgets"), ParamSegment("id")) view=WidgetsPage/>
                <Route path=StaticSegment("flows") view=FlowsPage/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
