//! Overview page — the authenticated landing route.

use leptos::prelude::*;

use crate::components::nav::TopNav;
use crate::state::auth::AuthState;
use crate::state::ui::Section;

/// Landing page with cards linking to each admin section.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    super::redirect_unauthenticated();

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="page">
                <TopNav active=Section::Overview/>
                <div class="overview__cards">
                    {Section::all()
                        .into_iter()
                        .filter(|s| *s != Section::Overview)
                        .map(|section| {
                            view! {
                                <a class="overview__card" href=section.path()>
                                    <h2>{section.label()}</h2>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Show>
    }
}
