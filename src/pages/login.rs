//! Login page with an email + password form.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Login page — posts credentials and redirects to the overview on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(user) => {
                        auth.update(|a| a.user = Some(user));
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/");
                        }
                    }
                    Err(message) => {
                        pending.set(false);
                        error.set(Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth, pending);
        }
    });

    view! {
        <div class="login-page">
            <h1>"VoiceDash"</h1>
            <p>"Voice-call automation dashboard"</p>
            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
