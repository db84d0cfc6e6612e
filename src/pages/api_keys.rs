//! API key administration table.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::net::types::ApiKey;
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;
use crate::util::format::{mask_key, short_date};

/// API keys page — list, enable/disable, and revoke keys.
#[component]
pub fn ApiKeysPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let api_keys = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::API_KEYS);
        crate::net::api::fetch_api_keys()
    });

    // Two-step revoke: the row records intent, the dialog confirms it.
    let revoke_target = RwSignal::new(None::<ApiKey>);
    let on_revoke_cancel = Callback::new(move |()| revoke_target.set(None));
    let on_revoke_confirm = Callback::new(move |()| {
        let Some(key) = revoke_target.get_untracked() else {
            return;
        };
        revoke_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_api_key(&key.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(keys::API_KEYS));
                        toasts.update(|t| {
                            t.push_success(format!("Revoked key \"{}\"", key.name));
                        });
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    });

    let toggle_active = Callback::new(move |key: ApiKey| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_api_key(&key.id, !key.active, key.rate_limit_per_minute).await {
                    Ok(updated) => {
                        queries.update(|q| q.invalidate(keys::API_KEYS));
                        let verb = if updated.active { "Enabled" } else { "Disabled" };
                        toasts.update(|t| {
                            t.push_success(format!("{verb} key \"{}\"", updated.name));
                        });
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::ApiKeys/>
            <h1>"API Keys"</h1>

            <Suspense fallback=move || view! { <p>"Loading keys..."</p> }>
                {move || {
                    api_keys
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No API keys issued."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Key"</th>
                                                <th>"Rate limit"</th>
                                                <th>"Created"</th>
                                                <th>"Last used"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|key| {
                                                    let toggle_key = key.clone();
                                                    let revoke_key = key.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{key.name.clone()}</td>
                                                            <td class="data-table__mono">{mask_key(&key.key_prefix)}</td>
                                                            <td>{format!("{}/min", key.rate_limit_per_minute)}</td>
                                                            <td>{short_date(&key.created_at).to_owned()}</td>
                                                            <td>{key.last_used_at.as_deref().map(short_date).unwrap_or("never").to_owned()}</td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small"
                                                                    class:btn--active=key.active
                                                                    on:click=move |_| toggle_active.run(toggle_key.clone())
                                                                >
                                                                    {if key.active { "Active" } else { "Disabled" }}
                                                                </button>
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| revoke_target.set(Some(revoke_key.clone()))
                                                                >
                                                                    "Revoke"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                revoke_target
                    .get()
                    .map(|key| {
                        let message = format!(
                            "Requests signed with \"{}\" will be rejected immediately. This cannot be undone.",
                            key.name
                        );
                        view! {
                            <ConfirmDialog
                                title="Revoke API Key"
                                message=message
                                confirm_label="Revoke"
                                on_cancel=on_revoke_cancel
                                on_confirm=on_revoke_confirm
                            />
                        }
                    })
            }}
        </div>
    }
}
