//! ElevenLabs credential pool administration.

#[cfg(test)]
#[path = "elevenlabs_pool_test.rs"]
mod elevenlabs_pool_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::net::types::{AgentSyncReport, ElevenLabsCredential, PoolHealthReport};
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;

fn health_summary(report: &PoolHealthReport) -> String {
    format!("{} of {} credentials healthy", report.healthy, report.checked)
}

fn sync_summary(report: &AgentSyncReport) -> String {
    format!("Synced {} agents", report.agents_synced)
}

/// Credential pool page — list, add, remove, test, health-check, sync.
#[component]
pub fn ElevenLabsPoolPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let pool = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::ELEVENLABS_POOL);
        crate::net::api::fetch_pool_credentials()
    });

    let show_add = RwSignal::new(false);
    let new_label = RwSignal::new(String::new());
    let new_api_key = RwSignal::new(String::new());

    let delete_target = RwSignal::new(None::<ElevenLabsCredential>);
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let pool_busy = RwSignal::new(false);

    let submit_add = Callback::new(move |()| {
        let label = new_label.get().trim().to_owned();
        let api_key = new_api_key.get().trim().to_owned();
        if label.is_empty() || api_key.is_empty() {
            toasts.update(|t| {
                t.push_error("Label and API key are required");
            });
            return;
        }
        show_add.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_pool_credential(&label, &api_key).await {
                    Ok(created) => {
                        queries.update(|q| q.invalidate(keys::ELEVENLABS_POOL));
                        toasts.update(|t| {
                            t.push_success(format!("Added credential \"{}\"", created.label));
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
            let _ = (label, api_key);
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(credential) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_pool_credential(&credential.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(keys::ELEVENLABS_POOL));
                        toasts.update(|t| {
                            t.push_success(format!("Removed \"{}\"", credential.label));
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
            let _ = credential;
        }
    });

    let test_credential = Callback::new(move |credential: ElevenLabsCredential| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::test_pool_credential(&credential.id).await {
                    Ok(result) if result.ok => {
                        toasts.update(|t| {
                            t.push_success(format!("\"{}\": {}", credential.label, result.message));
                        });
                    }
                    Ok(result) => {
                        toasts.update(|t| {
                            t.push_error(format!("\"{}\": {}", credential.label, result.message));
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
            let _ = credential;
        }
    });

    let run_health_check = Callback::new(move |()| {
        pool_busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::run_pool_health_check().await {
                    Ok(report) => {
                        queries.update(|q| q.invalidate(keys::ELEVENLABS_POOL));
                        toasts.update(|t| {
                            t.push_success(health_summary(&report));
                        });
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
                pool_busy.set(false);
            });
        }
    });

    let run_sync = Callback::new(move |()| {
        pool_busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::sync_pool_agents().await {
                    Ok(report) => {
                        queries.update(|q| q.invalidate(keys::ELEVENLABS_POOL));
                        toasts.update(|t| {
                            t.push_success(sync_summary(&report));
                        });
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
                pool_busy.set(false);
            });
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::ElevenLabsPool/>
            <header class="page__header">
                <h1>"ElevenLabs Pool"</h1>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add credential"
                </button>
                <button class="btn" disabled=move || pool_busy.get() on:click=move |_| run_health_check.run(())>
                    "Health check"
                </button>
                <button class="btn" disabled=move || pool_busy.get() on:click=move |_| run_sync.run(())>
                    "Sync agents"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading pool..."</p> }>
                {move || {
                    pool.get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"The pool is empty."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Label"</th>
                                                <th>"Key"</th>
                                                <th>"Agents"</th>
                                                <th>"Health"</th>
                                                <th>"Checked"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|credential| {
                                                    let test_cred = credential.clone();
                                                    let delete_cred = credential.clone();
                                                    let health = match credential.healthy {
                                                        Some(true) => "healthy",
                                                        Some(false) => "unhealthy",
                                                        None => "unchecked",
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{credential.label.clone()}</td>
                                                            <td class="data-table__mono">{credential.api_key_masked.clone()}</td>
                                                            <td>{credential.agent_count}</td>
                                                            <td class=format!("pool-health pool-health--{health}")>{health}</td>
                                                            <td>
                                                                {credential
                                                                    .last_checked_at
                                                                    .as_deref()
                                                                    .map(crate::util::format::short_date)
                                                                    .unwrap_or("never")
                                                                    .to_owned()}
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| test_credential.run(test_cred.clone())
                                                                >
                                                                    "Test"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| delete_target.set(Some(delete_cred.clone()))
                                                                >
                                                                    "Remove"
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

            <Show when=move || show_add.get()>
                <div class="dialog-backdrop" on:click=move |_| show_add.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Add Credential"</h2>
                        <label class="dialog__label">
                            "Label"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || new_label.get()
                                on:input=move |ev| new_label.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "API key"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || new_api_key.get()
                                on:input=move |ev| new_api_key.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_add.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| submit_add.run(())>
                                "Add"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                delete_target
                    .get()
                    .map(|credential| {
                        let message = format!(
                            "Agents provisioned under \"{}\" will stop working until reassigned.",
                            credential.label
                        );
                        view! {
                            <ConfirmDialog
                                title="Remove Credential"
                                message=message
                                confirm_label="Remove"
                                on_cancel=on_delete_cancel
                                on_confirm=on_delete_confirm
                            />
                        }
                    })
            }}
        </div>
    }
}
