//! System settings form with batch save.

#[cfg(test)]
#[path = "system_settings_test.rs"]
mod system_settings_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::nav::TopNav;
use crate::net::types::SystemSetting;
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;
use crate::util::format::batch_summary;

/// Entries whose edited value differs from the stored one, in stored order.
/// Edits matching the stored value are not dirty, so saving is idempotent.
fn dirty_entries(settings: &[SystemSetting], edits: &HashMap<String, String>) -> Vec<(String, String)> {
    settings
        .iter()
        .filter_map(|setting| {
            let edited = edits.get(&setting.key)?;
            if *edited == setting.value {
                None
            } else {
                Some((setting.key.clone(), edited.clone()))
            }
        })
        .collect()
}

/// Settings page — edit values inline, then save all changes at once.
/// Partial failures are reported per-item, not all-or-nothing.
#[component]
pub fn SystemSettingsPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let settings = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::SYSTEM_SETTINGS);
        crate::net::api::fetch_system_settings()
    });

    let edits = RwSignal::new(HashMap::<String, String>::new());
    let saving = RwSignal::new(false);

    let dirty_count = move || {
        settings
            .get()
            .and_then(Result::ok)
            .map(|list| dirty_entries(&list, &edits.get()).len())
            .unwrap_or(0)
    };

    let save_all = Callback::new(move |()| {
        let Some(Ok(list)) = settings.get() else {
            return;
        };
        let pending = dirty_entries(&list, &edits.get_untracked());
        if pending.is_empty() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let mut saved = 0;
                let mut failed = 0;
                for (key, value) in pending {
                    match crate::net::api::update_setting(&key, &value).await {
                        Ok(()) => saved += 1,
                        Err(message) => {
                            failed += 1;
                            toasts.update(|t| {
                                t.push_error(format!("{key}: {message}"));
                            });
                        }
                    }
                }
                queries.update(|q| q.invalidate(keys::SYSTEM_SETTINGS));
                let summary = batch_summary(saved, failed);
                toasts.update(|t| {
                    if failed == 0 {
                        t.push_success(summary);
                    } else {
                        t.push_error(summary);
                    }
                });
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pending;
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::Settings/>
            <header class="page__header">
                <h1>"System Settings"</h1>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get() || dirty_count() == 0
                    on:click=move |_| save_all.run(())
                >
                    {move || {
                        if saving.get() {
                            "Saving...".to_owned()
                        } else {
                            let dirty = dirty_count();
                            if dirty == 0 { "Saved".to_owned() } else { format!("Save {dirty} changes") }
                        }
                    }}
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading settings..."</p> }>
                {move || {
                    settings
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Setting"</th>
                                                <th>"Value"</th>
                                                <th>"Description"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|setting| {
                                                    let key = setting.key.clone();
                                                    let stored = setting.value.clone();
                                                    let input_key = key.clone();
                                                    view! {
                                                        <tr>
                                                            <td class="data-table__mono">{setting.key.clone()}</td>
                                                            <td>
                                                                <input
                                                                    class="dialog__input"
                                                                    type="text"
                                                                    prop:value=move || {
                                                                        edits.get().get(&key).cloned().unwrap_or_else(|| stored.clone())
                                                                    }
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        let key = input_key.clone();
                                                                        edits.update(|e| {
                                                                            e.insert(key, value);
                                                                        });
                                                                    }
                                                                />
                                                            </td>
                                                            <td class="data-table__muted">{setting.description.clone()}</td>
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
        </div>
    }
}
