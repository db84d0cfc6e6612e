//! Banned-word management for content moderation.

#[cfg(test)]
#[path = "banned_words_test.rs"]
mod banned_words_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::net::types::{BannedWord, ScanReport};
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;

/// Severity buckets accepted by the scanner, mildest first.
const SEVERITIES: [&str; 3] = ["low", "medium", "high"];

/// Longest word/phrase the moderation backend indexes.
const MAX_WORD_LEN: usize = 64;

/// Canonical form of a word for submission: trimmed and lowercased.
/// Returns `None` when the input is empty or too long to index.
fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || word.chars().count() > MAX_WORD_LEN {
        return None;
    }
    Some(word)
}

/// Toast line for a completed scan run.
fn scan_summary(report: &ScanReport) -> String {
    format!("Scanned {} calls, found {} matches", report.calls_scanned, report.matches_found)
}

/// Banned words page — word list with add/edit/delete and a full re-scan.
#[component]
pub fn BannedWordsPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let words = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::BANNED_WORDS);
        crate::net::api::fetch_banned_words()
    });

    let new_word = RwSignal::new(String::new());
    let new_severity = RwSignal::new("medium".to_owned());
    let new_language = RwSignal::new("en".to_owned());

    let delete_target = RwSignal::new(None::<BannedWord>);
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let show_scan_confirm = RwSignal::new(false);
    let scan_running = RwSignal::new(false);

    let submit_add = Callback::new(move |()| {
        let Some(word) = normalize_word(&new_word.get()) else {
            toasts.update(|t| {
                t.push_error("Enter a word (64 characters max)");
            });
            return;
        };
        let severity = new_severity.get();
        let language = new_language.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_banned_word(&word, &severity, &language).await {
                    Ok(created) => {
                        new_word.set(String::new());
                        queries.update(|q| q.invalidate(keys::BANNED_WORDS));
                        toasts.update(|t| {
                            t.push_success(format!("Added \"{}\"", created.word));
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
            let _ = (word, severity, language);
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(word) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_banned_word(&word.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(keys::BANNED_WORDS));
                        toasts.update(|t| {
                            t.push_success(format!("Removed \"{}\"", word.word));
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
            let _ = word;
        }
    });

    let change_severity = Callback::new(move |(word, severity): (BannedWord, String)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_banned_word(&word.id, &severity).await {
                    Ok(_) => queries.update(|q| q.invalidate(keys::BANNED_WORDS)),
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
            let _ = (word, severity);
        }
    });

    let on_scan_confirm = Callback::new(move |()| {
        show_scan_confirm.set(false);
        scan_running.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::scan_all_calls().await {
                    Ok(report) => {
                        // Scan results land on the call table too.
                        queries.update(|q| q.invalidate(keys::CALLS));
                        toasts.update(|t| {
                            t.push_success(scan_summary(&report));
                        });
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
                scan_running.set(false);
            });
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::BannedWords/>
            <header class="page__header">
                <h1>"Banned Words"</h1>
                <button
                    class="btn"
                    disabled=move || scan_running.get()
                    on:click=move |_| show_scan_confirm.set(true)
                >
                    {move || if scan_running.get() { "Scanning..." } else { "Scan all calls" }}
                </button>
            </header>

            <form
                class="inline-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit_add.run(());
                }
            >
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Word or phrase"
                    prop:value=move || new_word.get()
                    on:input=move |ev| new_word.set(event_target_value(&ev))
                />
                <select on:change=move |ev| new_severity.set(event_target_value(&ev))>
                    {SEVERITIES
                        .into_iter()
                        .map(|s| view! { <option value=s selected=s == "medium">{s}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="dialog__input inline-form__language"
                    type="text"
                    maxlength="8"
                    prop:value=move || new_language.get()
                    on:input=move |ev| new_language.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading words..."</p> }>
                {move || {
                    words
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No banned words configured."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Word"</th>
                                                <th>"Severity"</th>
                                                <th>"Language"</th>
                                                <th>"Added"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|word| {
                                                    let severity_word = word.clone();
                                                    let delete_word = word.clone();
                                                    view! {
                                                        <tr>
                                                            <td class="data-table__mono">{word.word.clone()}</td>
                                                            <td>
                                                                <select on:change=move |ev| {
                                                                    change_severity.run((severity_word.clone(), event_target_value(&ev)));
                                                                }>
                                                                    {SEVERITIES
                                                                        .into_iter()
                                                                        .map(|s| {
                                                                            view! {
                                                                                <option value=s selected=s == word.severity>
                                                                                    {s}
                                                                                </option>
                                                                            }
                                                                        })
                                                                        .collect::<Vec<_>>()}
                                                                </select>
                                                            </td>
                                                            <td>{word.language.clone()}</td>
                                                            <td>{crate::util::format::short_date(&word.created_at).to_owned()}</td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| delete_target.set(Some(delete_word.clone()))
                                                                >
                                                                    "Delete"
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
                delete_target
                    .get()
                    .map(|word| {
                        let message = format!("\"{}\" will no longer be flagged in future scans.", word.word);
                        view! {
                            <ConfirmDialog
                                title="Delete Banned Word"
                                message=message
                                confirm_label="Delete"
                                on_cancel=on_delete_cancel
                                on_confirm=on_delete_confirm
                            />
                        }
                    })
            }}

            <Show when=move || show_scan_confirm.get()>
                <ConfirmDialog
                    title="Scan All Calls"
                    message="Every stored transcript will be re-scanned against the current word list. This can take a while on large accounts."
                    confirm_label="Start scan"
                    on_cancel=Callback::new(move |()| show_scan_confirm.set(false))
                    on_confirm=on_scan_confirm
                />
            </Show>
        </div>
    }
}
