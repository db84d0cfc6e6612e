//! Call monitoring: table, detail view, recording playback, re-scan.
//!
//! RECORDING PLAYBACK
//! ==================
//! Recordings are fetched as raw bytes and exposed to the `<audio>` element
//! through an object URL. A load sequence counter stands in for request
//! cancellation: selecting another call or unmounting bumps it, and a fetch
//! that resolves under a stale sequence discards its bytes. Object URLs are
//! revoked whenever they are replaced and on cleanup so the browser can
//! release the buffers.

#[cfg(test)]
#[path = "calls_test.rs"]
mod calls_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav::TopNav;
use crate::components::pagination::{Pager, clamp_page, page_slice};
use crate::net::types::CallRecord;
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;
use crate::util::format::{format_elapsed, short_date};

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

const CALLS_PER_PAGE: usize = 25;

/// Violation column label for a call row.
fn violation_label(count: i64, scanned: bool) -> String {
    if !scanned {
        "unscanned".to_owned()
    } else if count == 0 {
        "clean".to_owned()
    } else if count == 1 {
        "1 violation".to_owned()
    } else {
        format!("{count} violations")
    }
}

/// Seconds-to-display cast; negative or absurd durations render as 0:00.
fn display_secs(secs: i64) -> u32 {
    u32::try_from(secs).unwrap_or(0)
}

#[cfg(feature = "hydrate")]
fn object_url_from_bytes(bytes: &[u8]) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("audio/mpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build audio blob".to_owned())?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "failed to create object URL".to_owned())
}

/// Calls page — paginated call table with a detail pane for the selected call.
#[component]
pub fn CallsPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let calls = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::CALLS);
        crate::net::api::fetch_calls()
    });

    let page = RwSignal::new(0_usize);
    let selected = RwSignal::new(None::<String>);

    // Deep links like /calls/{id} preselect the call.
    Effect::new(move || {
        if let Some(id) = params.get().get("id") {
            selected.set(Some(id));
        }
    });

    let detail = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::CALLS);
        let id = selected.get();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_call_detail(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let recording_url = RwSignal::new(None::<String>);
    let recording_loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let load_seq: Rc<Cell<u32>> = Rc::new(Cell::new(0));

    // Selecting another call supersedes any in-flight fetch and releases the
    // previous object URL.
    #[cfg(feature = "hydrate")]
    {
        let seq = Rc::clone(&load_seq);
        Effect::new(move || {
            let _ = selected.get();
            seq.set(seq.get() + 1);
            recording_loading.set(false);
            if let Some(url) = recording_url.get_untracked() {
                web_sys::Url::revoke_object_url(&url).ok();
            }
            recording_url.set(None);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let seq = Rc::clone(&load_seq);
        on_cleanup(move || {
            seq.set(seq.get() + 1);
            if let Some(url) = recording_url.get_untracked() {
                web_sys::Url::revoke_object_url(&url).ok();
            }
        });
    }

    #[cfg(feature = "hydrate")]
    let load_recording = {
        let seq = Rc::clone(&load_seq);
        Callback::new(move |id: String| {
            let my_seq = seq.get() + 1;
            seq.set(my_seq);
            recording_loading.set(true);
            let seq = Rc::clone(&seq);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_call_recording(&id).await;
                // Superseded while we were waiting: discard the bytes.
                if seq.get() != my_seq {
                    return;
                }
                recording_loading.set(false);
                match result.and_then(|bytes| object_url_from_bytes(&bytes)) {
                    Ok(url) => recording_url.set(Some(url)),
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
            });
        })
    };
    #[cfg(not(feature = "hydrate"))]
    let load_recording = Callback::new(move |_id: String| {});

    let scan_selected = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::scan_call(&id).await {
                    Ok(report) => {
                        queries.update(|q| q.invalidate(keys::CALLS));
                        toasts.update(|t| {
                            t.push_success(format!("Scan found {} matches", report.matches_found));
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
            let _ = id;
        }
    });

    let total = Signal::derive(move || calls.get().and_then(Result::ok).map(|list| list.len()).unwrap_or(0));

    // A refetch can shrink the list out from under the current page.
    Effect::new(move || {
        let clamped = clamp_page(page.get_untracked(), total.get(), CALLS_PER_PAGE);
        if clamped != page.get_untracked() {
            page.set(clamped);
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::Calls/>
            <h1>"Calls"</h1>

            <div class="calls__layout">
                <div class="calls__table">
                    <Suspense fallback=move || view! { <p>"Loading calls..."</p> }>
                        {move || {
                            calls
                                .get()
                                .map(|result| match result {
                                    Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                                    Ok(list) if list.is_empty() => {
                                        view! { <p class="page__empty">"No calls recorded yet."</p> }.into_any()
                                    }
                                    Ok(list) => {
                                        let range = page_slice(list.len(), page.get(), CALLS_PER_PAGE);
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Started"</th>
                                                        <th>"From"</th>
                                                        <th>"To"</th>
                                                        <th>"Duration"</th>
                                                        <th>"Status"</th>
                                                        <th>"Moderation"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list[range]
                                                        .iter()
                                                        .cloned()
                                                        .map(|call: CallRecord| {
                                                            let id = call.id.clone();
                                                            let is_selected = {
                                                                let id = id.clone();
                                                                move || selected.get().as_deref() == Some(id.as_str())
                                                            };
                                                            view! {
                                                                <tr
                                                                    class="data-table__row--clickable"
                                                                    class:data-table__row--selected=is_selected
                                                                    on:click=move |_| selected.set(Some(id.clone()))
                                                                >
                                                                    <td>{short_date(&call.started_at).to_owned()}</td>
                                                                    <td class="data-table__mono">{call.from_number.clone()}</td>
                                                                    <td class="data-table__mono">{call.to_number.clone()}</td>
                                                                    <td>{format_elapsed(display_secs(call.duration_secs))}</td>
                                                                    <td>{call.status.clone()}</td>
                                                                    <td>{violation_label(call.violation_count, call.scanned)}</td>
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
                    <Pager page=page len=total per_page=CALLS_PER_PAGE/>
                </div>

                <div class="calls__detail">
                    <Suspense fallback=move || view! { <p>"Loading detail..."</p> }>
                        {move || {
                            detail
                                .get()
                                .map(|result| match result {
                                    Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                                    Ok(None) => view! { <p class="page__empty">"Select a call."</p> }.into_any(),
                                    Ok(Some(detail)) => {
                                        let call_id = detail.call.id.clone();
                                        let scan_id = call_id.clone();
                                        view! {
                                            <div class="call-detail">
                                                <h2>{format!("{} → {}", detail.call.from_number, detail.call.to_number)}</h2>
                                                <p class="call-detail__meta">
                                                    {format!(
                                                        "{} · {} · {}",
                                                        detail.call.started_at,
                                                        format_elapsed(display_secs(detail.call.duration_secs)),
                                                        detail.call.status,
                                                    )}
                                                </p>

                                                <div class="call-detail__recording">
                                                    {move || match recording_url.get() {
                                                        Some(url) => view! { <audio controls src=url></audio> }.into_any(),
                                                        None => {
                                                            let id = call_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    disabled=move || recording_loading.get()
                                                                    on:click=move |_| load_recording.run(id.clone())
                                                                >
                                                                    {move || {
                                                                        if recording_loading.get() { "Loading..." } else { "Load recording" }
                                                                    }}
                                                                </button>
                                                            }
                                                                .into_any()
                                                        }
                                                    }}
                                                </div>

                                                <h3>"Violations"</h3>
                                                {if detail.violations.is_empty() {
                                                    view! { <p class="page__empty">"None found."</p> }.into_any()
                                                } else {
                                                    view! {
                                                        <ul class="call-detail__violations">
                                                            {detail
                                                                .violations
                                                                .iter()
                                                                .map(|v| {
                                                                    view! {
                                                                        <li class=format!("violation violation--{}", v.severity)>
                                                                            <span class="data-table__mono">{v.word.clone()}</span>
                                                                            {format!(
                                                                                " ({}) at {}",
                                                                                v.severity,
                                                                                format_elapsed(display_secs(v.offset_secs)),
                                                                            )}
                                                                        </li>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                    }
                                                        .into_any()
                                                }}

                                                <h3>"Transcript"</h3>
                                                {match detail.transcript.clone() {
                                                    Some(text) => view! { <pre class="call-detail__transcript">{text}</pre> }.into_any(),
                                                    None => view! { <p class="page__empty">"Not transcribed."</p> }.into_any(),
                                                }}

                                                <button class="btn" on:click=move |_| scan_selected.run(scan_id.clone())>
                                                    "Re-scan transcript"
                                                </button>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </div>
    }
}
