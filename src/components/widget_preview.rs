//! Live preview of the embeddable call widget.
//!
//! ARCHITECTURE
//! ============
//! `state::call_preview::CallPreview` is the pure state machine; this
//! component owns the timers that drive its timed transitions. A one-shot
//! `Timeout` covers the connecting and ended delays and an `Interval` the
//! per-second counter. Both live in `Rc<RefCell<Option<_>>>` slots and are
//! recreated inside a single effect keyed on a `Memo` of the current stage,
//! so any stage change first drops whatever the previous stage scheduled.
//! Dropping a gloo timer cancels it; `on_cleanup` drops both slots on
//! unmount.

use leptos::prelude::*;

use crate::net::types::WidgetConfig;
use crate::state::call_preview::{CallPreview, CallStage};
use crate::util::format::format_elapsed;

#[cfg(feature = "hydrate")]
use crate::state::call_preview::{CONNECT_DELAY_MS, ENDED_DELAY_MS, TICK_MS};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Interactive mock of the end-user call experience for a widget being
/// configured. Entirely client-side; no network calls.
#[component]
pub fn InteractiveWidgetPreview(config: Signal<WidgetConfig>) -> impl IntoView {
    let preview = RwSignal::new(CallPreview::default());
    let language = RwSignal::new(None::<String>);

    // Only stage changes may touch the timers; elapsed-seconds updates from
    // the ticker must not re-register the interval.
    let stage = Memo::new(move |_| preview.get().stage);

    #[cfg(feature = "hydrate")]
    {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

        let pending_slot = Rc::clone(&pending);
        let ticker_slot = Rc::clone(&ticker);
        Effect::new(move || {
            let stage = stage.get();
            // Exiting any stage cancels what that stage scheduled.
            pending_slot.borrow_mut().take();
            ticker_slot.borrow_mut().take();
            match stage {
                CallStage::Connecting => {
                    *pending_slot.borrow_mut() = Some(Timeout::new(CONNECT_DELAY_MS, move || {
                        preview.update(CallPreview::connected);
                    }));
                }
                CallStage::Active => {
                    *ticker_slot.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                        preview.update(CallPreview::tick);
                    }));
                }
                CallStage::Ended => {
                    *pending_slot.borrow_mut() = Some(Timeout::new(ENDED_DELAY_MS, move || {
                        preview.update(CallPreview::finish);
                    }));
                }
                CallStage::Idle | CallStage::Terms => {}
            }
        });

        on_cleanup(move || {
            pending.borrow_mut().take();
            ticker.borrow_mut().take();
        });
    }

    let selected_language = move || language.get().unwrap_or_else(|| config.get().default_language);

    view! {
        <div class="widget-preview" style=move || format!("--widget-accent: {}", config.get().primary_color)>
            {move || match stage.get() {
                CallStage::Idle => {
                    view! {
                        <div class="widget-preview__idle">
                            <select
                                class="widget-preview__language"
                                on:change=move |ev| language.set(Some(event_target_value(&ev)))
                            >
                                {config
                                    .get()
                                    .languages
                                    .into_iter()
                                    .map(|lang| {
                                        let selected = lang == selected_language();
                                        view! {
                                            <option value=lang.clone() selected=selected>
                                                {lang.clone()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            <button
                                class="btn widget-preview__call"
                                on:click=move |_| {
                                    let require_terms = config.get().require_terms_acceptance;
                                    preview.update(|p| p.start(require_terms));
                                }
                            >
                                {move || config.get().button_label}
                            </button>
                        </div>
                    }
                        .into_any()
                }
                CallStage::Terms => {
                    view! {
                        <div class="widget-preview__terms">
                            <label class="widget-preview__consent">
                                <input
                                    type="checkbox"
                                    prop:checked=move || preview.get().terms_accepted
                                    on:change=move |ev| {
                                        let accepted = event_target_checked(&ev);
                                        preview.update(|p| p.set_terms_accepted(accepted));
                                    }
                                />
                                "I agree to the call terms"
                            </label>
                            {move || {
                                config
                                    .get()
                                    .terms_url
                                    .map(|url| {
                                        view! {
                                            <a class="widget-preview__terms-link" href=url target="_blank">
                                                "Read the terms"
                                            </a>
                                        }
                                    })
                            }}
                            <div class="widget-preview__actions">
                                <button class="btn" on:click=move |_| preview.update(CallPreview::cancel_terms)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || !preview.get().terms_accepted
                                    on:click=move |_| preview.update(CallPreview::continue_from_terms)
                                >
                                    "Continue"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                CallStage::Connecting => {
                    view! {
                        <div class="widget-preview__connecting">
                            <span class="widget-preview__spinner" aria-hidden="true"></span>
                            "Connecting..."
                        </div>
                    }
                        .into_any()
                }
                CallStage::Active => {
                    view! {
                        <div class="widget-preview__active">
                            <span class="widget-preview__timer">
                                {move || format_elapsed(preview.get().elapsed_secs)}
                            </span>
                            <div class="widget-preview__actions">
                                <button
                                    class="btn"
                                    class:btn--muted=move || preview.get().muted
                                    on:click=move |_| preview.update(CallPreview::toggle_mute)
                                >
                                    {move || if preview.get().muted { "Unmute" } else { "Mute" }}
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| preview.update(CallPreview::hang_up)
                                >
                                    "End Call"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                CallStage::Ended => view! { <div class="widget-preview__ended">"Call ended"</div> }.into_any(),
            }}

            <Show when=move || stage.get() != CallStage::Idle>
                <button
                    class="btn btn--link widget-preview__reset"
                    on:click=move |_| preview.update(CallPreview::reset)
                >
                    "Reset preview"
                </button>
            </Show>
        </div>
    }
}
