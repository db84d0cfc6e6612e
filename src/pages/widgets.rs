//! Call widget management: list, configurator, live preview, embed code.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::components::widget_preview::InteractiveWidgetPreview;
use crate::net::types::{Widget, WidgetConfig};
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;

/// `#rgb` or `#rrggbb`.
fn valid_hex_color(raw: &str) -> bool {
    let Some(digits) = raw.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse the comma-separated language input: trim, lowercase, drop empties
/// and duplicates, preserving first-seen order.
fn parse_languages(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for part in raw.split(',') {
        let tag = part.trim().to_lowercase();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

/// Client-side checks before a widget is sent to the server.
fn validate_widget(name: &str, config: &WidgetConfig) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Widget name is required".to_owned());
    }
    if config.button_label.trim().is_empty() {
        return Err("Button label is required".to_owned());
    }
    if !valid_hex_color(&config.primary_color) {
        return Err("Primary color must be a hex color like #2563eb".to_owned());
    }
    if config.languages.is_empty() {
        return Err("At least one language is required".to_owned());
    }
    if !config.languages.contains(&config.default_language) {
        return Err("Default language must be one of the offered languages".to_owned());
    }
    if config.require_terms_acceptance && config.terms_url.as_deref().unwrap_or("").trim().is_empty() {
        return Err("A terms URL is required when acceptance is enforced".to_owned());
    }
    Ok(())
}

/// Widgets page — list with a configurator and live call preview.
#[component]
pub fn WidgetsPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let widgets = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::WIDGETS);
        crate::net::api::fetch_widgets()
    });

    // None = no editor, Some(None) = creating, Some(Some(id)) = editing.
    let editing = RwSignal::new(None::<Option<String>>);

    // Configurator form state, mirrored into a derived WidgetConfig for the
    // live preview.
    let form_name = RwSignal::new(String::new());
    let form_label = RwSignal::new(String::new());
    let form_color = RwSignal::new(String::new());
    let form_languages = RwSignal::new(String::new());
    let form_default_language = RwSignal::new(String::new());
    let form_require_terms = RwSignal::new(false);
    let form_terms_url = RwSignal::new(String::new());

    let form_config = Signal::derive(move || WidgetConfig {
        button_label: form_label.get(),
        primary_color: form_color.get(),
        languages: parse_languages(&form_languages.get()),
        default_language: form_default_language.get().trim().to_lowercase(),
        require_terms_acceptance: form_require_terms.get(),
        terms_url: {
            let url = form_terms_url.get().trim().to_owned();
            if url.is_empty() { None } else { Some(url) }
        },
    });

    let open_editor = Callback::new(move |widget: Option<Widget>| {
        match widget {
            Some(widget) => {
                form_name.set(widget.name);
                form_label.set(widget.config.button_label);
                form_color.set(widget.config.primary_color);
                form_languages.set(widget.config.languages.join(", "));
                form_default_language.set(widget.config.default_language);
                form_require_terms.set(widget.config.require_terms_acceptance);
                form_terms_url.set(widget.config.terms_url.unwrap_or_default());
                editing.set(Some(Some(widget.id)));
            }
            None => {
                let defaults = WidgetConfig::default();
                form_name.set(String::new());
                form_label.set(defaults.button_label);
                form_color.set(defaults.primary_color);
                form_languages.set(defaults.languages.join(", "));
                form_default_language.set(defaults.default_language);
                form_require_terms.set(false);
                form_terms_url.set(String::new());
                editing.set(Some(None));
            }
        }
    });

    // Deep links like /widgets/{id} open the editor once the list loads.
    let deep_link_done = RwSignal::new(false);
    Effect::new(move || {
        if deep_link_done.get() {
            return;
        }
        let Some(id) = params.get().get("id") else {
            return;
        };
        if let Some(Ok(list)) = widgets.get() {
            deep_link_done.set(true);
            if let Some(widget) = list.into_iter().find(|w| w.id == id) {
                open_editor.run(Some(widget));
            }
        }
    });

    let save = Callback::new(move |()| {
        let name = form_name.get().trim().to_owned();
        let config = form_config.get();
        if let Err(message) = validate_widget(&name, &config) {
            toasts.update(|t| {
                t.push_error(message);
            });
            return;
        }
        let target = editing.get_untracked().flatten();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match target {
                    Some(id) => crate::net::api::update_widget(&id, &name, &config).await,
                    None => crate::net::api::create_widget(&name, &config).await,
                };
                match result {
                    Ok(saved) => {
                        queries.update(|q| q.invalidate(keys::WIDGETS));
                        editing.set(None);
                        toasts.update(|t| {
                            t.push_success(format!("Saved \"{}\"", saved.name));
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
            let _ = (name, config, target);
        }
    });

    let delete_target = RwSignal::new(None::<Widget>);
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(widget) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_widget(&widget.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(keys::WIDGETS));
                        editing.set(None);
                        toasts.update(|t| {
                            t.push_success(format!("Deleted \"{}\"", widget.name));
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
            let _ = widget;
        }
    });

    // Embed-code dialog: fetch on open, copy to clipboard on demand.
    let embed_snippet = RwSignal::new(None::<String>);
    let show_embed = RwSignal::new(false);
    let open_embed = Callback::new(move |id: String| {
        show_embed.set(true);
        embed_snippet.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_embed_code(&id).await {
                    Ok(code) => embed_snippet.set(Some(code.snippet)),
                    Err(message) => {
                        show_embed.set(false);
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
    let copy_embed = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(snippet) = embed_snippet.get() {
                if let Some(window) = web_sys::window() {
                    let _ = window.navigator().clipboard().write_text(&snippet);
                    toasts.update(|t| {
                        t.push_success("Embed code copied");
                    });
                }
            }
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::Widgets/>
            <header class="page__header">
                <h1>"Widgets"</h1>
                <button class="btn btn--primary" on:click=move |_| open_editor.run(None)>
                    "+ New widget"
                </button>
            </header>

            <div class="widgets__layout">
                <div class="widgets__list">
                    <Suspense fallback=move || view! { <p>"Loading widgets..."</p> }>
                        {move || {
                            widgets
                                .get()
                                .map(|result| match result {
                                    Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                                    Ok(list) if list.is_empty() => {
                                        view! { <p class="page__empty">"No widgets yet."</p> }.into_any()
                                    }
                                    Ok(list) => {
                                        view! {
                                            <ul class="widgets__rows">
                                                {list
                                                    .into_iter()
                                                    .map(|widget| {
                                                        let edit_widget = widget.clone();
                                                        let delete_widget = widget.clone();
                                                        let embed_id = widget.id.clone();
                                                        view! {
                                                            <li class="widgets__row">
                                                                <span
                                                                    class="widgets__swatch"
                                                                    style=format!("background: {}", widget.config.primary_color)
                                                                ></span>
                                                                <span class="widgets__name">{widget.name.clone()}</span>
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| open_editor.run(Some(edit_widget.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| open_embed.run(embed_id.clone())
                                                                >
                                                                    "Embed"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| delete_target.set(Some(delete_widget.clone()))
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </div>

                <Show when=move || editing.get().is_some()>
                    <div class="widgets__editor">
                        <h2>{move || if editing.get().flatten().is_some() { "Edit widget" } else { "New widget" }}</h2>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form_name.get()
                                on:input=move |ev| form_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Button label"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form_label.get()
                                on:input=move |ev| form_label.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Primary color"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="#2563eb"
                                prop:value=move || form_color.get()
                                on:input=move |ev| form_color.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Languages (comma-separated)"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="en, de, fr"
                                prop:value=move || form_languages.get()
                                on:input=move |ev| form_languages.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Default language"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form_default_language.get()
                                on:input=move |ev| form_default_language.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="widgets__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form_require_terms.get()
                                on:change=move |ev| form_require_terms.set(event_target_checked(&ev))
                            />
                            "Require terms acceptance before connecting"
                        </label>
                        <Show when=move || form_require_terms.get()>
                            <label class="dialog__label">
                                "Terms URL"
                                <input
                                    class="dialog__input"
                                    type="url"
                                    prop:value=move || form_terms_url.get()
                                    on:input=move |ev| form_terms_url.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| editing.set(None)>
                                "Close"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| save.run(())>
                                "Save"
                            </button>
                        </div>

                        <h3>"Preview"</h3>
                        <InteractiveWidgetPreview config=form_config/>
                    </div>
                </Show>
            </div>

            <Show when=move || show_embed.get()>
                <div class="dialog-backdrop" on:click=move |_| show_embed.set(false)>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Embed Code"</h2>
                        {move || match embed_snippet.get() {
                            None => view! { <p>"Loading..."</p> }.into_any(),
                            Some(snippet) => view! { <pre class="embed-code">{snippet}</pre> }.into_any(),
                        }}
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_embed.set(false)>
                                "Close"
                            </button>
                            <button
                                class="btn btn--primary"
                                disabled=move || embed_snippet.get().is_none()
                                on:click=move |_| copy_embed.run(())
                            >
                                "Copy"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                delete_target
                    .get()
                    .map(|widget| {
                        let message = format!(
                            "\"{}\" will stop working on every site where it is embedded.",
                            widget.name
                        );
                        view! {
                            <ConfirmDialog
                                title="Delete Widget"
                                message=message
                                confirm_label="Delete"
                                on_cancel=on_delete_cancel
                                on_confirm=on_delete_confirm
                            />
                        }
                    })
            }}
        </div>
    }
}
