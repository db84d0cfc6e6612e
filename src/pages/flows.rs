//! Flow automation: list flows, create from templates, rename, toggle, delete.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::net::types::{Flow, FlowTemplate};
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;
use crate::util::format::short_date;

/// `"3 steps"`, with the singular form for 1.
fn step_label(count: i64) -> String {
    if count == 1 {
        "1 step".to_owned()
    } else {
        format!("{count} steps")
    }
}

/// Flows page — automation list and template catalog.
#[component]
pub fn FlowsPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let flows = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::FLOWS);
        crate::net::api::fetch_flows()
    });
    let templates = LocalResource::new(move || {
        let _epoch = queries.get().epoch(keys::FLOW_TEMPLATES);
        crate::net::api::fetch_flow_templates()
    });

    // Create-from-template dialog.
    let create_from = RwSignal::new(None::<FlowTemplate>);
    let create_name = RwSignal::new(String::new());
    let create_flow = Callback::new(move |()| {
        let Some(template) = create_from.get_untracked() else {
            return;
        };
        let name = create_name.get().trim().to_owned();
        if name.is_empty() {
            toasts.update(|t| {
                t.push_error("Flow name is required");
            });
            return;
        }
        create_from.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_flow_from_template(&template.id, &name).await {
                    Ok(flow) => {
                        queries.update(|q| q.invalidate(keys::FLOWS));
                        toasts.update(|t| {
                            t.push_success(format!("Created \"{}\"", flow.name));
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
            let _ = (template, name);
        }
    });

    // Rename dialog.
    let rename_target = RwSignal::new(None::<Flow>);
    let rename_name = RwSignal::new(String::new());
    let rename = Callback::new(move |()| {
        let Some(flow) = rename_target.get_untracked() else {
            return;
        };
        let name = rename_name.get().trim().to_owned();
        if name.is_empty() {
            toasts.update(|t| {
                t.push_error("Flow name is required");
            });
            return;
        }
        rename_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::rename_flow(&flow.id, &name).await {
                    Ok(_) => {
                        queries.update(|q| q.invalidate(keys::FLOWS));
                        toasts.update(|t| {
                            t.push_success("Flow renamed");
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
            let _ = (flow, name);
        }
    });

    let toggle_enabled = Callback::new(move |flow: Flow| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_flow_enabled(&flow.id, !flow.enabled).await {
                    Ok(updated) => {
                        queries.update(|q| q.invalidate(keys::FLOWS));
                        toasts.update(|t| {
                            t.push_success(if updated.enabled {
                                format!("Enabled \"{}\"", updated.name)
                            } else {
                                format!("Disabled \"{}\"", updated.name)
                            });
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
            let _ = flow;
        }
    });

    let delete_target = RwSignal::new(None::<Flow>);
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(flow) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_flow(&flow.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(keys::FLOWS));
                        toasts.update(|t| {
                            t.push_success(format!("Deleted \"{}\"", flow.name));
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
            let _ = flow;
        }
    });

    view! {
        <div class="page">
            <TopNav active=Section::Flows/>
            <header class="page__header">
                <h1>"Flow Automation"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading flows..."</p> }>
                {move || {
                    flows
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No flows yet. Start from a template below."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Trigger"</th>
                                                <th>"Steps"</th>
                                                <th>"Updated"</th>
                                                <th>"Enabled"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|flow| {
                                                    let toggle_flow = flow.clone();
                                                    let rename_flow = flow.clone();
                                                    let delete_flow = flow.clone();
                                                    view! {
                                                        <tr class:data-table__row--muted=!flow.enabled>
                                                            <td>{flow.name.clone()}</td>
                                                            <td class="data-table__mono">{flow.trigger.clone()}</td>
                                                            <td>{step_label(flow.step_count)}</td>
                                                            <td>{short_date(&flow.updated_at).to_owned()}</td>
                                                            <td>
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=flow.enabled
                                                                    on:change=move |_| toggle_enabled.run(toggle_flow.clone())
                                                                />
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| {
                                                                        rename_name.set(rename_flow.name.clone());
                                                                        rename_target.set(Some(rename_flow.clone()));
                                                                    }
                                                                >
                                                                    "Rename"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| delete_target.set(Some(delete_flow.clone()))
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

            <h2>"Templates"</h2>
            <Suspense fallback=move || view! { <p>"Loading templates..."</p> }>
                {move || {
                    templates
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No templates available."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="template-cards">
                                        {list
                                            .into_iter()
                                            .map(|template| {
                                                let use_template = template.clone();
                                                view! {
                                                    <li class="template-cards__card">
                                                        <h3>{template.name.clone()}</h3>
                                                        <p>{template.description.clone()}</p>
                                                        <span class="template-cards__steps">{step_label(template.step_count)}</span>
                                                        <button
                                                            class="btn btn--small btn--primary"
                                                            on:click=move |_| {
                                                                create_name.set(use_template.name.clone());
                                                                create_from.set(Some(use_template.clone()));
                                                            }
                                                        >
                                                            "Use template"
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

            {move || {
                create_from
                    .get()
                    .map(|template| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| create_from.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{format!("New flow from \"{}\"", template.name)}</h2>
                                    <label class="dialog__label">
                                        "Flow name"
                                        <input
                                            class="dialog__input"
                                            type="text"
                                            prop:value=move || create_name.get()
                                            on:input=move |ev| create_name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| create_from.set(None)>
                                            "Cancel"
                                        </button>
                                        <button class="btn btn--primary" on:click=move |_| create_flow.run(())>
                                            "Create"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                rename_target
                    .get()
                    .map(|flow| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| rename_target.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{format!("Rename \"{}\"", flow.name)}</h2>
                                    <label class="dialog__label">
                                        "New name"
                                        <input
                                            class="dialog__input"
                                            type="text"
                                            prop:value=move || rename_name.get()
                                            on:input=move |ev| rename_name.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| rename_target.set(None)>
                                            "Cancel"
                                        </button>
                                        <button class="btn btn--primary" on:click=move |_| rename.run(())>
                                            "Rename"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            {move || {
                delete_target
                    .get()
                    .map(|flow| {
                        let message = format!(
                            "\"{}\" and its {} will be removed. Calls already in flight are not affected.",
                            flow.name,
                            step_label(flow.step_count),
                        );
                        view! {
                            <ConfirmDialog
                                title="Delete Flow"
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
