//! Phone number provisioning across Twilio and Plivo.
//!
//! KYC gating is enforced server-side; this page only reflects the status
//! and disables purchase buttons when verification is still required.

#[cfg(test)]
#[path = "phone_numbers_test.rs"]
mod phone_numbers_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::nav::TopNav;
use crate::net::types::{AvailableNumber, PhoneNumber, Provider};
use crate::state::query::{QueryClient, keys};
use crate::state::toast::ToastState;
use crate::state::ui::Section;
use crate::util::format::short_date;

/// Cache key for one provider's owned-number list.
fn provider_cache_key(provider: Provider) -> &'static str {
    match provider {
        Provider::Twilio => keys::PHONE_NUMBERS_TWILIO,
        Provider::Plivo => keys::PHONE_NUMBERS_PLIVO,
    }
}

/// Country input is a bare ISO 3166-1 alpha-2 code, e.g. `US`.
fn valid_country_code(raw: &str) -> bool {
    raw.len() == 2 && raw.chars().all(|c| c.is_ascii_uppercase())
}

/// The contains filter goes into the search query string raw, so it is
/// restricted to digits. Empty means no filter.
fn valid_contains_filter(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_digit())
}

/// Purchases are blocked only while the server reports verification as
/// outstanding; `pending` review may still purchase on some providers, so
/// the server stays the authority and the UI only hard-blocks `required`.
fn purchase_blocked(kyc_status: &str) -> bool {
    kyc_status == "required"
}

/// Phone numbers page — owned numbers per provider, search, purchase, release.
#[component]
pub fn PhoneNumbersPage() -> impl IntoView {
    super::redirect_unauthenticated();
    let queries = expect_context::<RwSignal<QueryClient>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let provider = RwSignal::new(Provider::Twilio);

    let numbers = LocalResource::new(move || {
        let current = provider.get();
        let _epoch = queries.get().epoch(provider_cache_key(current));
        crate::net::api::fetch_phone_numbers(current)
    });

    let kyc = LocalResource::new(move || crate::net::api::fetch_kyc_status());

    let release_target = RwSignal::new(None::<PhoneNumber>);
    let on_release_cancel = Callback::new(move |()| release_target.set(None));

    // Search dialog state.
    let show_search = RwSignal::new(false);
    let search_country = RwSignal::new("US".to_owned());
    let search_contains = RwSignal::new(String::new());
    let search_results = RwSignal::new(None::<Vec<AvailableNumber>>);
    let search_pending = RwSignal::new(false);
    let purchase_target = RwSignal::new(None::<AvailableNumber>);

    let on_release_confirm = Callback::new(move |()| {
        let Some(number) = release_target.get_untracked() else {
            return;
        };
        release_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::release_phone_number(number.provider, &number.id).await {
                    Ok(()) => {
                        queries.update(|q| q.invalidate(provider_cache_key(number.provider)));
                        toasts.update(|t| {
                            t.push_success(format!("Released {}", number.number));
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
            let _ = number;
        }
    });

    let run_search = Callback::new(move |()| {
        let country = search_country.get().trim().to_ascii_uppercase();
        if !valid_country_code(&country) {
            toasts.update(|t| {
                t.push_error("Country must be a two-letter code, e.g. US");
            });
            return;
        }
        let contains = search_contains.get().trim().to_owned();
        if !valid_contains_filter(&contains) {
            toasts.update(|t| {
                t.push_error("The contains filter accepts digits only");
            });
            return;
        }
        let current = provider.get();
        search_pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::search_phone_numbers(current, &country, &contains).await {
                    Ok(results) => search_results.set(Some(results)),
                    Err(message) => {
                        toasts.update(|t| {
                            t.push_error(message);
                        });
                    }
                }
                search_pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (country, contains, current);
        }
    });

    let on_purchase_confirm = Callback::new(move |()| {
        let Some(candidate) = purchase_target.get_untracked() else {
            return;
        };
        purchase_target.set(None);
        let current = provider.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::purchase_phone_number(current, &candidate.number).await {
                    Ok(purchased) => {
                        queries.update(|q| q.invalidate(provider_cache_key(current)));
                        show_search.set(false);
                        search_results.set(None);
                        toasts.update(|t| {
                            t.push_success(format!("Purchased {}", purchased.number));
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
            let _ = (candidate, current);
        }
    });

    let kyc_blocked = move || {
        kyc.get()
            .flatten()
            .map(|status| purchase_blocked(&status.status))
            .unwrap_or(false)
    };

    view! {
        <div class="page">
            <TopNav active=Section::PhoneNumbers/>
            <header class="page__header">
                <h1>"Phone Numbers"</h1>
                <div class="tabs">
                    {[Provider::Twilio, Provider::Plivo]
                        .into_iter()
                        .map(|p| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || provider.get() == p
                                    on:click=move |_| provider.set(p)
                                >
                                    {p.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        show_search.set(true);
                        search_results.set(None);
                    }
                >
                    "Buy a number"
                </button>
            </header>

            {move || {
                kyc.get()
                    .flatten()
                    .filter(|status| status.status != "approved")
                    .map(|status| {
                        view! {
                            <div class="kyc-banner" class:kyc-banner--blocking=purchase_blocked(&status.status)>
                                <span>{format!("Identity verification: {}", status.status)}</span>
                                {status
                                    .detail_url
                                    .map(|url| view! { <a href=url target="_blank">"Complete verification"</a> })}
                            </div>
                        }
                    })
            }}

            <Suspense fallback=move || view! { <p>"Loading numbers..."</p> }>
                {move || {
                    numbers
                        .get()
                        .map(|result| match result {
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No numbers owned with this provider."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Number"</th>
                                                <th>"Country"</th>
                                                <th>"Monthly"</th>
                                                <th>"Purchased"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|number| {
                                                    let release_number = number.clone();
                                                    view! {
                                                        <tr>
                                                            <td class="data-table__mono">{number.number.clone()}</td>
                                                            <td>{number.country.clone()}</td>
                                                            <td>{format!("${:.2}", number.monthly_cost)}</td>
                                                            <td>{short_date(&number.purchased_at).to_owned()}</td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| release_target.set(Some(release_number.clone()))
                                                                >
                                                                    "Release"
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

            <Show when=move || show_search.get()>
                <div class="dialog-backdrop" on:click=move |_| show_search.set(false)>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || format!("Search {} numbers", provider.get().label())}</h2>
                        <div class="inline-form">
                            <label class="dialog__label">
                                "Country"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    maxlength="2"
                                    prop:value=move || search_country.get()
                                    on:input=move |ev| search_country.set(event_target_value(&ev).to_ascii_uppercase())
                                />
                            </label>
                            <label class="dialog__label">
                                "Contains"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="digits, optional"
                                    prop:value=move || search_contains.get()
                                    on:input=move |ev| search_contains.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn" disabled=move || search_pending.get() on:click=move |_| run_search.run(())>
                                {move || if search_pending.get() { "Searching..." } else { "Search" }}
                            </button>
                        </div>

                        {move || {
                            search_results
                                .get()
                                .map(|results| {
                                    if results.is_empty() {
                                        view! { <p class="page__empty">"No numbers available."</p> }.into_any()
                                    } else {
                                        view! {
                                            <ul class="number-results">
                                                {results
                                                    .into_iter()
                                                    .map(|candidate| {
                                                        let buy_candidate = candidate.clone();
                                                        view! {
                                                            <li class="number-results__row">
                                                                <span class="data-table__mono">{candidate.number.clone()}</span>
                                                                <span>{candidate.region.clone().unwrap_or_default()}</span>
                                                                <span>{format!("${:.2}/mo", candidate.monthly_cost)}</span>
                                                                <button
                                                                    class="btn btn--small btn--primary"
                                                                    disabled=kyc_blocked
                                                                    on:click=move |_| purchase_target.set(Some(buy_candidate.clone()))
                                                                >
                                                                    "Buy"
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

                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_search.set(false)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                release_target
                    .get()
                    .map(|number| {
                        let message = format!(
                            "{} will be returned to {} and may be claimed by another customer. Inbound calls to it will stop.",
                            number.number,
                            number.provider.label(),
                        );
                        view! {
                            <ConfirmDialog
                                title="Release Number"
                                message=message
                                confirm_label="Release"
                                on_cancel=on_release_cancel
                                on_confirm=on_release_confirm
                            />
                        }
                    })
            }}

            {move || {
                purchase_target
                    .get()
                    .map(|candidate| {
                        let message = format!(
                            "Purchasing {} bills ${:.2}/month to the account immediately.",
                            candidate.number, candidate.monthly_cost,
                        );
                        view! {
                            <ConfirmDialog
                                title="Purchase Number"
                                message=message
                                confirm_label="Purchase"
                                on_cancel=Callback::new(move |()| purchase_target.set(None))
                                on_confirm=on_purchase_confirm
                            />
                        }
                    })
            }}
        </div>
    }
}
