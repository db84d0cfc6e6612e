//! Toast rendering and auto-dismissal.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// How long a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 4000;

/// Renders the toast queue in a fixed corner stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    view! { <ToastView toast=toast/> }
                }
            />
        </div>
    }
}

/// One toast. Schedules its own dismissal on mount; manual dismissal via
/// click races the timer harmlessly (dismiss ignores unknown ids).
#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let timer: Rc<RefCell<Option<gloo_timers::callback::Timeout>>> = Rc::new(RefCell::new(None));
        *timer.borrow_mut() = Some(gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
            toasts.update(|t| t.dismiss(id));
        }));
        on_cleanup(move || {
            timer.borrow_mut().take();
        });
    }

    let kind_class = match toast.kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    };

    view! {
        <div
            class=format!("toast {kind_class}")
            on:click=move |_| toasts.update(|t| t.dismiss(id))
        >
            {toast.message}
        </div>
    }
}
