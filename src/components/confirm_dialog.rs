//! Generic confirmation dialog for destructive actions.
//!
//! DESIGN
//! ======
//! Every delete/release/block action goes through this two-step flow: the
//! page records intent (which row, which action) in a signal, this dialog
//! renders while that intent is set, and only the Confirm button issues the
//! effectful call. Backdrop click and Cancel drop the intent without side
//! effects.

use leptos::prelude::*;

/// Modal asking the operator to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    /// Dialog heading, e.g. `"Revoke API Key"`.
    #[prop(into)]
    title: String,
    /// Consequence description shown in the body.
    #[prop(into)]
    message: String,
    /// Label on the destructive button, e.g. `"Revoke"`.
    #[prop(into)]
    confirm_label: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
