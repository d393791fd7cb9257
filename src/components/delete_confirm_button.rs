//! Delete Confirm Button Component
//!
//! Inline two-step delete button: × first, then confirm/cancel. Used by
//! the list tab bar so a stray click cannot drop a whole list.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `on_confirm` - Callback run when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let button_class = button_class.clone();
                view! {
                    <button
                        class=button_class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
