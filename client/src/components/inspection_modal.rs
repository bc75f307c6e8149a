//! Modal form for creating an inspection record.
//!
//! ERROR HANDLING
//! ==============
//! Local and backend validation failures render inline next to the submit
//! row; the modal stays open so the user can correct and resubmit.

#[cfg(test)]
#[path = "inspection_modal_test.rs"]
mod inspection_modal_test;

use leptos::prelude::*;

use crate::net::types::{Inspection, NewInspection};

/// Check the form before it leaves the browser. The backend revalidates;
/// this only catches the obviously incomplete submissions.
fn validate_new_inspection(form: &NewInspection) -> Result<(), String> {
    if form.branch.trim().is_empty() {
        return Err("Branch is required.".to_owned());
    }
    if form.transformer_no.trim().is_empty() {
        return Err("Transformer number is required.".to_owned());
    }
    if form.date_of_inspection.trim().is_empty() {
        return Err("Inspection date is required.".to_owned());
    }
    if form.maintenance_date.trim().is_empty() {
        return Err("Maintenance date is required.".to_owned());
    }
    if !is_valid_time(&form.time) {
        return Err("Time must be HH:MM or HH:MM:SS.".to_owned());
    }
    Ok(())
}

fn is_valid_time(time: &str) -> bool {
    let parts: Vec<&str> = time.split(':').collect();
    matches!(parts.len(), 2 | 3)
        && parts
            .iter()
            .all(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_digit()))
}

/// Modal dialog for creating a new inspection record.
#[component]
pub fn InspectionModal(on_close: Callback<()>, on_created: Callback<Inspection>) -> impl IntoView {
    let branch = RwSignal::new(String::new());
    let transformer_no = RwSignal::new(String::new());
    let date_of_inspection = RwSignal::new(String::new());
    let maintenance_date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let form = NewInspection {
            branch: branch.get().trim().to_owned(),
            transformer_no: transformer_no.get().trim().to_owned(),
            date_of_inspection: date_of_inspection.get().trim().to_owned(),
            maintenance_date: maintenance_date.get().trim().to_owned(),
            time: time.get().trim().to_owned(),
        };
        if let Err(message) = validate_new_inspection(&form) {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_inspection(&form).await {
                Ok(created) => {
                    // Closing unmounts this modal; no signal writes after.
                    on_created.run(created);
                    on_close.run(());
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&form, on_created);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--inspection" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Inspection"</h2>

                <label class="dialog__label">
                    "Branch"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || branch.get()
                        on:input=move |ev| branch.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Transformer No"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || transformer_no.get()
                        on:input=move |ev| transformer_no.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Date of Inspection"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || date_of_inspection.get()
                        on:input=move |ev| date_of_inspection.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Maintenance Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || maintenance_date.get()
                        on:input=move |ev| maintenance_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Time"
                    <input
                        class="dialog__input"
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        {move || if busy.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
