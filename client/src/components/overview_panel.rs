//! Inline AI analysis panel for the inspection detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! One-shot summarizer surface: renders the inspection snapshot into a
//! context block, requests a single completion with the analyst prompt and
//! no prior history, and reveals the reply progressively. Failures collapse
//! to a muted notice; without a credential the panel does not render at all.

#[cfg(test)]
#[path = "overview_panel_test.rs"]
mod overview_panel_test;

use leptos::prelude::*;

use assistant::CompletionConfig;
use assistant::context::{ContextAnnotation, ContextAnomaly, InspectionContext};

use crate::components::status_badge::status_display;
use crate::net::types::InspectionDetail;
use crate::util::typing::{RevealPhase, TypingReveal};

/// Build the analyst's context snapshot from a loaded inspection.
pub(crate) fn inspection_context_from(detail: &InspectionDetail) -> InspectionContext {
    InspectionContext {
        transformer_no: Some(detail.inspection.transformer_no.clone()),
        branch: Some(detail.inspection.branch.clone()),
        inspection_date: Some(detail.inspection.date_of_inspection.clone()),
        status: Some(status_display(&detail.inspection.status).0),
        has_baseline_image: Some(detail.baseline_image_url.is_some()),
        has_thermal_image: Some(detail.thermal_image_url.is_some()),
        annotations: detail
            .annotations
            .iter()
            .map(|a| ContextAnnotation { label: a.label.clone(), description: a.description.clone() })
            .collect(),
        anomalies: detail
            .anomalies
            .iter()
            .map(|a| ContextAnomaly { label: a.label.clone(), confidence: a.confidence, detail: a.detail.clone() })
            .collect(),
        annotation_count: Some(count_of(detail.annotations.len())),
        anomaly_count: Some(count_of(detail.anomalies.len())),
        summary: detail.summary.clone(),
        recommendations: detail.recommendations.clone(),
    }
}

fn count_of(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// AI analysis panel with a generate action and a progressive text reveal.
#[component]
pub fn OverviewPanel(detail: InspectionDetail) -> impl IntoView {
    let config = use_context::<Option<CompletionConfig>>().flatten();
    let configured = config.is_some();

    let reveal = RwSignal::new(TypingReveal::idle());
    let reveal_generation = RwSignal::new(0u64);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let context_block = inspection_context_from(&detail).render();

    let on_generate = Callback::new(move |()| {
        if loading.get() {
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let context_block = context_block.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::completion::request_completion(
                    config.as_ref(),
                    assistant::prompt::INSPECTION_ANALYST_PROMPT,
                    &context_block,
                    &[],
                )
                .await;
                match outcome {
                    Ok(text) => crate::util::typing::start_reveal(reveal, reveal_generation, text),
                    Err(_) => error.set(Some("AI analysis is unavailable right now.".to_owned())),
                }
                loading.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &context_block);
            loading.set(false);
        }
    });

    view! {
        <Show when=move || configured>
            <section class="overview-panel">
                <header class="overview-panel__header">
                    <h3>"AI Analysis"</h3>
                    <button
                        class="btn btn--primary"
                        disabled=move || loading.get()
                        on:click=move |_| on_generate.run(())
                    >
                        {move || if loading.get() { "Analyzing..." } else { "Generate analysis" }}
                    </button>
                </header>

                <Show when=move || error.get().is_some()>
                    <p class="overview-panel__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_none() && reveal.get().phase() != RevealPhase::Idle>
                    <p class="overview-panel__text">{move || reveal.get().visible()}</p>
                </Show>
                <Show when=move || {
                    error.get().is_none() && reveal.get().phase() == RevealPhase::Idle && !loading.get()
                }>
                    <p class="overview-panel__hint">"Generate an AI summary of the findings on this inspection."</p>
                </Show>
            </section>
        </Show>
    }
}
