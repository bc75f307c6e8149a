//! Inspection detail page with findings and the AI analysis panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::NavBar;
use crate::components::overview_panel::OverviewPanel;
use crate::components::status_badge::StatusBadge;
use crate::net::types::InspectionDetail;
use crate::state::auth::AuthState;

/// Inspection detail page. Redirects to `/login` once the session check
/// finishes without a user.
#[component]
pub fn InspectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let params = use_params_map();
    let detail = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_inspection(&id).await }
    });

    view! {
        <div class="inspection-page">
            <NavBar/>
            <Suspense fallback=move || view! { <p>"Loading inspection..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|loaded| match loaded {
                            None => {
                                view! {
                                    <p class="inspection-page__missing">"Inspection not found."</p>
                                }
                                    .into_any()
                            }
                            Some(d) => view! { <InspectionView detail=d/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn InspectionView(detail: InspectionDetail) -> impl IntoView {
    let inspection = detail.inspection.clone();

    view! {
        <article class="inspection-detail">
            <header class="inspection-detail__header">
                <h1>{format!("Transformer {}", inspection.transformer_no)}</h1>
                <StatusBadge status=inspection.status.clone()/>
            </header>

            <dl class="inspection-detail__fields">
                <dt>"Branch"</dt>
                <dd>{inspection.branch.clone()}</dd>
                <dt>"Inspected"</dt>
                <dd>{inspection.date_of_inspection.clone()}</dd>
                <dt>"Time"</dt>
                <dd>{inspection.time.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                <dt>"Maintenance"</dt>
                <dd>{inspection.maintenance_date.clone().unwrap_or_else(|| "Not scheduled".to_owned())}</dd>
            </dl>

            <section class="inspection-detail__media">
                <MediaFlag label="Baseline image" present=detail.baseline_image_url.is_some()/>
                <MediaFlag label="Thermal image" present=detail.thermal_image_url.is_some()/>
            </section>

            {(!detail.annotations.is_empty())
                .then(|| {
                    view! {
                        <section class="inspection-detail__annotations">
                            <h3>"Annotations"</h3>
                            <ul>
                                {detail
                                    .annotations
                                    .iter()
                                    .map(|a| {
                                        view! {
                                            <li>
                                                <strong>{a.label.clone()}</strong>
                                                {a
                                                    .description
                                                    .clone()
                                                    .map(|d| view! { <p class="muted">{d}</p> })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                })}

            {(!detail.anomalies.is_empty())
                .then(|| {
                    view! {
                        <section class="inspection-detail__anomalies">
                            <h3>"Detected Anomalies"</h3>
                            <ul>
                                {detail
                                    .anomalies
                                    .iter()
                                    .map(|a| {
                                        view! {
                                            <li>
                                                <strong>{a.label.clone()}</strong>
                                                {a
                                                    .confidence
                                                    .map(|c| {
                                                        view! {
                                                            <span class="muted">{format!(" {c}% confidence")}</span>
                                                        }
                                                    })}
                                                {a.detail.clone().map(|d| view! { <p class="muted">{d}</p> })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                })}

            <OverviewPanel detail=detail.clone()/>
        </article>
    }
}

#[component]
fn MediaFlag(label: &'static str, present: bool) -> impl IntoView {
    view! {
        <span class="media-flag" class:media-flag--present=present>
            {label}
            ": "
            {if present { "available" } else { "not uploaded" }}
        </span>
    }
}
