//! Dashboard page: stat tiles, recent activity, the inspection list, the
//! create-inspection modal, and the floating assistant widget.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use assistant::DashboardContext;

use crate::components::chat_widget::ChatWidget;
use crate::components::inspection_modal::InspectionModal;
use crate::components::navbar::NavBar;
use crate::components::status_badge::StatusBadge;
use crate::net::types::DashboardStats;
use crate::state::auth::AuthState;

/// Build the assistant's context snapshot from loaded stats.
pub(crate) fn dashboard_context_from(stats: &DashboardStats) -> DashboardContext {
    DashboardContext {
        current_view: Some("Dashboard".to_owned()),
        transformer_count: stats.transformer_count,
        inspection_count: stats.inspection_count,
        pending_count: stats.pending_count,
        in_progress_count: stats.in_progress_count,
        completed_count: stats.completed_count,
        health_score: stats.health_score,
        recent_activity: stats.recent_activity.clone(),
    }
}

/// Dashboard page. Redirects to `/login` once the session check finishes
/// without a user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let stats = LocalResource::new(|| crate::net::api::fetch_dashboard_stats());
    let inspections = LocalResource::new(|| crate::net::api::fetch_inspections());

    let show_create = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |_created: crate::net::types::Inspection| inspections.refetch());

    // Rendered snapshot the chat widget grounds every request in; falls
    // back to the sentinel block while stats are still loading.
    let context_block = Signal::derive(move || {
        stats
            .get()
            .flatten()
            .map(|s| dashboard_context_from(&s).render())
            .unwrap_or_else(|| DashboardContext::default().render())
    });

    view! {
        <div class="dashboard-page">
            <NavBar/>

            <header class="dashboard-page__header">
                <h1>"Transformer Inspections"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Inspection"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading overview..."</p> }>
                {move || {
                    stats
                        .get()
                        .flatten()
                        .map(|s| {
                            view! {
                                <div class="dashboard-page__overview">
                                    <div class="dashboard-page__tiles">
                                        <StatTile label="Transformers" value=s.transformer_count/>
                                        <StatTile label="Inspections" value=s.inspection_count/>
                                        <StatTile label="Pending" value=s.pending_count/>
                                        <StatTile label="In Progress" value=s.in_progress_count/>
                                        <StatTile label="Completed" value=s.completed_count/>
                                        <StatTile label="Health" value=s.health_score suffix="%"/>
                                    </div>
                                    {(!s.recent_activity.is_empty())
                                        .then(|| {
                                            view! {
                                                <section class="dashboard-page__activity">
                                                    <h3>"Recent Activity"</h3>
                                                    <ul>
                                                        {s
                                                            .recent_activity
                                                            .iter()
                                                            .map(|entry| view! { <li>{entry.clone()}</li> })
                                                            .collect::<Vec<_>>()}
                                                    </ul>
                                                </section>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p>"Loading inspections..."</p> }>
                {move || {
                    inspections
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                return view! {
                                    <p class="dashboard-page__empty">"No inspections recorded yet."</p>
                                }
                                    .into_any();
                            }
                            view! {
                                <table class="inspection-table">
                                    <thead>
                                        <tr>
                                            <th>"Transformer"</th>
                                            <th>"Branch"</th>
                                            <th>"Date"</th>
                                            <th>"Time"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|inspection| {
                                                view! {
                                                    <tr>
                                                        <td>{inspection.transformer_no.clone()}</td>
                                                        <td>{inspection.branch.clone()}</td>
                                                        <td>{inspection.date_of_inspection.clone()}</td>
                                                        <td>
                                                            {inspection.time.clone().unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>
                                                            <StatusBadge status=inspection.status.clone()/>
                                                        </td>
                                                        <td>
                                                            <a href=format!("/inspection/{}", inspection.id)>"Open"</a>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <InspectionModal on_close=on_close on_created=on_created/>
            </Show>

            <ChatWidget context_block=context_block/>
        </div>
    }
}

/// One aggregate counter on the overview strip.
#[component]
fn StatTile(label: &'static str, value: Option<u32>, #[prop(optional)] suffix: &'static str) -> impl IntoView {
    let display = value.map_or_else(|| "—".to_owned(), |v| format!("{v}{suffix}"));
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{display}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
