//! Dashboard Page
//!
//! Main dashboard view: category stat cards, the 7-day trend chart,
//! and the project resource table. All three datasets are fetched
//! concurrently on mount and applied together, so the page never
//! renders a partial mix of fresh and missing data.

use leptos::*;

use crate::api;
use crate::components::{
    CardSkeleton, ChartSkeleton, ResourceTable, StatCard, TableSkeleton, TrendChart,
};
use crate::state::global::{Category, DashboardState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let (counts, trend, rows) = futures::join!(
                api::fetch_counts(),
                api::fetch_trend(),
                api::fetch_resource_list(),
            );

            match (counts, trend, rows) {
                (Ok(counts), Ok(trend), Ok(rows)) => {
                    state.counts.set(Some(counts));
                    state.trend.set(trend);
                    state.resources.set(rows);
                }
                (counts, trend, rows) => {
                    // Keep the skeletons up rather than showing a
                    // partial dashboard
                    let message = counts
                        .err()
                        .or(trend.err())
                        .or(rows.err())
                        .unwrap_or_else(|| "Failed to load dashboard".to_string());
                    state.show_error(&message);
                }
            }

            state.loading.set(false);
        });
    });

    let loaded = create_memo(move |_| state.counts.get().is_some());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Material Library"</h1>
                <p class="text-gray-400 mt-1">"Library contents at a glance"</p>
            </div>

            // Category count cards
            <section>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                    {move || {
                        if loaded.get() {
                            Category::ALL
                                .into_iter()
                                .map(|category| view! { <StatCard category=category /> }.into_view())
                                .collect::<Vec<_>>()
                        } else {
                            (0..5)
                                .map(|_| view! { <CardSkeleton /> }.into_view())
                                .collect::<Vec<_>>()
                        }
                    }}
                </div>
            </section>

            // Trend chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Upload Trend (7 days)"</h2>
                {move || {
                    if loaded.get() {
                        view! { <TrendChart /> }.into_view()
                    } else {
                        view! { <ChartSkeleton /> }.into_view()
                    }
                }}
            </section>

            // Resource table
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Project Resources"</h2>
                {move || {
                    if loaded.get() {
                        view! { <ResourceTable /> }.into_view()
                    } else {
                        view! { <TableSkeleton /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
