//! Resource Table Component
//!
//! Per-project material counts with roll-up columns. Clicking a row
//! opens the resource detail modal.

use leptos::*;

use crate::state::global::{Category, DashboardState};

/// Project resource table
#[component]
pub fn ResourceTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm text-left">
                <thead class="text-xs text-gray-400 uppercase border-b border-gray-700">
                    <tr>
                        <th class="px-4 py-3">"Name"</th>
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <th class="px-4 py-3 text-right">{c.label()}</th> })
                            .collect::<Vec<_>>()}
                        <th class="px-4 py-3 text-right">"Video Duration"</th>
                        <th class="px-4 py-3 text-right">"Disk Usage"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.resources.get();

                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="8" class="px-4 py-8 text-center text-gray-500">
                                        "No resources"
                                    </td>
                                </tr>
                            }.into_view();
                        }

                        rows.into_iter().map(|row| {
                            let key = row.key.clone();
                            let state = state.clone();
                            let on_click = move |_| state.open_resource(&key);

                            view! {
                                <tr
                                    class="border-b border-gray-700 hover:bg-gray-750 cursor-pointer transition"
                                    on:click=on_click
                                >
                                    <td class="px-4 py-3 font-medium">{row.name.clone()}</td>
                                    {Category::ALL
                                        .into_iter()
                                        .map(|c| {
                                            let count = row.counts.get(c);
                                            view! { <td class="px-4 py-3 text-right">{count}</td> }
                                        })
                                        .collect::<Vec<_>>()}
                                    <td class="px-4 py-3 text-right font-mono">{row.video_duration.clone()}</td>
                                    <td class="px-4 py-3 text-right font-mono">{row.disk_usage.clone()}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
