//! Detail Modal Component
//!
//! Tabbed modal for a single resource: an overview tab plus one tab
//! per material category, with expandable sub-item rows in the
//! category tables.

use leptos::*;
use std::collections::HashSet;

use crate::state::global::{
    Category, Column, DashboardState, DetailState, ResourceDetail, ResourceItem, SubItem,
};

/// Active tab of the detail modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Cat(Category),
}

/// Resource detail modal, shown while a resource is selected
#[component]
pub fn DetailModal() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let active_tab = create_rw_signal(Tab::Overview);
    let expanded = create_rw_signal(HashSet::<String>::new());

    let selected = state.selected;
    let detail = state.detail;

    // Reopening (or switching resources) resets to the overview tab
    // and collapses all rows
    create_effect(move |_| {
        let _ = selected.get();
        active_tab.set(Tab::Overview);
        expanded.set(HashSet::new());
    });
    let state_for_backdrop = state.clone();
    let on_backdrop = move |_| state_for_backdrop.close_resource();

    view! {
        {move || {
            if selected.get().is_none() {
                return view! {}.into_view();
            }

            let on_backdrop = on_backdrop.clone();
            view! {
                <div class="fixed inset-0 z-40 flex items-center justify-center p-4">
                    // Backdrop
                    <div class="absolute inset-0 bg-black/60" on:click=on_backdrop />

                    // Dialog
                    <div class="relative bg-gray-800 rounded-xl shadow-xl w-full max-w-5xl max-h-[85vh] flex flex-col">
                        <ModalHeader active_tab=active_tab />

                        <div class="flex-1 overflow-y-auto p-6">
                            {move || {
                                match detail.get() {
                                    DetailState::Closed => view! {}.into_view(),
                                    DetailState::Loading => view! {
                                        <div class="flex items-center justify-center py-16">
                                            <div class="loading-spinner w-8 h-8" />
                                        </div>
                                    }.into_view(),
                                    DetailState::Loaded(detail) => view! {
                                        <TabBody detail=detail active_tab=active_tab expanded=expanded />
                                    }.into_view(),
                                }
                            }}
                        </div>
                    </div>
                </div>
            }.into_view()
        }}
    }
}

/// Title bar with close button and tab strip
#[component]
fn ModalHeader(active_tab: RwSignal<Tab>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let state_for_close = state.clone();
    view! {
        <div class="border-b border-gray-700 px-6 pt-4">
            <div class="flex items-center justify-between mb-3">
                <h2 class="text-xl font-semibold">
                    {move || {
                        match state.detail.get() {
                            DetailState::Loaded(detail) => detail.name,
                            _ => "Loading...".to_string(),
                        }
                    }}
                </h2>
                <button
                    class="text-gray-400 hover:text-white text-xl px-2"
                    on:click=move |_| state_for_close.close_resource()
                >
                    "✕"
                </button>
            </div>

            // Tab strip
            <div class="flex space-x-1 overflow-x-auto">
                <TabButton tab=Tab::Overview active_tab=active_tab />
                {Category::ALL
                    .into_iter()
                    .map(|category| view! {
                        <TabButton tab=Tab::Cat(category) active_tab=active_tab />
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One tab of the tab strip
#[component]
fn TabButton(tab: Tab, active_tab: RwSignal<Tab>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let label = move || match tab {
        Tab::Overview => "Overview".to_string(),
        Tab::Cat(category) => {
            let count = match state.detail.get() {
                DetailState::Loaded(detail) => detail.summary.get(category).count,
                _ => 0,
            };
            tab_label(category, count)
        }
    };

    view! {
        <button
            on:click=move |_| active_tab.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-t-lg text-sm font-medium whitespace-nowrap transition-colors";
                if active_tab.get() == tab {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Category tab caption, label plus the summary count
fn tab_label(category: Category, count: usize) -> String {
    format!("{} ({})", category.label(), count)
}

/// Body of the currently active tab
#[component]
fn TabBody(
    detail: ResourceDetail,
    active_tab: RwSignal<Tab>,
    expanded: RwSignal<HashSet<String>>,
) -> impl IntoView {
    view! {
        {move || {
            let detail = detail.clone();
            match active_tab.get() {
                Tab::Overview => view! { <OverviewTab detail=detail /> }.into_view(),
                Tab::Cat(category) => view! {
                    <CategoryTab detail=detail category=category expanded=expanded />
                }.into_view(),
            }
        }}
    }
}

/// Overview tab: identity, tags, and one summary block per category
#[component]
fn OverviewTab(detail: ResourceDetail) -> impl IntoView {
    view! {
        <div class="space-y-6">
            // Identity
            <div class="grid md:grid-cols-2 gap-4 text-sm">
                <div>
                    <span class="text-gray-400">"ID: "</span>
                    <span class="font-mono">{detail.id.clone()}</span>
                </div>
                <div>
                    <span class="text-gray-400">"Created: "</span>
                    {detail.created_at.clone()}
                </div>
                <div>
                    <span class="text-gray-400">"Updated: "</span>
                    {detail.updated_at.clone()}
                </div>
            </div>

            <p class="text-gray-300">{detail.description.clone()}</p>

            // Tags
            <div class="flex flex-wrap gap-2">
                {detail.tags.iter().map(|tag| view! {
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-1 rounded-full">
                        {tag.clone()}
                    </span>
                }).collect::<Vec<_>>()}
            </div>

            // Per-category summaries
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {Category::ALL.into_iter().map(|category| {
                    let summary = detail.summary.get(category).clone();
                    view! {
                        <div
                            class="bg-gray-900 rounded-lg p-4"
                            style=format!("border-left: 3px solid {}", category.color())
                        >
                            <div class="flex items-center justify-between mb-2">
                                <span class="font-medium">{category.label()}</span>
                                <span class="text-2xl font-bold">{summary.count}</span>
                            </div>
                            <div class="text-sm text-gray-400 space-y-1">
                                <div>
                                    "Formats: "
                                    {if summary.formats.is_empty() {
                                        "—".to_string()
                                    } else {
                                        summary.formats.join(", ")
                                    }}
                                </div>
                                <div>"Total size: " {summary.total_size.clone()}</div>
                                {summary.total_duration.clone().map(|d| view! {
                                    <div>"Total duration: " {d}</div>
                                })}
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// One category tab: an item table with expandable sub-item rows
#[component]
fn CategoryTab(
    detail: ResourceDetail,
    category: Category,
    expanded: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let items = detail.resources.get(category).to_vec();
    let columns = category.columns();

    if items.is_empty() {
        return view! {
            <div class="text-center text-gray-500 py-12">
                {format!("No {} in this resource", category.label().to_lowercase())}
            </div>
        }
        .into_view();
    }

    view! {
        <table class="w-full text-sm text-left">
            <thead class="text-xs text-gray-400 uppercase border-b border-gray-700">
                <tr>
                    <th class="px-2 py-2 w-8" />
                    {columns.iter().map(|c| view! {
                        <th class="px-3 py-2">{c.header()}</th>
                    }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {items.into_iter().map(|item| view! {
                    <ItemRow item=item category=category expanded=expanded />
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_view()
}

/// One top-level item row plus, when expanded, its sub-item table
#[component]
fn ItemRow(
    item: ResourceItem,
    category: Category,
    expanded: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let id = item.id.clone();
    let id_for_memo = id.clone();
    let is_expanded = create_memo(move |_| expanded.with(|set| set.contains(&id_for_memo)));

    let id_for_toggle = id.clone();
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(&id_for_toggle) {
                set.insert(id_for_toggle.clone());
            }
        });
    };

    let columns = category.columns();
    let sub_columns = category.sub_columns();
    let sub_items = item.items.clone();
    let cells = item_cells(&item, columns);

    view! {
        <tr
            class="border-b border-gray-700 hover:bg-gray-750 cursor-pointer transition"
            on:click=toggle
        >
            <td class="px-2 py-2 text-gray-500">
                {move || if is_expanded.get() { "▾" } else { "▸" }}
            </td>
            {cells}
        </tr>

        {move || {
            if !is_expanded.get() {
                return view! {}.into_view();
            }

            let span = columns.len() + 1;
            view! {
                <tr class="bg-gray-900">
                    <td colspan=span class="px-6 py-3">
                        <table class="w-full text-xs text-left">
                            <thead class="text-gray-500 uppercase">
                                <tr>
                                    {sub_columns.iter().map(|c| view! {
                                        <th class="px-3 py-1">{c.header()}</th>
                                    }).collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                {sub_items.iter().map(|sub| {
                                    let cells = sub_item_cells(sub, sub_columns);
                                    view! {
                                        <tr class="border-t border-gray-800">{cells}</tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </td>
                </tr>
            }.into_view()
        }}
    }
}

/// Field values a cell may draw from, shared by items and sub-items
struct CellFields<'a> {
    name: &'a str,
    format: &'a str,
    size: &'a str,
    created_at: &'a str,
    updated_at: &'a str,
    thumbnail: Option<&'a str>,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<&'a str>,
    resolution: Option<&'a str>,
    bitrate: Option<&'a str>,
    word_count: Option<u32>,
    page_count: Option<u32>,
}

impl<'a> From<&'a ResourceItem> for CellFields<'a> {
    fn from(item: &'a ResourceItem) -> Self {
        CellFields {
            name: &item.name,
            format: &item.format,
            size: &item.size,
            created_at: &item.created_at,
            updated_at: &item.updated_at,
            thumbnail: item.thumbnail.as_deref(),
            width: item.width,
            height: item.height,
            duration: item.duration.as_deref(),
            resolution: item.resolution.as_deref(),
            bitrate: item.bitrate.as_deref(),
            word_count: item.word_count,
            page_count: item.page_count,
        }
    }
}

impl<'a> From<&'a SubItem> for CellFields<'a> {
    fn from(item: &'a SubItem) -> Self {
        CellFields {
            name: &item.name,
            format: &item.format,
            size: &item.size,
            created_at: &item.created_at,
            updated_at: &item.updated_at,
            thumbnail: item.thumbnail.as_deref(),
            width: item.width,
            height: item.height,
            duration: item.duration.as_deref(),
            resolution: item.resolution.as_deref(),
            bitrate: item.bitrate.as_deref(),
            word_count: item.word_count,
            page_count: item.page_count,
        }
    }
}

fn item_cells(item: &ResourceItem, columns: &'static [Column]) -> Vec<View> {
    render_cells(CellFields::from(item), columns)
}

fn sub_item_cells(item: &SubItem, columns: &'static [Column]) -> Vec<View> {
    render_cells(CellFields::from(item), columns)
}

/// Render one table cell per column from the item's fields
fn render_cells(fields: CellFields<'_>, columns: &'static [Column]) -> Vec<View> {
    columns
        .iter()
        .map(|column| match column {
            Column::Thumbnail => match fields.thumbnail {
                Some(url) => view! {
                    <td class="px-3 py-2">
                        <img src=url.to_string() class="w-12 h-8 object-cover rounded" />
                    </td>
                }
                .into_view(),
                None => view! { <td class="px-3 py-2 text-gray-600">"—"</td> }.into_view(),
            },
            Column::Name => view! {
                <td class="px-3 py-2 font-medium">{fields.name.to_string()}</td>
            }
            .into_view(),
            Column::Format => view! {
                <td class="px-3 py-2">
                    <span class="bg-gray-700 text-xs px-2 py-0.5 rounded">
                        {fields.format.to_string()}
                    </span>
                </td>
            }
            .into_view(),
            Column::Dimensions => {
                let text = match (fields.width, fields.height) {
                    (Some(w), Some(h)) => format!("{}×{}", w, h),
                    _ => "—".to_string(),
                };
                view! { <td class="px-3 py-2 font-mono">{text}</td> }.into_view()
            }
            Column::Duration => text_cell(fields.duration),
            Column::Resolution => text_cell(fields.resolution),
            Column::Bitrate => text_cell(fields.bitrate),
            Column::WordCount => count_cell(fields.word_count),
            Column::PageCount => count_cell(fields.page_count),
            Column::Size => view! {
                <td class="px-3 py-2 font-mono">{fields.size.to_string()}</td>
            }
            .into_view(),
            Column::Created => view! {
                <td class="px-3 py-2 text-gray-400">{fields.created_at.to_string()}</td>
            }
            .into_view(),
            Column::Updated => view! {
                <td class="px-3 py-2 text-gray-400">{fields.updated_at.to_string()}</td>
            }
            .into_view(),
        })
        .collect()
}

fn text_cell(value: Option<&str>) -> View {
    let text = value.unwrap_or("—").to_string();
    view! { <td class="px-3 py-2 font-mono">{text}</td> }.into_view()
}

fn count_cell(value: Option<u32>) -> View {
    let text = value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string());
    view! { <td class="px-3 py-2 text-right">{text}</td> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label_includes_summary_count() {
        assert_eq!(tab_label(Category::Images, 6), "Images (6)");
        assert_eq!(tab_label(Category::Other, 0), "Other (0)");
    }
}
