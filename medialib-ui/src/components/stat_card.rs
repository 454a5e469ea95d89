//! Stat Card Component
//!
//! Displays the library-wide count for a single material category.

use leptos::*;

use crate::state::global::{Category, DashboardState};

/// Category count card
#[component]
pub fn StatCard(category: Category) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let value = create_memo(move |_| {
        state
            .counts
            .get()
            .map(|counts| counts.get(category))
    });

    view! {
        <div
            class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition"
            style=format!("border-top: 3px solid {}", category.color())
        >
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{category.label()}</span>
                <span class="text-2xl">{category.icon()}</span>
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || {
                    value.get()
                        .map(|v| format_count(v))
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>

            <div class="text-gray-500 text-xs mt-2">"materials"</div>
        </div>
    }
}

/// Format a count with a thousands separator
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1500), "1,500");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
