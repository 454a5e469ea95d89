//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod detail_modal;
pub mod loading;
pub mod resource_table;
pub mod stat_card;
pub mod toast;
pub mod trend_chart;

pub use detail_modal::DetailModal;
pub use loading::{CardSkeleton, ChartSkeleton, TableSkeleton};
pub use resource_table::ResourceTable;
pub use stat_card::StatCard;
pub use toast::Toast;
pub use trend_chart::TrendChart;
