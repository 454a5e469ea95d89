//! State Management
//!
//! Global application state, API mirror types, and category descriptors.

pub mod global;

pub use global::{
    provide_dashboard_state, Category, Column, DashboardState, DetailState, MaterialCounts,
    ResourceDetail, ResourceItem, ResourceRow, SubItem, TrendPoint,
};
