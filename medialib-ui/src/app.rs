//! App Root Component
//!
//! Main application component with global state providers.

use leptos::*;

use crate::components::{DetailModal, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header
            <header class="bg-gray-800 border-b border-gray-700 px-4 py-4">
                <div class="container mx-auto flex items-center space-x-3">
                    <span class="text-2xl">"🗂️"</span>
                    <span class="text-xl font-semibold">"Material Library"</span>
                </div>
            </header>

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            // Footer with loading indicator
            <Footer />

            // Resource detail modal
            <DetailModal />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing load status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let resources = state.resources;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        resources.with(|rows| format!("{} projects", rows.len()))
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
