//! Trend Chart Component
//!
//! 7-day upload trend rendered with HTML5 Canvas, one line per
//! material category.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{Category, DashboardState, TrendPoint};

/// Trend chart component
#[component]
pub fn TrendChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw chart when the series changes
    create_effect(move |_| {
        let series = state.trend.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            // Legend
            <ChartLegend />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", category.color())
                            />
                            <span class="text-sm text-gray-300">{category.label()}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Draw the trend series on canvas
fn draw_trend(canvas: &HtmlCanvasElement, series: &[TrendPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No trend data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    // Find global min/max for y-axis across all categories
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for point in series {
        for category in Category::ALL {
            let value = point.counts.get(category) as f64;
            global_min = global_min.min(value);
            global_max = global_max.max(value);
        }
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    if global_min == global_max {
        global_min -= 1.0;
        global_max += 1.0;
    }

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let x_step = if series.len() > 1 {
        chart_width / (series.len() - 1) as f64
    } else {
        chart_width
    };

    // Draw one line per category
    for category in Category::ALL {
        ctx.set_stroke_style(&category.color().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, point) in series.iter().enumerate() {
            let value = point.counts.get(category) as f64;
            let x = margin_left + i as f64 * x_step;

            // Scale y to chart area (inverted because canvas y grows downward)
            let y = margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();

        // Draw points
        ctx.set_fill_style(&category.color().into());
        for (i, point) in series.iter().enumerate() {
            let value = point.counts.get(category) as f64;
            let x = margin_left + i as f64 * x_step;
            let y = margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X-axis labels, one per day
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    for (i, point) in series.iter().enumerate() {
        let x = margin_left + i as f64 * x_step;
        let _ = ctx.fill_text(&point.name, x - 18.0, height - 10.0);
    }
}
