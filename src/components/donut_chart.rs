use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::{self, DonutCounts};

pub const LABELS: [&str; 2] = ["Items Found (Posts)", "Items Lost (Claims)"];
pub const COLORS: [&str; 2] = ["#77102b", "#ac495d"];

const CUTOUT: f64 = 0.65;
const BORDER_WIDTH: f64 = 2.0;

pub fn init(document: &Document) {
    let Some(root) = document.get_element_by_id("donut-chart") else {
        return;
    };
    let Some(counts) = model::injected::<DonutCounts>("__DONUT_DATA__") else {
        return;
    };
    yew::Renderer::<DonutChart>::with_root_and_props(root, DonutChartProps { counts }).render();
}

#[derive(Properties, PartialEq, Clone)]
pub struct DonutChartProps {
    pub counts: DonutCounts,
}

/// The two segment sweeps in radians, clockwise from 12 o'clock, found
/// first. `None` when both counts are zero.
fn segment_sweeps(counts: DonutCounts) -> Option<[(f64, f64); 2]> {
    let found = counts.found as f64;
    let lost = counts.lost as f64;
    let total = found + lost;
    if total <= 0.0 {
        return None;
    }
    let start = -PI / 2.0;
    let split = start + (found / total) * 2.0 * PI;
    Some([(start, split), (split, start + 2.0 * PI)])
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        // Drawn exactly once; the counts are fixed for the page's lifetime.
        let canvas_ref = canvas_ref.clone();
        let counts = props.counts;
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw(&canvas, counts);
            }
            || ()
        });
    }

    html! {
        <div class="donut-chart">
            <canvas ref={canvas_ref} width="320" height="320"></canvas>
            <ul class="donut-legend">
                { for LABELS.iter().zip(COLORS.iter()).map(|(label, color)| html! {
                    <li class="donut-legend-entry">
                        <span class="donut-swatch" style={format!("background:{};", color)}></span>
                        <span>{ *label }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

fn draw(canvas: &HtmlCanvasElement, counts: DonutCounts) {
    let Some(sweeps) = segment_sweeps(counts) else {
        return;
    };
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(ctx) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };

    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let cx = w / 2.0;
    let cy = h / 2.0;
    let outer = w.min(h) / 2.0 - BORDER_WIDTH;
    let inner = outer * CUTOUT;

    ctx.set_line_width(BORDER_WIDTH);
    ctx.set_stroke_style_str("#ffffff");
    for ((start, end), color) in sweeps.into_iter().zip(COLORS) {
        if end - start <= f64::EPSILON {
            continue;
        }
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAU: f64 = 2.0 * PI;

    #[test]
    fn sweeps_are_proportional_to_counts() {
        let [(s0, e0), (s1, e1)] =
            segment_sweeps(DonutCounts { found: 7, lost: 3 }).unwrap();
        assert!((e0 - s0 - 0.7 * TAU).abs() < 1e-12);
        assert!((e1 - s1 - 0.3 * TAU).abs() < 1e-12);
        // Contiguous ring starting at 12 o'clock.
        assert_eq!(s0, -PI / 2.0);
        assert_eq!(e0, s1);
        assert!((e1 - (s0 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn all_found_fills_the_ring() {
        let [(s0, e0), (s1, e1)] =
            segment_sweeps(DonutCounts { found: 5, lost: 0 }).unwrap();
        assert!((e0 - s0 - TAU).abs() < 1e-12);
        assert!((e1 - s1).abs() < 1e-12);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert!(segment_sweeps(DonutCounts::default()).is_none());
    }

    #[test]
    fn legend_labels_are_fixed() {
        assert_eq!(LABELS, ["Items Found (Posts)", "Items Lost (Claims)"]);
        assert_eq!(COLORS, ["#77102b", "#ac495d"]);
    }
}
