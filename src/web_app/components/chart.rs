// web_app/components/chart.rs - Price histogram and discount-vs-rating charts
//
// Both charts are drawn with plotters into an SVG string and mounted with
// `inner_html`. The render functions only take already-aggregated data, so
// they run the same during SSR, in the browser and in tests.

use std::error::Error;

use anyhow::{anyhow, Result};
use leptos::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::web_app::model::{PriceHistogram, PriceRange, ScatterPoint};

/// Width and height of each chart, in pixels
pub const CHART_SIZE: (u32, u32) = (480, 280);

/// Discount axis runs 0-100 %
pub const DISCOUNT_AXIS_MAX: f64 = 100.0;
/// Rating axis runs 0-5
pub const RATING_AXIS_MAX: f64 = 5.0;

const BAR_COLOR: RGBColor = RGBColor(54, 162, 235);
const POINT_COLOR: RGBColor = RGBColor(255, 99, 132);

type DrawResult = std::result::Result<(), Box<dyn Error>>;

fn bucket_label(index: u32) -> String {
    PriceRange::ALL
        .get(index as usize)
        .map(|range| range.label().to_string())
        .unwrap_or_default()
}

/// Scatter coordinates pulled inside the chart axes.
pub fn clamp_to_axes(point: &ScatterPoint) -> (f64, f64) {
    (
        point.x.clamp(0.0, DISCOUNT_AXIS_MAX),
        point.y.clamp(0.0, RATING_AXIS_MAX),
    )
}

fn draw_price_histogram(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    histogram: &PriceHistogram,
) -> DrawResult {
    root.fill(&WHITE)?;

    // Integer ranges are inclusive, so 0..=last gives one slot per bucket
    let last = histogram.buckets.len().saturating_sub(1) as u32;
    let top = histogram.max_count().max(1) as u32 + 1;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(40)
        .build_cartesian_2d((0u32..last).into_segmented(), 0u32..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Price range (₽)")
        .y_desc("Products")
        .x_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => bucket_label(*i),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 11))
        .axis_desc_style(("sans-serif", 12))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.mix(0.7).filled())
            .margin(8)
            .data(
                histogram
                    .buckets
                    .iter()
                    .enumerate()
                    .map(|(i, bucket)| (i as u32, bucket.count as u32)),
            ),
    )?;

    root.present()?;
    Ok(())
}

fn draw_discount_rating(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    points: &[ScatterPoint],
) -> DrawResult {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..DISCOUNT_AXIS_MAX, 0f64..RATING_AXIS_MAX)?;

    chart
        .configure_mesh()
        .x_desc("Discount (%)")
        .y_desc("Rating")
        .label_style(("sans-serif", 11))
        .axis_desc_style(("sans-serif", 12))
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(clamp_to_axes(point), 4, POINT_COLOR.mix(0.7).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Price distribution as an SVG document.
pub fn render_price_histogram(histogram: &PriceHistogram) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        draw_price_histogram(&root, histogram)
            .map_err(|e| anyhow!("Failed to draw price histogram: {}", e))?;
    }
    Ok(buffer)
}

/// Discount vs rating scatter plot as an SVG document.
pub fn render_discount_rating(points: &[ScatterPoint]) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        draw_discount_rating(&root, points)
            .map_err(|e| anyhow!("Failed to draw discount/rating chart: {}", e))?;
    }
    Ok(buffer)
}

fn svg_or_empty(rendered: Result<String>) -> String {
    rendered.unwrap_or_else(|e| {
        tracing::warn!("{}", e);
        String::new()
    })
}

/// Price distribution bar chart
#[component]
pub fn PriceHistogramChart(histogram: Signal<PriceHistogram>) -> impl IntoView {
    let svg = move || svg_or_empty(histogram.with(render_price_histogram));

    view! {
        <figure class="bg-white rounded-2xl shadow-sm border border-gray-100 p-4">
            <figcaption class="font-bold text-gray-800 mb-2">"Price distribution"</figcaption>
            <div class="w-full overflow-x-auto" inner_html=svg></div>
        </figure>
    }
}

/// Discount percentage vs rating scatter plot
#[component]
pub fn DiscountRatingChart(points: Signal<Vec<ScatterPoint>>) -> impl IntoView {
    let svg = move || svg_or_empty(points.with(|p| render_discount_rating(p)));

    view! {
        <figure class="bg-white rounded-2xl shadow-sm border border-gray-100 p-4">
            <figcaption class="font-bold text-gray-800 mb-2">"Discount vs rating"</figcaption>
            <div class="w-full overflow-x-auto" inner_html=svg></div>
        </figure>
    }
}
