//! Inline SVG charts. Geometry is computed in plain functions so it can be
//! tested without a DOM.

use contracts::dashboards::d400_sales_dashboard::metrics::{compact_idr, share_label};
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;

pub const PALETTE: [&str; 6] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

fn plot_width() -> f64 {
    WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

/// Upper bound of the y axis; never zero so empty data still draws.
pub fn axis_max(series: &[ChartSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max
    }
}

/// X coordinate of point `index` out of `count`.
pub fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return PAD_LEFT + plot_width() / 2.0;
    }
    PAD_LEFT + plot_width() * index as f64 / (count - 1) as f64
}

pub fn y_at(value: f64, max: f64) -> f64 {
    let v = if value.is_finite() { value.max(0.0) } else { 0.0 };
    PAD_TOP + plot_height() * (1.0 - (v / max).min(1.0))
}

/// `points` attribute of an SVG polyline.
pub fn polyline_points(values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-series line chart over categorical x labels
#[component]
pub fn LineChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<ChartSeries>>,
) -> impl IntoView {
    let max = Memo::new(move |_| axis_max(&series.get()));

    let grid = move || {
        let max = max.get();
        (0..=4)
            .map(|i| {
                let value = max * i as f64 / 4.0;
                let y = y_at(value, max);
                view! {
                    <g>
                        <line x1=PAD_LEFT x2=WIDTH - PAD_RIGHT y1=y y2=y class="chart__grid" />
                        <text x=PAD_LEFT - 6.0 y=y + 4.0 text-anchor="end" class="chart__tick">
                            {compact_idr(value)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    let x_labels = move || {
        let labels = labels.get();
        let count = labels.len();
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text x=x_at(i, count) y=HEIGHT - 8.0 text-anchor="middle" class="chart__tick">
                        {label}
                    </text>
                }
            })
            .collect_view()
    };

    let lines = move || {
        let max = max.get();
        series
            .get()
            .into_iter()
            .map(|s| {
                let points = polyline_points(&s.values, max);
                view! {
                    <polyline points=points fill="none" stroke=s.color stroke-width="2" />
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart">
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="chart__svg" role="img">
                {grid}
                {x_labels}
                {lines}
            </svg>
            <ChartLegend series=series />
        </div>
    }
}

#[component]
fn ChartLegend(#[prop(into)] series: Signal<Vec<ChartSeries>>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {move || {
                series
                    .get()
                    .into_iter()
                    .map(|s| {
                        view! {
                            <span class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                                {s.name}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Bar width in percent of the largest value.
pub fn relative_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value.max(0.0) / max * 100.0).clamp(0.0, 100.0)
}

/// Horizontal bars, one per label. `format` renders the trailing value.
#[component]
pub fn BarList(
    #[prop(into)] items: Signal<Vec<(String, f64)>>,
    #[prop(optional)] format: Option<fn(f64) -> String>,
    #[prop(into, optional)] color: Option<String>,
) -> impl IntoView {
    let format = format.unwrap_or(compact_idr);
    let color = color.unwrap_or_else(|| PALETTE[0].to_string());

    view! {
        <div class="bar-list">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    return view! { <div class="chart__empty">"No data"</div> }.into_any();
                }
                let max = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
                let color = color.clone();
                items
                    .into_iter()
                    .map(|(label, value)| {
                        let width = relative_width(value, max);
                        view! {
                            <div class="bar-list__row">
                                <div class="bar-list__label">{label}</div>
                                <div class="bar-list__track">
                                    <div
                                        class="bar-list__fill"
                                        style=format!("width: {:.1}%; background: {};", width, color)
                                    ></div>
                                </div>
                                <div class="bar-list__value">{format(value)}</div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

/// SVG arc path of a donut slice from `start` to `end` (fractions of a turn).
pub fn donut_slice_path(start: f64, end: f64, radius: f64, inner: f64) -> String {
    let point = |fraction: f64, r: f64| {
        let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
        (r * angle.cos(), r * angle.sin())
    };
    // A full circle cannot be drawn with a single arc
    let end = if end - start >= 1.0 { start + 0.9999 } else { end };
    let large = if end - start > 0.5 { 1 } else { 0 };
    let (x0, y0) = point(start, radius);
    let (x1, y1) = point(end, radius);
    let (x2, y2) = point(end, inner);
    let (x3, y3) = point(start, inner);
    format!(
        "M {x0:.2} {y0:.2} A {radius} {radius} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {inner} {inner} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

/// Cumulative (start, end) fractions for each positive value.
pub fn slice_fractions(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let share = if total > 0.0 && *v > 0.0 { v / total } else { 0.0 };
            let slice = (acc, acc + share);
            acc += share;
            slice
        })
        .collect()
}

/// Donut chart of shares with a legend
#[component]
pub fn DonutChart(#[prop(into)] items: Signal<Vec<(String, f64)>>) -> impl IntoView {
    view! {
        <div class="chart chart--donut">
            {move || {
                let items = items.get();
                let values: Vec<f64> = items.iter().map(|(_, v)| *v).collect();
                if values.iter().all(|v| *v <= 0.0) {
                    return view! { <div class="chart__empty">"No data"</div> }.into_any();
                }
                let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
                let slices = slice_fractions(&values);
                let paths = slices
                    .iter()
                    .enumerate()
                    .filter(|(_, (start, end))| end > start)
                    .map(|(i, (start, end))| {
                        let color = PALETTE[i % PALETTE.len()];
                        view! { <path d=donut_slice_path(*start, *end, 90.0, 55.0) fill=color /> }
                    })
                    .collect_view();
                let legend = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let color = PALETTE[i % PALETTE.len()];
                        let share = share_label(value, total);
                        view! {
                            <div class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background: {};", color)></span>
                                {format!("{} ({})", label, share)}
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <svg viewBox="-100 -100 200 200" class="chart__svg chart__svg--donut" role="img">
                        {paths}
                    </svg>
                    <div class="chart__legend chart__legend--column">{legend}</div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max_never_zero() {
        assert_eq!(axis_max(&[]), 1.0);
        let s = ChartSeries::new("a", "#000", vec![0.0, 0.0]);
        assert_eq!(axis_max(&[s]), 1.0);
        let s = ChartSeries::new("a", "#000", vec![3.0, f64::NAN, 7.0]);
        assert_eq!(axis_max(&[s]), 7.0);
    }

    #[test]
    fn test_polyline_spans_plot_area() {
        let points = polyline_points(&[0.0, 10.0], 10.0);
        let expected = format!(
            "{:.1},{:.1} {:.1},{:.1}",
            PAD_LEFT,
            HEIGHT - PAD_BOTTOM,
            WIDTH - PAD_RIGHT,
            PAD_TOP
        );
        assert_eq!(points, expected);
    }

    #[test]
    fn test_relative_width() {
        assert_eq!(relative_width(5.0, 10.0), 50.0);
        assert_eq!(relative_width(5.0, 0.0), 0.0);
        assert_eq!(relative_width(-5.0, 10.0), 0.0);
    }

    #[test]
    fn test_slice_fractions_ignore_non_positive() {
        let slices = slice_fractions(&[1.0, 0.0, 3.0]);
        assert_eq!(slices[0], (0.0, 0.25));
        assert_eq!(slices[1], (0.25, 0.25));
        assert_eq!(slices[2], (0.25, 1.0));
    }
}
