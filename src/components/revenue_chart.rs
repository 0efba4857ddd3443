use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction,
        LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::Config;
use crate::models::currency::{AxisFormat, CURRENCY_RATES, format_axis_value};
use crate::models::summary::{RevenuePoint, StackedSeries, Summary};
use crate::utils::debounce::debounced_listener;

const REVENUE_CHART_ID: &str = "revenue-chart";
const STACKED_CHART_ID: &str = "multi-currency-chart";
const RESIZE_DEBOUNCE_MS: u32 = 150;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";
const TITLE_COLOR: &str = "#1f2937";
const ACCENT: &str = "#3b82f6";

/// How the single-currency trend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Area,
    Line,
    Bar,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[ChartKind::Area, ChartKind::Line, ChartKind::Bar]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ChartKind::Area => "area",
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Area => "Area",
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::all()
            .iter()
            .find(|kind| kind.code() == s)
            .copied()
            .ok_or(())
    }
}

/// Series colour for a currency in the stacked chart.
pub fn currency_color(currency: &str) -> &'static str {
    match currency {
        "ISK" => "#3b82f6",
        "USD" => "#10b981",
        "EUR" => "#f59e0b",
        "GBP" => "#8b5cf6",
        "SEK" => "#ec4899",
        "NOK" => "#06b6d4",
        _ => "#94a3b8",
    }
}

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub summary: Rc<Summary>,
}

/// Daily revenue trend for one selectable currency.
#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let currency = use_state(|| "ISK".to_string());
    let kind = use_state(ChartKind::default);

    let points = use_memo(
        (props.summary.clone(), (*currency).clone()),
        |(summary, currency)| summary.revenue_series(currency, Config::REVENUE_CHART_DAYS),
    );

    let chart = {
        let currency = (*currency).clone();
        let kind = *kind;
        use_memo((points, currency, kind), |(points, currency, kind)| {
            build_revenue_chart(points, currency, *kind)
        })
    };

    let on_currency = {
        let currency = currency.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            currency.set(target.value());
        })
    };

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = target.value().parse::<ChartKind>() {
                kind.set(selected);
            }
        })
    };

    html! {
        <div class="card">
            <div class="card-header">
                <div>
                    <h2>{"Daily Revenue Trend"}</h2>
                    <p class="card-subtitle">{format!("Last {} days", Config::REVENUE_CHART_DAYS)}</p>
                </div>
                <div class="card-controls">
                    <label>
                        {"Currency: "}
                        <select onchange={on_currency} aria-label="Chart currency">
                            {
                                CURRENCY_RATES.iter().map(|(code, _)| html! {
                                    <option value={*code} selected={*code == currency.as_str()}>{*code}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <select onchange={on_kind} aria-label="Chart type">
                        {
                            ChartKind::all().iter().map(|k| html! {
                                <option value={k.code()} selected={*k == *kind}>{k.label()}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>
            <ChartCanvas chart_id={REVENUE_CHART_ID} chart={ChartHandle(chart)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MultiCurrencyChartProps {
    pub summary: Rc<Summary>,
}

/// Stacked daily revenue across every currency.
#[function_component(MultiCurrencyChart)]
pub fn multi_currency_chart(props: &MultiCurrencyChartProps) -> Html {
    let chart = use_memo(props.summary.clone(), |summary| {
        build_stacked_chart(&summary.stacked_series(Config::REVENUE_CHART_DAYS))
    });

    html! {
        <div class="card">
            <div class="card-header">
                <div>
                    <h2>{"Multi-Currency Revenue"}</h2>
                    <p class="card-subtitle">{"Daily breakdown across all currencies"}</p>
                </div>
            </div>
            <ChartCanvas chart_id={STACKED_CHART_ID} chart={ChartHandle(chart)} />
        </div>
    }
}

/// Built chart compared by identity, so effects re-run only when the memo
/// producing it re-runs.
#[derive(Clone)]
struct ChartHandle(Rc<CharmingChart>);

impl PartialEq for ChartHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
struct ChartCanvasProps {
    chart_id: &'static str,
    chart: ChartHandle,
}

/// Sized container that renders a chart and redraws it after resizes.
#[function_component(ChartCanvas)]
fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id;

        use_effect_with(
            (props.chart.clone(), container_ref),
            move |(chart, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, chart_id, &chart.0);

                    let chart = chart.0.clone();
                    web_sys::window().map(|window| {
                        debounced_listener(&window, "resize", RESIZE_DEBOUNCE_MS, move || {
                            render_chart(&container, chart_id, &chart);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

/// Serializes tooltip labels into a JS array literal.
fn js_array<T: serde::Serialize>(labels: &T) -> String {
    serde_json::to_string(labels).unwrap_or_else(|_| "[]".to_string())
}

fn base_chart(
    title: &str,
    labels: Vec<String>,
    y_name: &str,
    y_format: AxisFormat,
) -> CharmingChart {
    CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(y_name)
                .axis_label(
                    AxisLabel::new()
                        .color(AXIS_COLOR)
                        .formatter(JsFunction::new_with_args("value", &y_format.js_body())),
                )
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
}

/// Single-currency trend drawn as `kind`.
pub fn build_revenue_chart(points: &[RevenuePoint], currency: &str, kind: ChartKind) -> CharmingChart {
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let values: Vec<f64> = points.iter().map(|p| p.revenue as f64).collect();

    let tooltip_labels: Vec<String> = points
        .iter()
        .map(|p| format_axis_value(p.revenue as f64, currency))
        .collect();
    let tooltip_body = format!(
        "var labels = {}; var p = params[0]; \
         return p.name + '<br/>Revenue: ' + labels[p.dataIndex];",
        js_array(&tooltip_labels)
    );

    let chart = base_chart(
        &format!("Revenue ({currency})"),
        labels,
        currency,
        AxisFormat::for_currency(currency),
    )
    .tooltip(
        Tooltip::new()
            .trigger(Trigger::Axis)
            .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
            .formatter(JsFunction::new_with_args("params", &tooltip_body)),
    );

    match kind {
        ChartKind::Bar => chart.series(
            Bar::new()
                .name("Revenue")
                .data(values)
                .bar_width("60%")
                .item_style(ItemStyle::new().color(ACCENT)),
        ),
        ChartKind::Line | ChartKind::Area => {
            let line = Line::new()
                .name("Revenue")
                .smooth(true)
                .data(values)
                .item_style(ItemStyle::new().color(ACCENT))
                .line_style(LineStyle::new().width(3).color(ACCENT));

            if kind == ChartKind::Area {
                chart.series(line.area_style(AreaStyle::new().color(ACCENT).opacity(0.2)))
            } else {
                chart.series(line)
            }
        }
    }
}

/// One stacked bar series per currency.
pub fn build_stacked_chart(stacked: &StackedSeries) -> CharmingChart {
    // One label row per series, each value in that series' own currency
    let tooltip_labels: Vec<Vec<String>> = stacked
        .series
        .iter()
        .map(|(currency, values)| {
            values
                .iter()
                .map(|v| format_axis_value(*v as f64, currency))
                .collect()
        })
        .collect();
    let tooltip_body = format!(
        "var labels = {}; return params[0].name + params.map(function (p) {{ \
         return '<br/>' + p.marker + p.seriesName + ': ' + labels[p.seriesIndex][p.dataIndex]; \
         }}).join('');",
        js_array(&tooltip_labels)
    );

    let chart = base_chart(
        "Revenue by Currency",
        stacked.labels.clone(),
        "",
        AxisFormat::PLAIN,
    )
    .tooltip(
        Tooltip::new()
            .trigger(Trigger::Axis)
            .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
            .formatter(JsFunction::new_with_args("params", &tooltip_body)),
    )
        .legend(Legend::new().bottom("0"));

    stacked
        .series
        .iter()
        .fold(chart, |chart, (currency, values)| {
            chart.series(
                Bar::new()
                    .name(currency.as_str())
                    .stack("revenue")
                    .data(values.iter().map(|v| *v as f64).collect::<Vec<f64>>())
                    .item_style(ItemStyle::new().color(currency_color(currency))),
            )
        })
}
