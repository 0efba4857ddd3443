use crate::models::currency::{CurrencyBreakdownItem, format_price};
use std::rc::Rc;
use yew::prelude::*;

/// Layout of the breakdown card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyView {
    #[default]
    Grid,
    Chart,
    Table,
}

impl CurrencyView {
    pub fn all() -> &'static [CurrencyView] {
        &[CurrencyView::Grid, CurrencyView::Chart, CurrencyView::Table]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CurrencyView::Grid => "Grid",
            CurrencyView::Chart => "Chart",
            CurrencyView::Table => "Table",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CurrencyBreakdownProps {
    pub breakdown: Rc<Vec<CurrencyBreakdownItem>>,
    pub total_revenue_isk: f64,
}

fn isk(value: f64) -> String {
    format_price(value.round() as i64, "ISK")
}

#[function_component(CurrencyBreakdown)]
pub fn currency_breakdown(props: &CurrencyBreakdownProps) -> Html {
    let view = use_state(CurrencyView::default);

    let buttons = CurrencyView::all()
        .iter()
        .map(|v| {
            let onclick = {
                let view = view.clone();
                let v = *v;
                Callback::from(move |_: MouseEvent| view.set(v))
            };
            let class = if *v == *view {
                "button button-solid"
            } else {
                "button button-outline"
            };
            html! { <button {class} {onclick}>{v.label()}</button> }
        })
        .collect::<Html>();

    let body = match *view {
        CurrencyView::Grid => grid_view(&props.breakdown),
        CurrencyView::Chart => bar_view(&props.breakdown),
        CurrencyView::Table => table_view(&props.breakdown, props.total_revenue_isk),
    };

    html! {
        <div class="card">
            <div class="card-header">
                <div>
                    <h2>{"Revenue by Currency"}</h2>
                    <p class="card-subtitle">{"Multi-currency breakdown with ISK equivalents"}</p>
                </div>
                <div class="card-controls">{buttons}</div>
            </div>
            {body}
        </div>
    }
}

fn grid_view(items: &[CurrencyBreakdownItem]) -> Html {
    html! {
        <div class="breakdown-grid">
            {
                items.iter().map(|item| html! {
                    <div class="breakdown-tile" key={item.currency.clone()}>
                        <div class="breakdown-tile-header">
                            <span class="badge badge-blue">{&item.currency}</span>
                            <span class="breakdown-share">{format!("{:.1}%", item.percentage)}</span>
                        </div>
                        <p class="breakdown-amount">{format_price(item.total, &item.currency)}</p>
                        <p class="breakdown-isk">{format!("≈ {}", isk(item.isk_equivalent))}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

fn bar_view(items: &[CurrencyBreakdownItem]) -> Html {
    html! {
        <div class="breakdown-bars">
            {
                items.iter().map(|item| html! {
                    <div class="breakdown-bar-row" key={item.currency.clone()}>
                        <div class="breakdown-bar-header">
                            <span>
                                <span class="badge badge-blue">{&item.currency}</span>
                                {" "}{format_price(item.total, &item.currency)}
                            </span>
                            <span>{format!("{:.1}%", item.percentage)}</span>
                        </div>
                        <div class="breakdown-bar-track">
                            <div class="breakdown-bar-fill" style={format!("width: {}%;", item.percentage)} />
                        </div>
                        <p class="breakdown-isk">{format!("ISK Equivalent: {}", isk(item.isk_equivalent))}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

fn table_view(items: &[CurrencyBreakdownItem], total_revenue_isk: f64) -> Html {
    html! {
        <table class="table">
            <thead>
                <tr>
                    <th>{"Currency"}</th>
                    <th>{"Amount"}</th>
                    <th>{"ISK Equivalent"}</th>
                    <th>{"% of Total"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    items.iter().map(|item| html! {
                        <tr key={item.currency.clone()}>
                            <td><span class="badge badge-blue">{&item.currency}</span></td>
                            <td>{format_price(item.total, &item.currency)}</td>
                            <td>{isk(item.isk_equivalent)}</td>
                            <td>{format!("{:.1}%", item.percentage)}</td>
                        </tr>
                    }).collect::<Html>()
                }
                <tr class="table-total">
                    <td>{"TOTAL"}</td>
                    <td>{"—"}</td>
                    <td>{isk(total_revenue_isk)}</td>
                    <td>{"100%"}</td>
                </tr>
            </tbody>
        </table>
    }
}
