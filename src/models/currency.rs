use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Approximate ISK value of one unit of each supported currency.
/// Display-only: these never feed back into stored amounts.
pub const CURRENCY_RATES: &[(&str, f64)] = &[
    ("ISK", 1.0),
    ("USD", 138.89),
    ("EUR", 153.85),
    ("GBP", 175.45),
    ("SEK", 13.86),
    ("NOK", 12.84),
];

/// Aggregate revenue in a single currency, as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    pub currency: String,
    pub total: i64,
}

/// A `CurrencyTotal` annotated with its ISK value and share of all revenue.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyBreakdownItem {
    pub currency: String,
    pub total: i64,
    pub isk_equivalent: f64,
    pub percentage: f64,
}

/// Returns the ISK rate for a currency code. Unknown codes count as ISK.
pub fn rate_to_isk(currency: &str) -> f64 {
    CURRENCY_RATES
        .iter()
        .find(|(code, _)| *code == currency)
        .map_or(1.0, |(_, rate)| *rate)
}

pub fn to_isk(amount: f64, currency: &str) -> f64 {
    amount * rate_to_isk(currency)
}

/// Sums every currency total after converting it to ISK.
pub fn total_revenue_isk(totals: &[CurrencyTotal]) -> f64 {
    totals
        .iter()
        .map(|t| to_isk(t.total as f64, &t.currency))
        .sum()
}

/// Builds the per-currency breakdown, largest ISK share first.
///
/// Percentages are relative to the summed ISK value of `totals`; when that
/// sum is not positive every percentage is zero.
pub fn currency_breakdown(totals: &[CurrencyTotal]) -> Vec<CurrencyBreakdownItem> {
    let grand_total = total_revenue_isk(totals);

    let mut items: Vec<CurrencyBreakdownItem> = totals
        .iter()
        .map(|t| {
            let isk_equivalent = to_isk(t.total as f64, &t.currency);
            let percentage = if grand_total > 0.0 {
                isk_equivalent / grand_total * 100.0
            } else {
                0.0
            };

            CurrencyBreakdownItem {
                currency: t.currency.clone(),
                total: t.total,
                isk_equivalent,
                percentage,
            }
        })
        .collect();

    items.sort_by(|a, b| {
        b.isk_equivalent
            .partial_cmp(&a.isk_equivalent)
            .unwrap_or(Ordering::Equal)
    });

    items
}

fn symbol(currency: &str) -> &'static str {
    match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => "",
    }
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats an amount for display: `12,990 kr` for ISK, `$1,234` for
/// currencies with a known symbol, bare grouped digits otherwise.
pub fn format_price(amount: i64, currency: &str) -> String {
    if currency == "ISK" {
        return format!("{} kr", group_digits(amount));
    }
    format!("{}{}", symbol(currency), group_digits(amount))
}

/// How chart axes and tooltips render values of one currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFormat {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub divisor: f64,
    pub grouped: bool,
}

impl AxisFormat {
    /// Grouped digits with no currency marker, for axes mixing currencies.
    pub const PLAIN: Self = Self {
        prefix: "",
        suffix: "",
        divisor: 1.0,
        grouped: true,
    };

    pub fn for_currency(currency: &str) -> Self {
        match currency {
            "ISK" => Self {
                prefix: "",
                suffix: "k kr",
                divisor: 1000.0,
                grouped: false,
            },
            "SEK" | "NOK" => Self {
                prefix: "kr",
                suffix: "",
                divisor: 1.0,
                grouped: true,
            },
            other => Self {
                prefix: symbol(other),
                suffix: "",
                divisor: 1.0,
                grouped: true,
            },
        }
    }

    /// Halves round up, e.g. 2 500 ISK is `3k kr`.
    pub fn format(&self, value: f64) -> String {
        let scaled = (value / self.divisor).round() as i64;
        let digits = if self.grouped {
            group_digits(scaled)
        } else {
            scaled.to_string()
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }

    /// Body of a JS `function(value)` that renders axis ticks the same way
    /// as [`AxisFormat::format`]. Tick values only exist inside the chart
    /// runtime, so this cannot be precomputed.
    pub fn js_body(&self) -> String {
        let digits = if self.grouped {
            "toLocaleString('en-US')"
        } else {
            "toString()"
        };
        format!(
            "return '{}' + Math.round(value / {}).{} + '{}';",
            self.prefix, self.divisor, digits, self.suffix
        )
    }
}

/// Compact label used on chart axes and tooltips.
pub fn format_axis_value(value: f64, currency: &str) -> String {
    AxisFormat::for_currency(currency).format(value)
}
