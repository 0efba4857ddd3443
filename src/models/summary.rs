use super::currency::CurrencyTotal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue for one (date, currency) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub currency: String,
    pub revenue: i64,
}

/// Aggregate snapshot returned by `GET /orders/summary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_orders: u64,
    pub total_revenue: Vec<CurrencyTotal>,
    pub revenue_per_day: Vec<DailyRevenue>,
}

/// One point of the single-currency revenue trend.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub label: String,
    pub revenue: i64,
}

/// Daily revenue per currency over a shared date axis.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StackedSeries {
    pub labels: Vec<String>,
    pub series: Vec<(String, Vec<i64>)>,
}

fn axis_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

impl Summary {
    /// The most recent `days` distinct dates, oldest first.
    pub fn recent_dates(&self, days: usize) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.revenue_per_day.iter().map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();

        let skip = dates.len().saturating_sub(days);
        dates.split_off(skip)
    }

    fn revenue_on(&self, date: NaiveDate, currency: &str) -> i64 {
        self.revenue_per_day
            .iter()
            .find(|r| r.date == date && r.currency == currency)
            .map_or(0, |r| r.revenue)
    }

    /// Revenue in `currency` for each of the last `days` dates. Dates with
    /// no revenue in that currency report zero.
    pub fn revenue_series(&self, currency: &str, days: usize) -> Vec<RevenuePoint> {
        self.recent_dates(days)
            .into_iter()
            .map(|date| RevenuePoint {
                date,
                label: axis_label(date),
                revenue: self.revenue_on(date, currency),
            })
            .collect()
    }

    /// One series per currency, in order of first appearance.
    pub fn stacked_series(&self, days: usize) -> StackedSeries {
        let dates = self.recent_dates(days);

        let mut currencies: Vec<&str> = Vec::new();
        for r in &self.revenue_per_day {
            if !currencies.contains(&r.currency.as_str()) {
                currencies.push(&r.currency);
            }
        }

        StackedSeries {
            labels: dates.iter().copied().map(axis_label).collect(),
            series: currencies
                .into_iter()
                .map(|currency| {
                    let values = dates
                        .iter()
                        .map(|date| self.revenue_on(*date, currency))
                        .collect();
                    (currency.to_string(), values)
                })
                .collect(),
        }
    }
}
