#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
    use orders_dashboard::components::orders_table::empty_message;
    use orders_dashboard::components::revenue_chart::{
        ChartKind, build_revenue_chart, build_stacked_chart, currency_color,
    };
    use orders_dashboard::hooks::data_state::DataState;
    use orders_dashboard::models::{
        catalog::{NewOrder, customer_id, find_product, order_id, order_total},
        currency::{
            AxisFormat, CurrencyTotal, currency_breakdown, format_axis_value, format_price,
            group_digits, rate_to_isk, to_isk, total_revenue_isk,
        },
        error::AppError,
        order::{
            Order, OrderStatus, Statistics, StatusFilter, apply_filters, filter_by_search,
            filter_by_status,
        },
        summary::{DailyRevenue, Summary},
    };
    use orders_dashboard::pages::{admin::refresh_stamp, order_form::submission_error_message};
    use std::rc::Rc;

    // Helper function to create a test order
    fn make_order(
        id: i64,
        order_id: &str,
        customer_id: &str,
        total_amount: i64,
        status: OrderStatus,
        order_date: DateTime<Utc>,
    ) -> Order {
        Order {
            id,
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            total_amount,
            currency: "ISK".to_string(),
            status,
            order_date,
            created_at: order_date,
            updated_at: None,
        }
    }

    fn create_test_orders() -> Vec<Order> {
        let date = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        vec![
            make_order(1, "ORD-2025-100001", "CUST-627", 89_990, OrderStatus::Pending, date),
            make_order(2, "ORD-2025-100002", "CUST-286", 12_990, OrderStatus::Shipped, date),
            make_order(3, "ORD-2025-200003", "CUST-627", 29_990, OrderStatus::Pending, date),
            make_order(4, "ORD-2025-200004", "CUST-451", 8_990, OrderStatus::Delivered, date),
        ]
    }

    fn total(currency: &str, amount: i64) -> CurrencyTotal {
        CurrencyTotal {
            currency: currency.to_string(),
            total: amount,
        }
    }

    fn daily(date: (i32, u32, u32), currency: &str, revenue: i64) -> DailyRevenue {
        DailyRevenue {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            currency: currency.to_string(),
            revenue,
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_rejected_display_is_bare_detail() {
        let error = AppError::Rejected("Order ID already exists".to_string());
        assert_eq!(error.to_string(), "Order ID already exists");
    }

    // ===== Order Model Tests =====

    #[test]
    fn test_order_deserialization_rfc3339() {
        let json = r#"{
            "id": 7,
            "order_id": "ORD-2025-123456",
            "customer_id": "CUST-627",
            "total_amount": 89990,
            "currency": "ISK",
            "status": "pending",
            "order_date": "2025-03-10T12:30:00+00:00",
            "created_at": "2025-03-10T12:30:01.123456+00:00",
            "updated_at": "2025-03-10T12:30:01.123456+00:00"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(
            order.order_date,
            Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap()
        );
        assert!(order.updated_at.is_some());
    }

    #[test]
    fn test_order_deserialization_naive_timestamps() {
        let json = r#"{
            "id": 8,
            "order_id": "ORD-2025-654321",
            "customer_id": "CUST-286",
            "total_amount": 187,
            "currency": "USD",
            "status": "shipped",
            "order_date": "2025-03-10T08:15:00",
            "created_at": "2025-03-10T08:15:00.500"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(
            order.order_date,
            Utc.with_ymd_and_hms(2025, 3, 10, 8, 15, 0).unwrap()
        );
        assert_eq!(order.updated_at, None);
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_order_deserialization_rejects_bad_date() {
        let json = r#"{
            "id": 9, "order_id": "x", "customer_id": "y", "total_amount": 1,
            "currency": "ISK", "status": "pending",
            "order_date": "yesterday", "created_at": "2025-03-10T08:15:00Z"
        }"#;

        let result: Result<Order, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_status_parsing() {
        assert_eq!("pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!("cancelled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("PENDING".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::all().len(), 7);
        assert_eq!(OrderStatus::Processing.to_string(), "processing");
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "shipped".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(OrderStatus::Shipped)
        );
        assert!("unknown".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(OrderStatus::Delivered).as_str(), "delivered");
    }

    // ===== Filtering Tests =====

    #[test]
    fn test_filter_by_status_pending() {
        let date = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let orders = vec![
            make_order(1, "A", "C1", 100, OrderStatus::Pending, date),
            make_order(2, "B", "C2", 100, OrderStatus::Shipped, date),
        ];

        let result = filter_by_status(&orders, StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_filter_by_status_all_returns_input() {
        let orders = create_test_orders();
        assert_eq!(filter_by_status(&orders, StatusFilter::All), orders);
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let orders = create_test_orders();
        let result = filter_by_status(&orders, StatusFilter::Only(OrderStatus::Pending));

        let ids: Vec<i64> = result.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(result.iter().all(|o| o.status == OrderStatus::Pending));
    }

    #[test]
    fn test_filter_by_search_case_insensitive() {
        let orders = create_test_orders();

        let by_order = filter_by_search(&orders, "ord-2025-2");
        assert_eq!(by_order.len(), 2);

        let by_customer = filter_by_search(&orders, "cust-627");
        let ids: Vec<i64> = by_customer.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_by_search_empty_query_returns_input() {
        let orders = create_test_orders();
        assert_eq!(filter_by_search(&orders, ""), orders);
    }

    #[test]
    fn test_filter_by_search_no_match() {
        let orders = create_test_orders();
        assert!(filter_by_search(&orders, "nothing-like-this").is_empty());
    }

    #[test]
    fn test_apply_filters_combines_stages() {
        let orders = create_test_orders();

        let result = apply_filters(&orders, StatusFilter::Only(OrderStatus::Pending), "200");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].order_id, "ORD-2025-200003");

        assert_eq!(apply_filters(&orders, StatusFilter::All, ""), orders);
    }

    // ===== Statistics Tests =====

    #[test]
    fn test_statistics_empty() {
        let stats = Statistics::from_orders(&[]);
        assert_eq!(stats.average_order_value, 0.0);
        assert_eq!(stats.today_orders, 0);
        assert_eq!(stats.pending_orders, 0);
    }

    #[test]
    fn test_statistics_average_and_pending() {
        let orders = create_test_orders();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let stats = Statistics::from_orders_at(&orders, &now);
        let expected = (89_990 + 12_990 + 29_990 + 8_990) as f64 / 4.0;
        assert!((stats.average_order_value - expected).abs() < 1e-9);
        assert_eq!(stats.pending_orders, 2);
        assert_eq!(stats.today_orders, 0);
    }

    #[test]
    fn test_statistics_today_uses_calendar_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 23, 0, 0).unwrap();
        let orders = vec![
            make_order(1, "A", "C", 100, OrderStatus::Shipped, now - Duration::hours(22)),
            make_order(2, "B", "C", 100, OrderStatus::Shipped, now - Duration::hours(24)),
            make_order(3, "C", "C", 100, OrderStatus::Pending, now),
        ];

        let stats = Statistics::from_orders_at(&orders, &now);
        assert_eq!(stats.today_orders, 2);
        assert_eq!(stats.pending_orders, 1);
    }

    // ===== Currency Tests =====

    #[test]
    fn test_usd_breakdown_example() {
        let breakdown = currency_breakdown(&[total("USD", 100)]);

        assert_eq!(breakdown.len(), 1);
        assert!((breakdown[0].isk_equivalent - 13_889.0).abs() < 1e-6);
        assert!((breakdown[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_percentages_sum_to_100() {
        let codes = ["ISK", "USD", "EUR", "GBP", "SEK", "NOK", "JPY"];

        let mut cases: Vec<Vec<CurrencyTotal>> = vec![
            vec![total("EUR", 1)],
            vec![total("JPY", 500)],
            vec![total("ISK", 1_000_000_000), total("GBP", 1)],
            vec![total("USD", 0), total("NOK", 3)],
            codes
                .iter()
                .map(|code| total(code, 9_999))
                .collect(),
        ];

        // Deterministic pseudo-random lists of every length
        let mut seed: u64 = 42;
        for len in 1..=codes.len() {
            let list = (0..len)
                .map(|i| {
                    seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                    let amount = (seed >> 33) % 10_i64.pow((i % 7) as u32 + 2) as u64 + 1;
                    total(codes[(i + len) % codes.len()], amount as i64)
                })
                .collect();
            cases.push(list);
        }

        for totals in &cases {
            let sum: f64 = currency_breakdown(totals).iter().map(|i| i.percentage).sum();
            assert!((sum - 100.0).abs() < 1e-9, "sum {sum} for {totals:?}");
        }
    }

    #[test]
    fn test_breakdown_zero_total() {
        let breakdown = currency_breakdown(&[total("ISK", 0), total("USD", 0)]);
        assert!(breakdown.iter().all(|i| i.percentage == 0.0));
        assert!(currency_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let breakdown = currency_breakdown(&[
            total("ISK", 10_000),
            total("GBP", 1_000),
            total("USD", 500),
        ]);

        let order: Vec<&str> = breakdown.iter().map(|i| i.currency.as_str()).collect();
        assert_eq!(order, vec!["GBP", "USD", "ISK"]);
    }

    #[test]
    fn test_unknown_currency_counts_as_isk() {
        assert_eq!(rate_to_isk("JPY"), 1.0);
        assert_eq!(to_isk(250.0, "JPY"), 250.0);
        assert!((total_revenue_isk(&[total("ISK", 100), total("EUR", 2)]) - 407.7).abs() < 1e-9);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(119_990), "119,990");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(-45_000), "-45,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(89_990, "ISK"), "89,990 kr");
        assert_eq!(format_price(1_234, "USD"), "$1,234");
        assert_eq!(format_price(585, "EUR"), "€585");
        assert_eq!(format_price(495, "GBP"), "£495");
        assert_eq!(format_price(1_200, "SEK"), "1,200");
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(125_400.0, "ISK"), "125k kr");
        assert_eq!(format_axis_value(1_500.0, "NOK"), "kr1,500");
        assert_eq!(format_axis_value(2_500.0, "USD"), "$2,500");
        assert_eq!(format_axis_value(2_500.0, "CHF"), "2,500");
    }

    #[test]
    fn test_format_axis_value_rounds_halves_up() {
        assert_eq!(format_axis_value(2_500.0, "ISK"), "3k kr");
        assert_eq!(format_axis_value(4_500.0, "ISK"), "5k kr");
        assert_eq!(format_axis_value(1_499.0, "ISK"), "1k kr");
        assert_eq!(format_axis_value(0.5, "USD"), "$1");
    }

    #[test]
    fn test_axis_format_js_body() {
        assert_eq!(
            AxisFormat::for_currency("ISK").js_body(),
            "return '' + Math.round(value / 1000).toString() + 'k kr';"
        );
        assert_eq!(
            AxisFormat::for_currency("SEK").js_body(),
            "return 'kr' + Math.round(value / 1).toLocaleString('en-US') + '';"
        );
        assert_eq!(AxisFormat::PLAIN.format(1_234_567.0), "1,234,567");
    }

    // ===== Summary Tests =====

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "total_orders": 3,
            "total_revenue": [{"currency": "ISK", "total": 179980}, {"currency": "USD", "total": 187}],
            "revenue_per_day": [
                {"date": "2025-03-10", "currency": "ISK", "revenue": 89990},
                {"date": "2025-03-09", "currency": "ISK", "revenue": 89990},
                {"date": "2025-03-09", "currency": "USD", "revenue": 187}
            ]
        }"#;

        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_revenue[1], total("USD", 187));
        assert_eq!(summary.revenue_per_day[0], daily((2025, 3, 10), "ISK", 89_990));
    }

    #[test]
    fn test_revenue_series_sorted_and_zero_filled() {
        let summary = Summary {
            total_orders: 3,
            total_revenue: vec![],
            revenue_per_day: vec![
                daily((2025, 3, 10), "ISK", 5_000),
                daily((2025, 3, 8), "USD", 40),
                daily((2025, 3, 9), "ISK", 3_000),
            ],
        };

        let series = summary.revenue_series("ISK", 14);
        let revenue: Vec<i64> = series.iter().map(|p| p.revenue).collect();
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();

        assert_eq!(revenue, vec![0, 3_000, 5_000]);
        assert_eq!(labels, vec!["Mar 8", "Mar 9", "Mar 10"]);
    }

    #[test]
    fn test_revenue_series_keeps_last_days() {
        let revenue_per_day = (1..=20)
            .map(|day| daily((2025, 1, day), "ISK", i64::from(day) * 100))
            .collect();
        let summary = Summary {
            total_orders: 20,
            total_revenue: vec![],
            revenue_per_day,
        };

        let series = summary.revenue_series("ISK", 14);
        assert_eq!(series.len(), 14);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert_eq!(series[13].revenue, 2_000);
    }

    #[test]
    fn test_stacked_series() {
        let summary = Summary {
            total_orders: 3,
            total_revenue: vec![],
            revenue_per_day: vec![
                daily((2025, 3, 10), "ISK", 5_000),
                daily((2025, 3, 10), "EUR", 20),
                daily((2025, 3, 9), "ISK", 3_000),
            ],
        };

        let stacked = summary.stacked_series(14);
        assert_eq!(stacked.labels, vec!["Mar 9", "Mar 10"]);
        assert_eq!(stacked.series.len(), 2);
        assert_eq!(stacked.series[0], ("ISK".to_string(), vec![3_000, 5_000]));
        assert_eq!(stacked.series[1], ("EUR".to_string(), vec![0, 20]));
    }

    // ===== Catalog Tests =====

    #[test]
    fn test_customer_id_generation() {
        // J+N+J+N+S+S+O+N; accented letters are dropped
        assert_eq!(customer_id("Jón Jónsson"), "CUST-627");
        assert_eq!(customer_id("anna"), "CUST-286");
        assert_eq!(customer_id("Anna"), customer_id("ANNA"));
    }

    #[test]
    fn test_customer_id_truncates_to_five_digits() {
        let long_name = "A".repeat(2_000); // 65 * 2000 = 130000
        assert_eq!(customer_id(&long_name), "CUST-13000");
    }

    #[test]
    fn test_customer_id_without_letters() {
        assert_eq!(customer_id(""), "CUST-0");
        assert_eq!(customer_id("123 !!"), "CUST-0");
    }

    #[test]
    fn test_order_id_uses_last_six_millis_digits() {
        let now = Utc.timestamp_millis_opt(1_736_937_000_123).unwrap();
        assert_eq!(order_id(now), "ORD-2025-000123");
    }

    #[test]
    fn test_order_total() {
        assert_eq!(order_total("snaefell-parka", 1, "ISK"), 89_990);
        assert_eq!(order_total("kaldi-gloves", 2, "USD"), 187);
        assert_eq!(order_total("vikur-beanie", 3, "GBP"), 148);
        assert_eq!(order_total("no-such-product", 3, "ISK"), 0);
        assert_eq!(order_total("esja-jacket", 1, "XYZ"), 49_990);
    }

    #[test]
    fn test_new_order_from_form() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let order = NewOrder::from_form("Anna", "tindur-jacket", 1, "EUR", now).unwrap();

        assert_eq!(order.customer_id, "CUST-286");
        assert!(order.order_id.starts_with("ORD-2025-"));
        assert_eq!(order.total_amount, 780);
        assert_eq!(order.status, OrderStatus::Pending);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["currency"], "EUR");
        assert!(json["order_date"].as_str().unwrap().starts_with("2025-03-10T12:00:00"));
    }

    #[test]
    fn test_new_order_requires_product() {
        let now = Utc::now();
        assert!(NewOrder::from_form("Anna", "", 1, "ISK", now).is_err());
        assert!(NewOrder::from_form("Anna", "vik-sweater", 0, "ISK", now).is_err());
        assert!(find_product("vik-sweater").is_some());
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let orders = Rc::new(create_test_orders());
        let loaded = DataState::Loaded(orders.clone());

        assert_eq!(loaded.data(), Some(&orders));
        assert!(!loaded.is_loading());

        let loading: DataState<Vec<Order>> = DataState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: DataState<Vec<Order>> = DataState::Error("Test error".to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some("Test error"));
    }

    #[test]
    fn test_data_state_equality() {
        let state1 = DataState::Loaded(Rc::new(create_test_orders()));
        let state2 = DataState::Loaded(Rc::new(create_test_orders()));
        assert_eq!(state1, state2);
        assert_ne!(state1, DataState::Loading);
    }

    // ===== Presentation Helper Tests =====

    #[test]
    fn test_empty_message() {
        assert_eq!(
            empty_message("abc", StatusFilter::Only(OrderStatus::Pending)),
            "No orders match \"abc\""
        );
        assert_eq!(
            empty_message("", StatusFilter::Only(OrderStatus::Shipped)),
            "No shipped orders at the moment"
        );
        assert_eq!(
            empty_message("", StatusFilter::All),
            "Create your first order to get started"
        );
    }

    #[test]
    fn test_submission_error_message() {
        let rejected = AppError::Rejected("Order ID already exists".to_string());
        assert_eq!(submission_error_message(&rejected), "Order ID already exists");

        let network = AppError::ApiError("Network error: offline".to_string());
        assert_eq!(submission_error_message(&network), "Failed to create order");

        let local = AppError::DataError("Please choose a product".to_string());
        assert_eq!(submission_error_message(&local), "Please choose a product");
    }

    #[test]
    fn test_revenue_chart_formats_axis_and_tooltip() {
        let summary = Summary {
            total_orders: 2,
            total_revenue: vec![],
            revenue_per_day: vec![
                daily((2025, 3, 9), "ISK", 2_500),
                daily((2025, 3, 10), "ISK", 125_400),
            ],
        };
        let points = summary.revenue_series("ISK", 14);

        let rendered = build_revenue_chart(&points, "ISK", ChartKind::Bar).to_string();
        assert!(rendered.contains("Math.round(value / 1000).toString()"));
        assert!(rendered.contains("3k kr"));
        assert!(rendered.contains("125k kr"));
    }

    #[test]
    fn test_stacked_chart_tooltip_uses_series_currency() {
        let summary = Summary {
            total_orders: 2,
            total_revenue: vec![],
            revenue_per_day: vec![
                daily((2025, 3, 10), "ISK", 45_000),
                daily((2025, 3, 10), "GBP", 1_250),
            ],
        };

        let rendered = build_stacked_chart(&summary.stacked_series(14)).to_string();
        assert!(rendered.contains("45k kr"));
        assert!(rendered.contains("£1,250"));
        assert!(rendered.contains("toLocaleString('en-US')"));
    }

    #[test]
    fn test_refresh_stamp_on_every_fetch() {
        let orders = create_test_orders();
        let first = Local.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let second = first + Duration::seconds(30);

        // Same orders on the next poll still move the stamp forward
        assert_eq!(refresh_stamp(&orders, Some(first)), Some(first));
        assert_eq!(refresh_stamp(&orders, Some(second)), Some(second));

        assert_eq!(refresh_stamp(&orders, None), None);
        assert_eq!(refresh_stamp(&[], Some(second)), None);
    }

    #[test]
    fn test_chart_kind_and_colors() {
        assert_eq!("bar".parse::<ChartKind>(), Ok(ChartKind::Bar));
        assert!("pie".parse::<ChartKind>().is_err());
        assert_eq!(ChartKind::default(), ChartKind::Area);
        assert_eq!(currency_color("ISK"), "#3b82f6");
        assert_eq!(currency_color("CHF"), "#94a3b8");
    }
}
