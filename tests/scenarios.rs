//! End-to-end checks: curve-set JSON -> pipeline -> report/export.

use curve_spread::app::pipeline::run_chart;
use curve_spread::domain::{AxisOutcome, ChartConfig, Curve, NamedCurve, SpreadOutcome};
use curve_spread::engine::{align, compute_spread, interp, plan_axes};
use curve_spread::io::chart::write_chart_json;
use curve_spread::io::curve::parse_curve_set;
use curve_spread::report::format_chart_report;

#[test]
fn spread_at_twelve_months_is_forty_bps() {
    let a = Curve::from_pairs(&[(3.0, 9.0), (12.0, 9.5), (60.0, 10.0)]);
    let b = Curve::from_pairs(&[(3.0, 9.2), (12.0, 9.1), (60.0, 9.8)]);
    let calc = compute_spread(&a, &b);
    let row = calc.rows.iter().find(|r| r.tenor_months == 12.0).unwrap();
    assert_eq!(row.spread_bps, 40);
}

#[test]
fn disjoint_curves_report_invalid_overlap() {
    let a = Curve::from_pairs(&[(12.0, 5.0), (24.0, 5.5)]);
    let b = Curve::from_pairs(&[(36.0, 6.0), (60.0, 6.5)]);
    let calc = compute_spread(&a, &b);
    assert!(!calc.overlap_valid);
    assert!(calc.rows.is_empty());
    assert_eq!(interp(&a, 36.0), None);
}

#[test]
fn align_keeps_only_exact_samples() {
    let curves = vec![
        NamedCurve::new("A", "A", Curve::from_pairs(&[(6.0, 1.0)])),
        NamedCurve::new("B", "B", Curve::from_pairs(&[(6.0, 2.0), (12.0, 2.5)])),
    ];
    let rows = align(&curves);
    let json = serde_json::to_string(&rows).unwrap();
    assert_eq!(json, r#"[{"tenorMonths":6.0,"A":1.0,"B":2.0},{"tenorMonths":12.0,"B":2.5}]"#);
}

#[test]
fn axes_for_nine_and_a_half_to_ten_and_a_quarter() {
    let curves = vec![NamedCurve::new("A", "A", Curve::from_pairs(&[(12.0, 9.5), (24.0, 10.25)]))];
    let rows = align(&curves);
    let AxisOutcome::Ready(plan) = plan_axes(&rows, &["A".to_string()], &[12.0, 24.0, 36.0]) else {
        panic!("expected axes");
    };
    assert_eq!(plan.value_min, 9.0);
    assert_eq!(plan.value_max, 11.0);
    assert_eq!(plan.value_ticks, vec![9.0, 9.5, 10.0, 10.5, 11.0]);
    assert_eq!(plan.tenor_ticks, vec![12.0, 24.0]);
}

#[test]
fn curve_set_to_export() {
    let json = r##"{
        "asof": "2025-01-02",
        "curves": [
            { "key": "ust", "label": "UST", "color": "#1f77b4",
              "points": [ { "tenor": "3M", "value": 4.30 }, { "tenor": "1Y", "value": 4.10 },
                          { "tenor": "5Y", "value": 4.05 }, { "tenor": "10Y", "value": 4.40 } ] },
            { "key": "sofr", "label": "SOFR", "unit": "bp",
              "points": [ { "tenor": "1M", "value": 431 }, { "tenor": "2Y", "value": 402 },
                          { "tenor": "5Y", "value": 390 } ] },
            { "key": "bund", "label": "Bund", "visible": false, "unit": "decimal",
              "points": [ { "tenor": "2Y", "value": 0.021 }, { "tenor": "10Y", "value": 0.025 } ] }
        ]
    }"##;
    let set = parse_curve_set(json).unwrap();
    let config = ChartConfig {
        labels: set.labels.clone(),
        ..ChartConfig::default()
    };
    let run = run_chart(set.curves, &config);

    let SpreadOutcome::Ready(result) = &run.spread else {
        panic!("expected a spread");
    };
    assert_eq!(result.label, "UST - SOFR");

    // Overlap is [3M, 5Y]; 2Y interpolates UST between 1Y and 5Y: 4.10 - 0.0125 = 4.0875.
    let spreads: Vec<(f64, Option<i64>)> = run.rows.iter().map(|r| (r.tenor_months, r.spread_bps)).collect();
    assert_eq!(
        spreads,
        vec![
            (1.0, None),
            (3.0, Some(2)),
            (12.0, Some(-7)),
            (24.0, Some(7)),
            (60.0, Some(15)),
            (120.0, None),
        ]
    );

    let report = format_chart_report(&run, &config.labels);
    assert!(report.contains("Curves: 2 visible / 3 total"));
    assert!(report.contains("Spread (UST - SOFR): n=4 | range=[-7, 15]bp"));

    let path = std::env::temp_dir().join(format!("cspread-export-{}.json", std::process::id()));
    write_chart_json(&path, &run, &config.labels).unwrap();
    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written["spread"]["label"], "UST - SOFR");
    assert_eq!(written["curves"][2]["visible"], false);
    assert_eq!(written["rows"].as_array().unwrap().len(), 6);
}
