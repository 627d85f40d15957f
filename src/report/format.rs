//! Plain-text rendering of chart runs.

use crate::app::pipeline::ChartRun;
use crate::domain::{AxisOutcome, NamedCurve, SpreadCalc, SpreadOutcome, TenorLabels};
use crate::engine::VALUE_STEP;
use crate::report::spread_stats;

/// Full terminal report: curve list, merged table, spread status, axes.
pub fn format_chart_report(run: &ChartRun, labels: &TenorLabels) -> String {
    let mut out = String::new();

    out.push_str("=== cspread - curve alignment ===\n");
    out.push_str(&format_curve_list(&run.curves, labels));
    out.push('\n');

    if run.rows.is_empty() {
        out.push_str("No data: select at least one curve with points.\n");
        return out;
    }

    out.push_str(&format_rows_table(run, labels));
    out.push('\n');
    out.push_str(&format_spread_status(run));
    out.push_str(&format_axes(&run.axes, labels));

    out
}

/// One line per curve; hidden curves are listed but marked.
pub fn format_curve_list(curves: &[NamedCurve], labels: &TenorLabels) -> String {
    let visible = curves.iter().filter(|c| c.visible).count();
    let mut out = format!("Curves: {visible} visible / {} total\n", curves.len());

    for c in curves {
        let mark = if c.visible { "*" } else { " " };
        let range = match (c.points.first_tenor(), c.points.last_tenor()) {
            (Some(lo), Some(hi)) => format!("[{}, {}]", labels.label_for(lo), labels.label_for(hi)),
            _ => "[empty]".to_string(),
        };
        out.push_str(
            format!(
                "{mark} {:<12} {:<16} {:>3} pts {range}\n",
                truncate(&c.key, 12),
                truncate(&c.label, 16),
                c.points.len(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Merged rows: tenor, one column per visible curve, spread when available.
pub fn format_rows_table(run: &ChartRun, labels: &TenorLabels) -> String {
    let visible: Vec<&NamedCurve> = run.curves.iter().filter(|c| c.visible).collect();
    let with_spread = run.spread.result().is_some();

    let mut header = format!("{:<8}", "tenor");
    let mut rule = format!("{:-<8}", "");
    for c in &visible {
        header.push_str(&format!(" {:>10}", truncate(&c.label, 10)));
        rule.push_str(&format!(" {:-<10}", ""));
    }
    if with_spread {
        header.push_str(&format!(" {:>8}", "spread"));
        rule.push_str(&format!(" {:-<8}", ""));
    }

    let mut out = String::new();
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in &run.rows {
        let mut line = format!("{:<8}", labels.label_for(row.tenor_months));
        for c in &visible {
            match row.value(&c.key) {
                Some(v) => line.push_str(&format!(" {v:>10.3}")),
                None => line.push_str(&format!(" {:>10}", "-")),
            }
        }
        if with_spread {
            match row.spread_bps {
                Some(s) => line.push_str(&format!(" {s:>8}")),
                None => line.push_str(&format!(" {:>8}", "-")),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Spread line; empty states carry the message a chart would show.
pub fn format_spread_status(run: &ChartRun) -> String {
    match &run.spread {
        SpreadOutcome::NotApplicable { visible } => {
            format!("Spread: needs exactly two visible curves (visible={visible}).\n")
        }
        SpreadOutcome::NoOverlap { label } => {
            format!("Spread ({label}): select curves with overlapping ranges.\n")
        }
        SpreadOutcome::Ready(result) => match spread_stats(&result.rows) {
            Some(s) => format!(
                "Spread ({}): n={} | range=[{}, {}]bp\n",
                result.label, s.n, s.min_bps, s.max_bps
            ),
            None => format!("Spread ({}): n=0\n", result.label),
        },
    }
}

/// Axis bounds and ticks.
pub fn format_axes(axes: &AxisOutcome, labels: &TenorLabels) -> String {
    let Some(plan) = axes.plan() else {
        return "No data: nothing to plot.\n".to_string();
    };

    let value_ticks: Vec<String> = plan.value_ticks.iter().map(|v| format!("{v:.2}")).collect();
    let tenor_ticks: Vec<String> = plan.tenor_ticks.iter().map(|&t| labels.label_for(t)).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Value axis: [{:.2}, {:.2}]% step {VALUE_STEP} | ticks: {}\n",
        plan.value_min,
        plan.value_max,
        value_ticks.join(" ")
    ));
    out.push_str(
        format!(
            "Tenor axis: [{}, {}] | ticks: {}\n",
            labels.label_for(plan.tenor_min),
            labels.label_for(plan.tenor_max),
            tenor_ticks.join(" ")
        )
        .trim_end(),
    );
    out.push('\n');
    out
}

/// Rows of a direct two-curve spread computation.
pub fn format_spread_calc(label: &str, calc: &SpreadCalc, labels: &TenorLabels) -> String {
    if !calc.overlap_valid {
        return format!("Spread ({label}): select curves with overlapping ranges.\n");
    }

    let mut out = format!("Spread ({label}), bp:\n");
    out.push_str(&format!("{:<8} {:>8}\n", "tenor", "bp"));
    out.push_str(&format!("{:-<8} {:-<8}\n", "", ""));
    for r in &calc.rows {
        out.push_str(&format!("{:<8} {:>8}\n", labels.label_for(r.tenor_months), r.spread_bps));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
