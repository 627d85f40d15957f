//! ASCII plotting for terminal output.
//!
//! Deliberately simple (fixed-size character grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each visible curve gets a marker for its samples and `.` for the segments
//! between them. Bounds come from the planned axes, so the plot frames the
//! data exactly like a chart front-end would.

use crate::app::pipeline::ChartRun;
use crate::domain::{AxisPlan, NamedCurve, TenorLabels};

const MARKERS: [char; 6] = ['*', '+', 'x', 'o', '#', '@'];

/// Render the visible curves of a run on its planned axes.
pub fn render_ascii_chart(run: &ChartRun, labels: &TenorLabels, width: usize, height: usize) -> String {
    let Some(plan) = run.axes.plan() else {
        return "No data to plot.\n".to_string();
    };

    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    let visible: Vec<&NamedCurve> = run.curves.iter().filter(|c| c.visible).collect();

    // Segments first so sample markers overlay them.
    for curve in &visible {
        let cells: Vec<(usize, usize)> = curve
            .points
            .points()
            .iter()
            .map(|p| to_cell(plan, p.tenor_months, p.value, width, height))
            .collect();
        for w in cells.windows(2) {
            draw_line(&mut grid, w[0], w[1], '.');
        }
    }
    for (i, curve) in visible.iter().enumerate() {
        let marker = MARKERS[i % MARKERS.len()];
        for p in curve.points.points() {
            let (x, y) = to_cell(plan, p.tenor_months, p.value, width, height);
            grid[y][x] = marker;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: tenor=[{}, {}] | value=[{:.2}, {:.2}]%\n",
        labels.label_for(plan.tenor_min),
        labels.label_for(plan.tenor_max),
        plan.value_min,
        plan.value_max,
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let legend: Vec<String> = visible
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} {}", MARKERS[i % MARKERS.len()], c.label))
        .collect();
    out.push_str(&format!("Legend: {}\n", legend.join(" | ")));

    out
}

fn to_cell(plan: &AxisPlan, t: f64, v: f64, width: usize, height: usize) -> (usize, usize) {
    (
        map_x(t, plan.tenor_min, plan.tenor_max, width),
        map_y(v, plan.value_min, plan.value_max, height),
    )
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    if t_max <= t_min {
        return 0;
    }
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham); never overwrites a non-blank cell.
fn draw_line(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize), ch: char) {
    let (mut x0, mut y0) = (from.0 as isize, from.1 as isize);
    let (x1, y1) = (to.0 as isize, to.1 as isize);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
