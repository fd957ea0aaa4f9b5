//! Presentation helpers: per-row percentages and a terminal bar chart.

use serde::Serialize;

use crate::float_fmt::fmt_percent;
use crate::softmax::Distribution;
use crate::viz::Frame;

/// One line of the visualization: label, percentage text and bar width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    pub label: String,
    /// Percentage with one decimal, e.g. `"53.9"`.
    pub percent: String,
    /// Bar length in percent of the full track; matches `percent`.
    pub bar_width: f64,
}

pub fn rows(distribution: &Distribution) -> Vec<RenderedRow> {
    distribution
        .iter()
        .map(|p| {
            let percent = fmt_percent(p.probability);
            let bar_width = (p.probability * 1000.0).round() / 10.0;
            RenderedRow {
                label: p.label.clone(),
                percent,
                bar_width,
            }
        })
        .collect()
}

/// Plain-text chart with a header line and one bar per entry. `width` is the
/// number of cells in a full (100%) bar.
pub fn text_chart(frame: &Frame, width: usize) -> String {
    let rows = rows(&frame.distribution);
    let label_w = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    let mut out = format!("temperature {}\n", frame.temperature_label);
    for r in &rows {
        let filled = ((r.bar_width / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        out.push_str(&format!(
            "{:<label_w$}  {}{}  {:>5}%\n",
            r.label,
            "#".repeat(filled),
            ".".repeat(width - filled),
            r.percent,
        ));
    }
    out
}
