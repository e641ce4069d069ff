use std::fs;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{info, warn};

use crate::config::TOP_COUNTRIES;
use crate::countries::CountryTable;
use crate::error::{AppError, Result};
use crate::stats;
use crate::types::Attendee;

/// Categorical palette, colorblind-checked ordering (blue, orange, aqua,
/// yellow). Magnitude bars use the first slot only.
const SERIES: [RGBColor; 4] = [
    RGBColor(0x2a, 0x78, 0xd6),
    RGBColor(0xeb, 0x68, 0x34),
    RGBColor(0x1b, 0xaf, 0x7a),
    RGBColor(0xed, 0xa1, 0x00),
];

const BAR_SIZE: (u32, u32) = (1200, 800);
const PIE_SIZE: (u32, u32) = (800, 600);

/// Render the full chart set for one event under `out_dir` (created on
/// demand): top countries, Italian vs non-Italian, Europe vs non-Europe and
/// gender distribution as both bar and pie.
pub fn render_all(
    event_id: &str,
    out_dir: &Path,
    attendees: &[Attendee],
    countries: &CountryTable,
) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let top: Vec<(String, u64)> = stats::top_countries(attendees, TOP_COUNTRIES)
        .into_iter()
        .map(|(code, count)| (countries.name_of(&code).to_string(), count))
        .collect();
    bar_chart(
        &out_dir.join(format!("{event_id}_top_countries.png")),
        "Top Countries by Attendees",
        "Country",
        &top,
    )?;

    pie_chart(
        &out_dir.join(format!("{event_id}_italian_vs_non_italian.png")),
        "Italian vs Non-Italian Attendees",
        &stats::italian_split(attendees),
    )?;

    pie_chart(
        &out_dir.join(format!("{event_id}_europe_vs_non_europe.png")),
        "Europe vs Non-Europe Attendees",
        &stats::europe_split(attendees),
    )?;

    let genders = stats::gender_counts(attendees);
    bar_chart(
        &out_dir.join(format!("{event_id}_gender_bar.png")),
        "Gender Diversity",
        "Gender",
        &genders,
    )?;
    pie_chart(
        &out_dir.join(format!("{event_id}_gender_pie.png")),
        "Gender Diversity",
        &genders,
    )?;

    Ok(())
}

/// Single-hue vertical bar chart with a value label above each bar.
fn bar_chart(path: &Path, title: &str, x_desc: &str, data: &[(String, u64)]) -> Result<()> {
    if data.is_empty() {
        warn!("No data for \"{title}\", skipping");
        return Ok(());
    }

    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = data.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..data.len()).into_segmented(), 0u64..y_max + y_max / 10 + 1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(idx) => data
                .get(*idx)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc(x_desc)
        .y_desc("Number of Attendees")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(SERIES[0].filled())
                .margin(10)
                .data(data.iter().enumerate().map(|(idx, (_, count))| (idx, *count))),
        )
        .map_err(chart_err)?;

    let label_style = TextStyle::from(("sans-serif", 20).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(data.iter().enumerate().map(|(idx, (_, count))| {
            Text::new(
                count.to_string(),
                (SegmentValue::CenterOf(idx), *count),
                label_style.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Plot saved to {}", path.display());
    Ok(())
}

/// Pie chart with per-slice labels and percentages.
fn pie_chart(path: &Path, title: &str, data: &[(String, u64)]) -> Result<()> {
    let total: u64 = data.iter().map(|(_, count)| *count).sum();
    if total == 0 {
        warn!("No data for \"{title}\", skipping");
        return Ok(());
    }

    let root = BitMapBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root.titled(title, ("sans-serif", 36)).map_err(chart_err)?;

    let sizes: Vec<f64> = data.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = data.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = SERIES.iter().copied().cycle().take(data.len()).collect();

    let center = (
        PIE_SIZE.0 as i32 / 2,
        (PIE_SIZE.1 as i32 - 50) / 2,
    );
    let radius = (PIE_SIZE.1 as f64 - 50.0) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 24).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 18).into_font().color(&BLACK));
    root.draw(&pie).map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!("Plot saved to {}", path.display());
    Ok(())
}

fn chart_err(e: impl std::fmt::Display) -> AppError {
    AppError::Chart(e.to_string())
}
