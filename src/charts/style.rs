// Shared palette and drawing helpers for the chart renderers
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::models::{Priority, TaskStatus};
use crate::utils::{format_day_label, format_percent, format_truncated};

use super::ChartResult;

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub const EMERALD: RGBColor = RGBColor(0x10, 0xB9, 0x81);
pub const AMBER: RGBColor = RGBColor(0xF5, 0x9E, 0x0B);
pub const SLATE: RGBColor = RGBColor(0x6B, 0x72, 0x80);
pub const VIOLET: RGBColor = RGBColor(0x8B, 0x5C, 0xF6);
pub const CRIMSON: RGBColor = RGBColor(0xEF, 0x44, 0x44);
pub const AZURE: RGBColor = RGBColor(0x3B, 0x82, 0xF6);
pub const MIST: RGBColor = RGBColor(0xE5, 0xE7, 0xEB);

/// Fill order for codes without a fixed color
const FALLBACK_CYCLE: [RGBColor; 4] = [EMERALD, AMBER, SLATE, VIOLET];
const PRIORITY_CYCLE: [RGBColor; 3] = [CRIMSON, AMBER, EMERALD];

const GRID_ALPHA: f64 = 0.3;
const BAR_WIDTH: f64 = 0.8;

pub fn status_color(code: &str, index: usize) -> RGBColor {
    match TaskStatus::from_code(code) {
        Some(TaskStatus::Completed) => EMERALD,
        Some(TaskStatus::InProgress) => AMBER,
        Some(TaskStatus::Todo) => SLATE,
        Some(TaskStatus::InReview) => VIOLET,
        None => FALLBACK_CYCLE[index % FALLBACK_CYCLE.len()],
    }
}

pub fn priority_color(code: &str, index: usize) -> RGBColor {
    match Priority::from_code(code) {
        Some(Priority::High) => CRIMSON,
        Some(Priority::Medium) => AMBER,
        Some(Priority::Low) => EMERALD,
        None => PRIORITY_CYCLE[index % PRIORITY_CYCLE.len()],
    }
}

/// Upper bound of a value axis with headroom for bar annotations
pub fn axis_max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let max = values.into_iter().fold(0.0f64, f64::max);
    if max <= 0.0 { 1.0 } else { max * 1.15 }
}

/// Category name for an x position on a categorical axis, blank between categories
pub fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Day label for an x offset counted from `first`, shown every `every` days
pub fn day_offset_label(first: NaiveDate, x: f64, every: i64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 || (idx as i64) % every.max(1) != 0 {
        return String::new();
    }
    format_day_label(&(first + chrono::Duration::days(idx as i64)))
}

pub fn grid_style() -> RGBAColor {
    BLACK.mix(GRID_ALPHA)
}

pub fn annotation_style() -> TextStyle<'static> {
    ("sans-serif", 15)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom))
}

/// One bar per category with a value annotation above each bar
pub struct BarPanel<'a> {
    pub title: &'a str,
    pub x_desc: Option<&'a str>,
    pub y_desc: &'a str,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<RGBColor>,
    pub annotation_suffix: &'a str,
}

pub fn draw_bar_panel(area: &Canvas<'_>, panel: &BarPanel<'_>) -> ChartResult {
    let count = panel.values.len().max(1);
    let y_max = axis_max(panel.values.iter().copied());

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), 0f64..y_max)?;

    let categories = &panel.categories;
    let x_formatter = |x: &f64| category_label(categories, *x);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(count)
        .x_label_formatter(&x_formatter)
        .disable_x_mesh()
        .bold_line_style(&grid_style())
        .light_line_style(&WHITE.mix(0.0))
        .y_desc(panel.y_desc)
        .label_style(("sans-serif", 14));
    if let Some(x_desc) = panel.x_desc {
        mesh.x_desc(x_desc);
    }
    mesh.draw()?;

    let half = BAR_WIDTH / 2.0;
    chart.draw_series(panel.values.iter().enumerate().map(|(i, value)| {
        let x = i as f64;
        let color = panel
            .colors
            .get(i)
            .copied()
            .unwrap_or(FALLBACK_CYCLE[i % FALLBACK_CYCLE.len()]);
        Rectangle::new([(x - half, 0.0), (x + half, *value)], color.filled())
    }))?;

    let offset = y_max * 0.01;
    chart.draw_series(panel.values.iter().enumerate().map(|(i, value)| {
        Text::new(
            format!("{}{}", format_truncated(*value), panel.annotation_suffix),
            (i as f64, *value + offset),
            annotation_style(),
        )
    }))?;

    Ok(())
}

/// Dated line series plotted against day offsets from the first date
pub struct LinePanel<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub points: Vec<(NaiveDate, f64)>,
    pub color: RGBColor,
    pub label_every: i64,
    pub fill: bool,
}

pub fn draw_line_panel(area: &Canvas<'_>, panel: &LinePanel<'_>) -> ChartResult {
    let first = panel
        .points
        .iter()
        .map(|(date, _)| *date)
        .min()
        .unwrap_or(NaiveDate::MIN);
    let coords: Vec<(f64, f64)> = panel
        .points
        .iter()
        .map(|(date, value)| ((*date - first).num_days() as f64, *value))
        .collect();

    let x_last = coords.iter().map(|(x, _)| *x).fold(0.0f64, f64::max);
    let y_max = axis_max(coords.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(x_last + 0.5), 0f64..y_max)?;

    let label_every = panel.label_every;
    let x_formatter = |x: &f64| day_offset_label(first, *x, label_every);

    chart
        .configure_mesh()
        .x_labels(x_last as usize + 1)
        .x_label_formatter(&x_formatter)
        .bold_line_style(&grid_style())
        .light_line_style(&WHITE.mix(0.0))
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .label_style(("sans-serif", 14))
        .draw()?;

    if panel.fill {
        chart.draw_series(AreaSeries::new(
            coords.iter().copied(),
            0.0,
            &panel.color.mix(GRID_ALPHA),
        ))?;
    }
    chart.draw_series(LineSeries::new(
        coords.iter().copied(),
        panel.color.stroke_width(2),
    ))?;
    chart.draw_series(
        coords
            .iter()
            .map(|point| Circle::new(*point, 5, panel.color.filled())),
    )?;

    Ok(())
}

pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

/// Pie starting at 12 o'clock and running counter-clockwise, with slice
/// labels outside the rim and bold white percentages inside.
pub fn draw_pie(area: &Canvas<'_>, title: &str, slices: &[PieSlice]) -> ChartResult {
    let area = area.titled(title, ("sans-serif", 22))?;

    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 * 0.35;

    let mut start = 90.0f64;
    for slice in slices {
        let value = slice.value.max(0.0);
        if value == 0.0 {
            continue;
        }
        let sweep = value / total * 360.0;
        area.draw(&Polygon::new(
            wedge_points(center, radius, start, sweep),
            slice.color.filled(),
        ))?;

        let middle = start + sweep / 2.0;
        let anchor = if middle.to_radians().cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        let label_style = ("sans-serif", 18)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(anchor, VPos::Center));
        area.draw(&Text::new(
            slice.label.clone(),
            polar(center, radius * 1.1, middle),
            label_style,
        ))?;

        let percent_style = ("sans-serif", 18)
            .into_font()
            .style(FontStyle::Bold)
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(
            format_percent(value / total * 100.0),
            polar(center, radius * 0.6, middle),
            percent_style,
        ))?;

        start += sweep;
    }

    Ok(())
}

fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (i32, i32) {
    let radians = degrees.to_radians();
    (
        (center.0 + radius * radians.cos()).round() as i32,
        (center.1 - radius * radians.sin()).round() as i32,
    )
}

fn wedge_points(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / 2.0).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push((center.0.round() as i32, center.1.round() as i32));
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: RGBColor) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn test_status_colors_are_semantic() {
        assert_eq!(rgb(status_color("COMPLETED", 3)), (0x10, 0xB9, 0x81));
        assert_eq!(rgb(status_color("DONE", 0)), (0x10, 0xB9, 0x81));
        assert_eq!(rgb(status_color("IN_REVIEW", 0)), (0x8B, 0x5C, 0xF6));
        assert_eq!(rgb(status_color("ARCHIVED", 2)), rgb(SLATE));
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(rgb(priority_color("HIGH", 2)), rgb(CRIMSON));
        assert_eq!(rgb(priority_color("LOW", 0)), rgb(EMERALD));
        assert_eq!(rgb(priority_color("URGENT", 0)), rgb(CRIMSON));
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(Vec::<f64>::new()), 1.0);
        assert_eq!(axis_max(vec![0.0, 0.0]), 1.0);
        assert!((axis_max(vec![10.0, 20.0]) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_label() {
        let categories = vec!["A Fazer".to_string(), "Concluído".to_string()];
        assert_eq!(category_label(&categories, 0.0), "A Fazer");
        assert_eq!(category_label(&categories, 1.0), "Concluído");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, 2.0), "");
        assert_eq!(category_label(&categories, -1.0), "");
    }

    #[test]
    fn test_day_offset_label_every_three_days() {
        let first = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(day_offset_label(first, 0.0, 3), "28/02");
        assert_eq!(day_offset_label(first, 1.0, 3), "");
        assert_eq!(day_offset_label(first, 3.0, 3), "02/03");
    }

    #[test]
    fn test_wedge_closes_at_center() {
        let points = wedge_points((100.0, 100.0), 50.0, 90.0, 90.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (100, 50));
        assert_eq!(*points.last().unwrap(), (50, 100));
    }
}
