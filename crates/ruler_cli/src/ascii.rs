//! Text rendering of a ruler layout

use ruler_slider::RulerLayout;

/// Draw the visible part of `layout` into `columns` characters per row.
///
/// Rows, top to bottom: center indicator, major marks, all marks, center
/// indicator again, then `label` centered underneath.
pub fn render_ruler(layout: &RulerLayout, columns: usize, label: &str) -> String {
    if columns == 0 || layout.viewport_width <= 0.0 {
        return String::new();
    }

    let scale = (columns - 1) as f64 / layout.viewport_width;
    let column_of = |x: f64| ((x * scale).round() as usize).min(columns - 1);

    let mut major = vec![' '; columns];
    let mut minor = vec![' '; columns];
    for mark in layout.visible_marks() {
        let column = column_of(mark.x);
        minor[column] = if mark.major { '|' } else { '\'' };
        if mark.major {
            major[column] = '|';
        }
    }

    let center = column_of(layout.center_x);
    let indicator = |glyph: char| {
        let mut row = vec![' '; columns];
        row[center] = glyph;
        row
    };

    let pad = columns.saturating_sub(label.chars().count()) / 2;
    let rows = [indicator('v'), major, minor, indicator('^')];

    let mut out = String::new();
    for row in rows {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&" ".repeat(pad));
    out.push_str(label);
    out.push('\n');
    out
}
