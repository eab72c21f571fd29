//! Sunburst widget and screen layout.

use std::f64::consts::TAU;

use diskring_core::Rgb;
use diskring_layout::{Point, Segment, arc_polygon, polar};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{self, Canvas, Points};
use ratatui::widgets::{Paragraph, Widget};

use crate::event::KEY_HELP;
use crate::theme::{Theme, to_color};

/// Braille dots per terminal cell.
const DOTS_X: f64 = 2.0;
const DOTS_Y: f64 = 4.0;

/// Canvas rendering of collected segments.
#[derive(Debug, Clone)]
pub struct Sunburst<'a> {
    segments: &'a [Segment],
    background: Rgb,
    line_color: Rgb,
    outline: bool,
    radius: f64,
}

impl<'a> Sunburst<'a> {
    pub fn new(segments: &'a [Segment], background: Rgb, line_color: Rgb, line_width: f64) -> Self {
        let radius = segments
            .iter()
            .map(|s| s.outer_radius)
            .fold(0.0, f64::max);

        Self {
            segments,
            background,
            line_color,
            outline: line_width > 0.0,
            radius: if radius > 0.0 { radius } else { 1.0 },
        }
    }

    /// World bounds for `area` so that braille dots come out square and the
    /// whole sunburst fits.
    pub fn bounds(&self, area: Rect) -> ([f64; 2], [f64; 2]) {
        let extent = self.radius * 1.05;
        let dots_x = f64::from(area.width.max(1)) * DOTS_X;
        let dots_y = f64::from(area.height.max(1)) * DOTS_Y;
        let ratio = dots_x / dots_y;

        if ratio >= 1.0 {
            ([-extent * ratio, extent * ratio], [-extent, extent])
        } else {
            ([-extent, extent], [-extent / ratio, extent / ratio])
        }
    }
}

impl Widget for Sunburst<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x_bounds, y_bounds) = self.bounds(area);
        let dot = (y_bounds[1] - y_bounds[0]) / (f64::from(area.height.max(1)) * DOTS_Y);

        let fills: Vec<(Vec<Point>, ratatui::style::Color)> = self
            .segments
            .iter()
            .map(|s| (fill_points(s, dot), to_color(s.color)))
            .collect();
        let outlines: Vec<Vec<Point>> = if self.outline {
            self.segments.iter().map(arc_polygon).collect()
        } else {
            Vec::new()
        };
        let line_color = to_color(self.line_color);

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(self.background))
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for (coords, color) in &fills {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
                for polygon in &outlines {
                    // Each point to its successor, wrapping back to the first
                    for (a, b) in polygon.iter().zip(polygon.iter().cycle().skip(1)) {
                        ctx.draw(&canvas::Line::new(a.0, a.1, b.0, b.1, line_color));
                    }
                }
            })
            .render(area, buf);
    }
}

/// Sample points covering a segment at roughly `step` spacing.
///
/// Rings are walked from the inner to the outer radius; along each ring the
/// angular step shrinks with the radius so spacing stays even.
pub fn fill_points(segment: &Segment, step: f64) -> Vec<Point> {
    let mut points = Vec::new();
    if !step.is_finite() || step <= 0.0 || segment.thickness() <= 0.0 {
        return points;
    }

    let mut radius = segment.inner_radius + step / 2.0;
    while radius < segment.outer_radius {
        let turn_step = step / (TAU * radius);
        let mut turns = segment.angle_start;
        while turns < segment.angle_end() {
            points.push(polar(radius, turns));
            turns += turn_step;
        }
        radius += step;
    }
    points
}

/// What the screen shows.
pub struct View<'a> {
    pub sunburst: Sunburst<'a>,
    pub root: &'a str,
    pub total_size: u64,
    pub theme: &'a Theme,
}

/// Draw header, canvas and footer.
pub fn draw(frame: &mut Frame, view: &View) {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let theme = view.theme;
    let title = Line::from(vec![
        Span::styled(" diskring ", theme.title),
        Span::raw(view.root.to_string()),
        Span::raw("  "),
        Span::styled(format_size(view.total_size), theme.size),
    ]);
    frame.render_widget(Paragraph::new(title).style(theme.header), header);

    frame.render_widget(view.sunburst.clone(), main);

    let mut help = vec![Span::raw(" ")];
    for (keys, description) in KEY_HELP {
        help.push(Span::styled(*keys, theme.help_key));
        help.push(Span::styled(format!(" {description}  "), theme.help_desc));
    }
    frame.render_widget(Paragraph::new(Line::from(help)).style(theme.footer), footer);
}

/// Format a byte size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
