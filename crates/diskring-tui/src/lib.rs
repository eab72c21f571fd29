//! Terminal sunburst display for diskring.
//!
//! [`CanvasSink`] collects the arcs produced by the layout engine and, when
//! finalized, shows them on a braille canvas until the user closes the
//! display.
//!
//! # Keyboard
//!
//! - `q` / `Esc` - Close
//! - `Ctrl-C` - Close

mod event;
mod theme;
mod ui;

use std::io;

use crossterm::event::Event;
use diskring_core::{RenderError, Rgb, VisualConfig};
use diskring_layout::{DrawSink, Segment};
use ratatui::DefaultTerminal;

pub use event::KeyAction;
pub use theme::{Theme, ThemeVariant};
pub use ui::{Sunburst, fill_points};

use ui::View;

/// Interactive display sink.
///
/// Arcs are buffered in draw order; the terminal is only taken over in
/// [`DrawSink::finalize`], which blocks until the user closes the display.
pub struct CanvasSink {
    segments: Vec<Segment>,
    fill: Rgb,
    background: Rgb,
    line_color: Rgb,
    line_width: f64,
    root: String,
    total_size: u64,
    shown: bool,
}

impl CanvasSink {
    /// Create a sink for the tree rooted at `root` of `total_size` bytes.
    pub fn new(config: &VisualConfig, root: impl Into<String>, total_size: u64) -> Self {
        Self {
            segments: Vec::new(),
            fill: Rgb::BLACK,
            background: config.background_color,
            line_color: config.line_color,
            line_width: config.line_width,
            root: root.into(),
            total_size,
            shown: false,
        }
    }

    /// Arcs collected so far, as they will be drawn.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn run(&self, mut terminal: DefaultTerminal) -> io::Result<()> {
        let theme = Theme::for_background(self.background);
        let view = View {
            sunburst: Sunburst::new(
                &self.segments,
                self.background,
                self.line_color,
                self.line_width,
            ),
            root: &self.root,
            total_size: self.total_size,
            theme: &theme,
        };

        loop {
            terminal.draw(|frame| ui::draw(frame, &view))?;

            // Resizes and unbound keys fall through to a redraw
            if let Event::Key(key) = crossterm::event::read()? {
                if KeyAction::from_key_event(key) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}

impl DrawSink for CanvasSink {
    fn set_fill_color(&mut self, color: Rgb) -> Result<(), RenderError> {
        self.fill = color;
        Ok(())
    }

    fn draw_arc_segment(&mut self, segment: &Segment) -> Result<(), RenderError> {
        let mut segment = segment.clone();
        segment.color = self.fill;
        self.segments.push(segment);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        if self.shown {
            return Err(RenderError::Finalized);
        }
        self.shown = true;

        // Nothing may log while the alternate screen is up
        tracing::debug!(segments = self.segments.len(), "opening display");
        let terminal = ratatui::try_init().map_err(RenderError::Terminal)?;
        let result = self.run(terminal);
        ratatui::restore();

        result.map_err(RenderError::Terminal)
    }
}
