//! Media control bar widget: renders a two-row TV-style control bar
//! and routes D-pad key events through the `dpad-core` engine.

use std::collections::HashMap;

use crossterm::event::KeyEvent;
use dpad_core::{BarEvent, ButtonSpec, Control, ControlBar, ControlId, Row};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Activation handler for a control.
pub type Callback = Box<dyn FnMut() + Send>;

/// A dynamic button descriptor paired with its activation handler.
pub struct CustomButton {
    /// The injection descriptor forwarded to the engine.
    pub spec: ButtonSpec,
    /// Invoked when the injected button is activated.
    pub on_press: Option<Callback>,
}

/// Visual style configuration for the [`MediaControlBar`] widget.
#[derive(Debug, Clone)]
pub struct BarStyle {
    /// Style applied to inactive controls.
    pub normal: Style,
    /// Style applied to the control holding the focus indicator.
    pub active: Style,
    /// Style applied to the tooltip line.
    pub tooltip: Style,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::DarkGray),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tooltip: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// A media-player control bar driven entirely by D-pad input.
///
/// Wraps a [`ControlBar`] engine and adds the pieces the engine leaves
/// to its host: rendering (top row, injected-button strip, bottom row,
/// and the active control's tooltip), and activation dispatch to
/// registered callbacks.
///
/// The bar renders four one-cell-high lines in the order the original
/// stacks its containers: top, custom buttons, bottom, tooltip.
pub struct MediaControlBar {
    bar: ControlBar,
    callbacks: HashMap<ControlId, Callback>,
    style: BarStyle,
}

impl MediaControlBar {
    /// Wrap an engine built by the caller.
    pub fn new(bar: ControlBar) -> Self {
        Self {
            bar,
            callbacks: HashMap::new(),
            style: BarStyle::default(),
        }
    }

    /// Build the standard TV layout: back and settings on top; play,
    /// alt text, live badge, elapsed readout, seek slider, and
    /// countdown on the bottom. Play and back start visible; settings
    /// and the live badge appear when the host shows them.
    pub fn standard() -> Self {
        let top = vec![
            Control::button(ControlId::Back, "Back").with_tooltip("Back"),
            Control::button(ControlId::Settings, "Settings")
                .with_tooltip("Settings")
                .hidden(),
        ];
        let bottom = vec![
            Control::button(ControlId::Play, "Play"),
            Control::text(ControlId::Alt, ""),
            Control::button(ControlId::Live, "LIVE").hidden(),
            Control::text(ControlId::Elapsed, "0:00"),
            Control::slider(ControlId::TimeSlider, "──────────"),
            Control::text(ControlId::Countdown, "0:00"),
        ];
        let bar = ControlBar::new(top, bottom).expect("standard layout ids are unique");
        Self::new(bar)
    }

    /// Set the visual style for this bar.
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// The underlying engine, for focus queries.
    pub fn bar(&self) -> &ControlBar {
        &self.bar
    }

    /// Mutable access to the engine, for hosts reflecting player state
    /// (show/hide controls, update time readouts) between key events.
    pub fn bar_mut(&mut self) -> &mut ControlBar {
        &mut self.bar
    }

    /// Register an activation handler for a control.
    pub fn on_press(&mut self, id: ControlId, callback: impl FnMut() + Send + 'static) {
        self.callbacks.insert(id, Box::new(callback));
    }

    /// Force a specific control to become active.
    pub fn set_active(&mut self, id: ControlId) {
        self.bar.set_active_button(id);
    }

    /// Process one key event.
    ///
    /// `showing` is the bar's current visibility, supplied fresh on
    /// every event. If the engine reports an activation, the matching
    /// registered callback runs before the event is returned to the
    /// caller.
    pub fn handle_key(&mut self, event: &KeyEvent, showing: bool) -> Option<BarEvent> {
        let bar_event = self.bar.handle_keydown(event, showing)?;
        let BarEvent::Activated(ref id) = bar_event;
        if let Some(callback) = self.callbacks.get_mut(id) {
            callback();
        }
        Some(bar_event)
    }

    /// Inject dynamic buttons, registering their handlers.
    ///
    /// Ordering follows the engine: each call's block lands in reverse
    /// input order, appended after previously injected buttons.
    pub fn update_buttons(&mut self, buttons: Vec<CustomButton>) {
        let mut specs = Vec::with_capacity(buttons.len());
        for button in buttons {
            if let Some(callback) = button.on_press {
                self.callbacks
                    .insert(ControlId::Custom(button.spec.id.clone()), callback);
            }
            specs.push(button.spec);
        }
        self.bar.update_buttons(specs);
    }

    /// Tear down: clear focus state and drop all handlers.
    pub fn destroy(&mut self) {
        self.bar.destroy();
        self.callbacks.clear();
    }

    /// Render the bar into the given frame and area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(self.row_line(self.bar.top(), area.width), lines[0]);
        frame.render_widget(self.strip_line(self.bar.custom_buttons(), area.width), lines[1]);
        frame.render_widget(self.row_line(self.bar.bottom(), area.width), lines[2]);

        if let Some(tooltip) = self.bar.active_control().and_then(Control::tooltip) {
            let line = Line::from(Span::styled(tooltip, self.style.tooltip));
            frame.render_widget(Paragraph::new(line), lines[3]);
        }
    }

    fn row_line<'a>(&'a self, row: &'a Row, max_width: u16) -> Line<'a> {
        self.strip_line(row.controls(), max_width)
    }

    fn strip_line<'a>(&'a self, controls: &'a [Control], max_width: u16) -> Line<'a> {
        let mut spans = Vec::new();
        let mut used = 0usize;
        for control in controls.iter().filter(|c| c.is_visible()) {
            let text = control.label();
            // Two trailing cells of padding between controls.
            if used + text.width() + 2 > max_width as usize {
                break;
            }
            used += text.width() + 2;
            let style = if control.is_active() {
                self.style.active
            } else {
                self.style.normal
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}
