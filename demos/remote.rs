//! Drive the media control bar from a plain terminal event loop.
//!
//! Arrows move focus, Enter activates, `s` toggles the bar's showing
//! flag, `g` toggles the settings button's visibility (to exercise the
//! Up fallback chain), `q` quits.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use dpad::widgets::{CustomButton, MediaControlBar};
use dpad::{BarEvent, ButtonSpec, ControlId};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Paragraph;

fn main() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal);
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
    let mut bar = MediaControlBar::standard();
    bar.update_buttons(vec![CustomButton {
        spec: ButtonSpec {
            id: "cast".to_string(),
            icon: "Cast".to_string(),
            tooltip: "Cast to device".to_string(),
            colored: true,
        },
        on_press: None,
    }]);
    bar.set_active(ControlId::Play);

    let mut showing = true;
    let mut last_activated: Option<ControlId> = None;

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(4),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            if showing {
                bar.render(frame, chunks[1]);
            }

            let status = format!(
                "showing: {showing}  active: {:?}  last activated: {:?}  (s/g/q)",
                bar.bar().active_id(),
                last_activated,
            );
            frame.render_widget(Paragraph::new(status), chunks[2]);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('s') => showing = !showing,
                KeyCode::Char('g') => {
                    if let Some(settings) = bar.bar_mut().control_mut(&ControlId::Settings) {
                        if settings.is_visible() {
                            settings.hide();
                        } else {
                            settings.show();
                        }
                    }
                }
                _ => {
                    if let Some(BarEvent::Activated(id)) = bar.handle_key(&key, showing) {
                        last_activated = Some(id);
                    }
                }
            }
        }
    }
}
