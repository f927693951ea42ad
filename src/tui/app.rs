//! Frame loop for running a screen in the real terminal.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::debug;

use super::input::map_key;
use super::theme::current_theme;
use super::ui::render_display;
use crate::clock::SharedClock;
use crate::screen::{Screen, ScreenSignal};

/// Target frame interval (60 fps).
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Run `screen` until it signals `Exit`.
///
/// Enters raw mode and the alternate screen, and restores the terminal on
/// the way out, including when drawing fails.
#[cfg(not(tarpaulin_include))]
pub fn run<S: Screen>(screen: &mut S, clock: &SharedClock) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, screen, clock);
    ratatui::restore();
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop<S: Screen>(
    terminal: &mut DefaultTerminal,
    screen: &mut S,
    clock: &SharedClock,
) -> Result<()> {
    let theme = current_theme();
    let mut last_frame = Instant::now();

    loop {
        let state = screen.render();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_display(frame, area, screen.title(), &state, &theme);
            })
            .context("Failed to draw frame")?;

        let timeout = FRAME_INTERVAL.saturating_sub(last_frame.elapsed());
        if event::poll(timeout).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                if let Some(input) = map_key(key) {
                    if screen.handle_key(input) == ScreenSignal::Exit {
                        debug!("screen closed by key");
                        return Ok(());
                    }
                }
            }
        }

        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        clock.borrow_mut().advance(delta_time);
        if screen.advance(delta_time) == ScreenSignal::Exit {
            return Ok(());
        }
    }
}
