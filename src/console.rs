use std::io::{stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::{ExecutableCommand, Result};

/// Everything the engine reports goes through this channel; the core never
/// formats or colors anything itself.
#[derive(Debug, Clone)]
pub enum Event {
    Elevator { id: usize, message: String },
    Error(String),
    Info(String),
}

const ELEVATOR_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::White,
];

pub fn main(event_rx: Receiver<Event>) -> Result<()> {
    let mut stdout = stdout();

    // Ends when the last event sender is dropped at shutdown.
    while let Ok(event) = event_rx.recv() {
        let (color, message) = match event {
            Event::Elevator { id, message } => (elevator_color(id), message),
            Event::Error(message) => (Color::DarkRed, message),
            Event::Info(message) => (Color::DarkBlue, message),
        };
        stdout.execute(SetForegroundColor(color))?;
        writeln!(stdout, "{}", message)?;
        stdout.execute(ResetColor)?;
    }
    Ok(())
}

// Fleets larger than the palette reuse colors instead of failing.
fn elevator_color(id: usize) -> Color {
    ELEVATOR_COLORS[id % ELEVATOR_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_assignment_is_stable_per_elevator() {
        assert_eq!(elevator_color(1), elevator_color(1));
    }

    #[test]
    fn palette_wraps_for_large_fleets() {
        assert_eq!(elevator_color(2), elevator_color(2 + ELEVATOR_COLORS.len()));
    }
}
