use std::time::Duration;

use crossbeam_channel::{select, Receiver, Sender};

use crate::console::Event;

/// Hold the doors open for `delay`, reporting both edges. Returns false if
/// shutdown fires mid-wait, in which case the closing edge is never reported
/// and the caller unwinds without touching its queues.
pub fn open(
    id: usize,
    floor: i32,
    delay: Duration,
    event_tx: &Sender<Event>,
    shutdown_rx: &Receiver<()>,
) -> bool {
    let _ = event_tx.send(Event::Elevator {
        id,
        message: format!("[Elevator {}] At floor {} - Doors are opening", id, floor),
    });
    select! {
        recv(shutdown_rx) -> _ => return false,
        default(delay) => (),
    }
    let _ = event_tx.send(Event::Elevator {
        id,
        message: format!("[Elevator {}] At floor {} - Doors are closing", id, floor),
    });
    true
}
