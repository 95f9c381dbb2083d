use std::cmp::Ordering;
use std::sync::Arc;
use std::thread::spawn;
use std::time::Duration;

use crossbeam_channel::{bounded, select, Receiver, Sender};

use crate::assigner::{self, ElevatorSnapshot};
use crate::call::{Call, Directive};
use crate::config::Settings;
use crate::console::Event;
use crate::direction::Direction;
use crate::fsm::ElevatorDriver;
use crate::request_buffer::RequestBuffer;

const DEQUEUE_POLL_PERIOD: Duration = Duration::from_millis(10);

/// Front door of the engine: validates calls, buffers them, and runs the
/// background loop that assigns each one to a car under a bounded number of
/// in-flight assignment tasks.
#[derive(Clone)]
pub struct Dispatcher {
    settings: Settings,
    buffer: RequestBuffer,
    event_tx: Sender<Event>,
}

impl Dispatcher {
    pub fn new(
        settings: Settings,
        fleet: Arc<Vec<ElevatorDriver>>,
        event_tx: Sender<Event>,
        shutdown_rx: Receiver<()>,
    ) -> Self {
        let buffer = RequestBuffer::new();

        // A bounded channel pre-filled with unit tokens serves as the
        // concurrency permit pool: recv acquires, send releases.
        let (permit_tx, permit_rx) = bounded(settings.concurrency_limit);
        for _ in 0..settings.concurrency_limit {
            let _ = permit_tx.send(());
        }

        {
            let buffer = buffer.clone();
            let event_tx = event_tx.clone();
            spawn(move || process_queue(buffer, fleet, permit_tx, permit_rx, event_tx, shutdown_rx));
        }

        Dispatcher { settings, buffer, event_tx }
    }

    /// Entry point for callers. Invalid calls are reported and dropped
    /// without ever reaching the buffer.
    pub fn handle_call(&self, call: Call) {
        if !call.is_valid(&self.settings) {
            let _ = self.event_tx.send(Event::Error(format!(
                "Invalid elevator request: [{}] -> [{}] -> [{}]",
                call.floor,
                call.destination_floor,
                call.direction.as_str()
            )));
            return;
        }
        self.buffer.enqueue(call);
    }
}

fn process_queue(
    buffer: RequestBuffer,
    fleet: Arc<Vec<ElevatorDriver>>,
    permit_tx: Sender<()>,
    permit_rx: Receiver<()>,
    event_tx: Sender<Event>,
    shutdown_rx: Receiver<()>,
) {
    loop {
        let call = match buffer.try_dequeue() {
            Some(call) => call,
            None => {
                select! {
                    recv(shutdown_rx) -> _ => return,
                    default(DEQUEUE_POLL_PERIOD) => continue,
                }
            },
        };
        select! {
            recv(shutdown_rx) -> _ => return,
            recv(permit_rx) -> msg => if msg.is_err() { return },
        }
        let fleet = fleet.clone();
        let event_tx = event_tx.clone();
        let permit_tx = permit_tx.clone();
        spawn(move || {
            process_call(&call, &fleet, &event_tx);
            let _ = permit_tx.send(());
        });
    }
}

fn process_call(call: &Call, fleet: &[ElevatorDriver], event_tx: &Sender<Event>) {
    // One consistent snapshot per call, for both assignment and derivation.
    let snapshots: Vec<ElevatorSnapshot> = fleet.iter().map(|driver| driver.snapshot()).collect();

    let assigned = assigner::assign(call, &snapshots);
    let (id, snapshot) = match assigned {
        Some(id) => (id, snapshots.iter().find(|s| s.id == id)),
        None => {
            // No car can take the call right now; it is dropped, not retried.
            let _ = event_tx.send(Event::Info(format!(
                "No elevator available for request: [{}] -> [{}] -> [{}]",
                call.floor,
                call.destination_floor,
                call.direction.as_str()
            )));
            return;
        },
    };
    let (driver, snapshot) = match (fleet.iter().find(|d| d.id() == id), snapshot) {
        (Some(driver), Some(snapshot)) => (driver, snapshot),
        _ => return,
    };

    let _ = event_tx.send(Event::Elevator {
        id,
        message: format!(
            "[Elevator {}] Assigned for Request: [{}] -> [{}] -> [{}]",
            id,
            call.floor,
            call.destination_floor,
            call.direction.as_str()
        ),
    });
    driver.submit(&derive_directives(call, snapshot.floor));
}

/// Split a call into its two stops. Each stop is tagged with the direction
/// the car will be travelling when it reaches the floor, which decides the
/// queue set it lands in: the origin is referenced against the car's current
/// floor, the destination against the origin. A stop below its reference is
/// a down stop even if the rider is heading up.
pub fn derive_directives(call: &Call, elevator_floor: i32) -> [Directive; 2] {
    [
        Directive {
            floor: call.floor,
            direction: direction_to(call.floor, elevator_floor, call.direction),
        },
        Directive {
            floor: call.destination_floor,
            direction: direction_to(call.destination_floor, call.floor, call.direction),
        },
    ]
}

fn direction_to(target: i32, reference: i32, fallback: Direction) -> Direction {
    match target.cmp(&reference) {
        Ordering::Greater => Direction::Up,
        Ordering::Equal => fallback,
        Ordering::Less => Direction::Down,
    }
}
