use std::sync::Arc;
use std::thread::spawn;

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use parking_lot::Mutex;

use crate::assigner::ElevatorSnapshot;
use crate::call::Directive;
use crate::config::Settings;
use crate::console::Event;
use crate::direction::Direction;
use crate::doors;
use crate::floor_queue::FloorQueue;

/// Physical state of one car. Owned by the car's worker thread; everyone
/// else sees it only through [`ElevatorDriver::snapshot`].
#[derive(Debug, Clone)]
pub struct ElevatorState {
    pub id: usize,
    pub min_floor: i32,
    pub max_floor: i32,
    pub current_floor: i32,
    pub direction: Direction,
}

struct Shared {
    state: ElevatorState,
    queue: FloorQueue,
}

/// Handle to one elevator's control loop. The worker thread is spawned when
/// the fleet is built and runs until shutdown; submitting stops never blocks.
pub struct ElevatorDriver {
    id: usize,
    shared: Arc<Mutex<Shared>>,
    wake_tx: Sender<()>,
}

/// Spawns one driver per car, ids counted from 1. Every car starts idle at
/// the bottom floor.
pub fn build_fleet(
    settings: &Settings,
    event_tx: &Sender<Event>,
    shutdown_rx: &Receiver<()>,
) -> Vec<ElevatorDriver> {
    (1..=settings.elevator_count)
        .map(|id| ElevatorDriver::spawn(id, settings, event_tx.clone(), shutdown_rx.clone()))
        .collect()
}

impl ElevatorDriver {
    pub fn spawn(
        id: usize,
        settings: &Settings,
        event_tx: Sender<Event>,
        shutdown_rx: Receiver<()>,
    ) -> Self {
        let shared = Arc::new(Mutex::new(Shared {
            state: ElevatorState {
                id,
                min_floor: settings.min_floor,
                max_floor: settings.max_floor,
                current_floor: settings.min_floor,
                direction: Direction::Idle,
            },
            queue: FloorQueue::new(),
        }));
        let (wake_tx, wake_rx) = unbounded();
        {
            let shared = shared.clone();
            let settings = settings.clone();
            spawn(move || run(id, shared, settings, wake_rx, event_tx, shutdown_rx));
        }
        ElevatorDriver { id, shared, wake_tx }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Queue stops for this car and wake its loop. An idle car adopts the
    /// first directive's direction; a running loop picks the new stops up at
    /// its next evaluation.
    pub fn submit(&self, directives: &[Directive]) {
        {
            let mut shared = self.shared.lock();
            for directive in directives {
                // Range is enforced at call validation, before directives exist.
                debug_assert!(
                    directive.floor >= shared.state.min_floor
                        && directive.floor <= shared.state.max_floor
                );
                shared.queue.insert(directive.floor, directive.direction);
            }
            if shared.state.direction == Direction::Idle {
                if let Some(first) = directives.first() {
                    shared.state.direction = first.direction;
                }
            }
        }
        let _ = self.wake_tx.send(());
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        let shared = self.shared.lock();
        ElevatorSnapshot {
            id: shared.state.id,
            floor: shared.state.current_floor,
            direction: shared.state.direction,
        }
    }
}

enum Step {
    Wait,
    Arrive(i32),
    Move(i32),
}

fn run(
    id: usize,
    shared: Arc<Mutex<Shared>>,
    settings: Settings,
    wake_rx: Receiver<()>,
    event_tx: Sender<Event>,
    shutdown_rx: Receiver<()>,
) {
    // Doors open at most once per arrival; the flag only resets when the car
    // moves again.
    let mut doors_opened = false;

    loop {
        match next_step(&shared) {
            Step::Wait => {
                select! {
                    recv(shutdown_rx) -> _ => return,
                    recv(wake_rx) -> msg => if msg.is_err() { return },
                }
            },
            Step::Arrive(floor) => {
                if !doors_opened {
                    if !doors::open(id, floor, settings.doors_open_close_delay(), &event_tx, &shutdown_rx) {
                        return;
                    }
                    doors_opened = true;
                }
                let mut shared = shared.lock();
                let direction = shared.state.direction;
                shared.queue.remove(floor, direction);
                update_direction_after_stop(&mut shared);
            },
            Step::Move(destination) => {
                let (floor, direction) = {
                    let mut shared = shared.lock();
                    if destination > shared.state.current_floor {
                        shared.state.current_floor += 1;
                        (shared.state.current_floor, "Up")
                    } else {
                        shared.state.current_floor -= 1;
                        (shared.state.current_floor, "Down")
                    }
                };
                doors_opened = false;
                let _ = event_tx.send(Event::Elevator {
                    id,
                    message: format!("[Elevator {}] Moving {} to floor {}", id, direction, floor),
                });
                select! {
                    recv(shutdown_rx) -> _ => return,
                    default(settings.between_floors_delay()) => (),
                }
            },
        }
    }
}

/// Re-evaluate direction and destination under the lock: keep serving the
/// active direction's set, reverse once it is exhausted, go idle once both
/// sets are.
fn next_step(shared: &Mutex<Shared>) -> Step {
    let mut shared = shared.lock();
    let destination = match shared.state.direction {
        Direction::Idle => None,
        Direction::Up => match shared.queue.next_up() {
            Some(floor) => Some(floor),
            None => match shared.queue.next_down() {
                Some(floor) => {
                    shared.state.direction = Direction::Down;
                    Some(floor)
                },
                None => {
                    shared.state.direction = Direction::Idle;
                    None
                },
            },
        },
        Direction::Down => match shared.queue.next_down() {
            Some(floor) => Some(floor),
            None => match shared.queue.next_up() {
                Some(floor) => {
                    shared.state.direction = Direction::Up;
                    Some(floor)
                },
                None => {
                    shared.state.direction = Direction::Idle;
                    None
                },
            },
        },
    };
    match destination {
        None => Step::Wait,
        Some(floor) if floor == shared.state.current_floor => Step::Arrive(floor),
        Some(floor) => Step::Move(floor),
    }
}

fn update_direction_after_stop(shared: &mut Shared) {
    match shared.state.direction {
        Direction::Up if !shared.queue.has_up() => {
            shared.state.direction = if shared.queue.has_down() {
                Direction::Down
            } else {
                Direction::Idle
            };
        },
        Direction::Down if !shared.queue.has_down() => {
            shared.state.direction = if shared.queue.has_up() {
                Direction::Up
            } else {
                Direction::Idle
            };
        },
        _ => (),
    }
}
