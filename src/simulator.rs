use crossbeam_channel::{select, Receiver, Sender};
use rand::Rng;

use crate::call::Call;
use crate::config::Settings;
use crate::console::Event;
use crate::direction::Direction;
use crate::dispatcher::Dispatcher;

/// Stands in for the riders: every third tick a random valid call is logged
/// and handed to the dispatcher, until shutdown.
pub fn main(
    settings: Settings,
    dispatcher: Dispatcher,
    event_tx: Sender<Event>,
    shutdown_rx: Receiver<()>,
) {
    let mut rng = rand::rng();
    let mut tick: u64 = 0;

    loop {
        select! {
            recv(shutdown_rx) -> _ => return,
            default(settings.between_user_actions_delay()) => (),
        }
        tick += 1;
        if tick % 3 != 0 {
            continue;
        }
        let call = random_call(&settings, &mut rng);
        let _ = event_tx.send(Event::Info(format!(
            "[User Action] Request: [{}] -> [{}] -> [{}]",
            call.floor,
            call.destination_floor,
            call.direction.as_str()
        )));
        dispatcher.handle_call(call);
    }
}

fn random_call<R: Rng>(settings: &Settings, rng: &mut R) -> Call {
    let floor = rng.random_range(settings.min_floor..=settings.max_floor);
    let direction = if floor == settings.min_floor {
        Direction::Up
    } else if floor == settings.max_floor {
        Direction::Down
    } else if rng.random_range(0..2) == 0 {
        Direction::Up
    } else {
        Direction::Down
    };
    let destination_floor = loop {
        let destination = rng.random_range(settings.min_floor..=settings.max_floor);
        if destination != floor {
            break destination;
        }
    };
    Call { floor, direction, destination_floor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn generated_calls_are_always_valid() {
        let settings = Settings { min_floor: 0, max_floor: 9, ..Settings::default() };
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let call = random_call(&settings, &mut rng);
            assert!(call.is_valid(&settings), "invalid call generated: {:?}", call);
        }
    }

    #[test]
    fn boundary_floors_force_the_only_possible_direction() {
        let settings = Settings { min_floor: 0, max_floor: 9, ..Settings::default() };
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let call = random_call(&settings, &mut rng);
            if call.floor == settings.min_floor {
                assert_eq!(call.direction, Direction::Up);
            }
            if call.floor == settings.max_floor {
                assert_eq!(call.direction, Direction::Down);
            }
        }
    }
}
