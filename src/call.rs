use crate::config::Settings;
use crate::direction::Direction;

/// An external request for service: pick up at `floor`, drop off at
/// `destination_floor`, rider heading `direction`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
pub struct Call {
    pub floor: i32,
    pub direction: Direction,
    pub destination_floor: i32,
}

impl Call {
    pub fn is_valid(&self, settings: &Settings) -> bool {
        self.direction != Direction::Idle
            && self.floor != self.destination_floor
            && is_valid_floor(self.floor, settings)
            && is_valid_floor(self.destination_floor, settings)
    }
}

fn is_valid_floor(floor: i32, settings: &Settings) -> bool {
    floor >= settings.min_floor && floor <= settings.max_floor
}

/// One stop for one elevator, tagged with the travel direction the car will
/// be moving when it reaches the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub floor: i32,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings { min_floor: 1, max_floor: 10, ..Settings::default() }
    }

    #[test]
    fn call_within_range_is_valid() {
        let call = Call { floor: 1, direction: Direction::Up, destination_floor: 2 };
        assert!(call.is_valid(&settings()));
    }

    #[test]
    fn call_without_direction_is_invalid() {
        let call = Call { floor: 1, direction: Direction::Idle, destination_floor: 2 };
        assert!(!call.is_valid(&settings()));
    }

    #[test]
    fn call_to_same_floor_is_invalid() {
        let call = Call { floor: 5, direction: Direction::Up, destination_floor: 5 };
        assert!(!call.is_valid(&settings()));
    }

    #[test]
    fn call_from_below_range_is_invalid() {
        let call = Call { floor: 0, direction: Direction::Up, destination_floor: 2 };
        assert!(!call.is_valid(&settings()));
    }

    #[test]
    fn call_to_above_range_is_invalid() {
        let call = Call { floor: 3, direction: Direction::Up, destination_floor: 11 };
        assert!(!call.is_valid(&settings()));
    }
}
