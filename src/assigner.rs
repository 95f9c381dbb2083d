use crate::call::Call;
use crate::direction::Direction;

/// Read-only view of one elevator taken at assignment time.
#[derive(Debug, Clone, Copy)]
pub struct ElevatorSnapshot {
    pub id: usize,
    pub floor: i32,
    pub direction: Direction,
}

/// Pick the elevator to serve `call`, or `None` if no elevator can take it
/// right now.
///
/// An elevator already moving in the call's direction and able to serve the
/// origin on its way past wins over an idle one; among those, the closest to
/// the origin wins. With no such elevator, the closest idle one is chosen.
/// Ties keep fleet order (`min_by_key` returns the first minimum).
pub fn assign(call: &Call, elevators: &[ElevatorSnapshot]) -> Option<usize> {
    let moving = match call.direction {
        Direction::Up => elevators
            .iter()
            .filter(|e| e.direction == Direction::Up && e.floor <= call.floor)
            .min_by_key(|e| call.floor - e.floor),
        Direction::Down => elevators
            .iter()
            .filter(|e| e.direction == Direction::Down && e.floor >= call.floor)
            .min_by_key(|e| e.floor - call.floor),
        Direction::Idle => None,
    };

    moving
        .or_else(|| {
            elevators
                .iter()
                .filter(|e| e.direction == Direction::Idle)
                .min_by_key(|e| (call.floor - e.floor).abs())
        })
        .map(|e| e.id)
}
