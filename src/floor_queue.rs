use std::collections::BTreeSet;

use crate::direction::Direction;

/// Pending stops for one elevator, kept as two ordered sets: floors to serve
/// while travelling up and floors to serve while travelling down. Upward
/// stops are served lowest-first, downward stops highest-first.
#[derive(Debug, Clone, Default)]
pub struct FloorQueue {
    up: BTreeSet<i32>,
    down: BTreeSet<i32>,
}

impl FloorQueue {
    pub fn new() -> Self {
        FloorQueue::default()
    }

    /// Inserting a floor already present in the set is a no-op.
    pub fn insert(&mut self, floor: i32, direction: Direction) {
        match direction {
            Direction::Up => { self.up.insert(floor); },
            Direction::Down => { self.down.insert(floor); },
            Direction::Idle => (),
        }
    }

    pub fn remove(&mut self, floor: i32, direction: Direction) {
        match direction {
            Direction::Up => { self.up.remove(&floor); },
            Direction::Down => { self.down.remove(&floor); },
            Direction::Idle => (),
        }
    }

    pub fn next_up(&self) -> Option<i32> {
        self.up.iter().next().copied()
    }

    pub fn next_down(&self) -> Option<i32> {
        self.down.iter().next_back().copied()
    }

    pub fn has_up(&self) -> bool {
        !self.up.is_empty()
    }

    pub fn has_down(&self) -> bool {
        !self.down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_stops_come_out_lowest_first() {
        let mut queue = FloorQueue::new();
        queue.insert(7, Direction::Up);
        queue.insert(2, Direction::Up);
        queue.insert(5, Direction::Up);
        assert_eq!(queue.next_up(), Some(2));
    }

    #[test]
    fn down_stops_come_out_highest_first() {
        let mut queue = FloorQueue::new();
        queue.insert(1, Direction::Down);
        queue.insert(4, Direction::Down);
        queue.insert(3, Direction::Down);
        assert_eq!(queue.next_down(), Some(4));
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut queue = FloorQueue::new();
        queue.insert(3, Direction::Up);
        queue.insert(3, Direction::Up);
        queue.remove(3, Direction::Up);
        assert!(!queue.has_up());
    }

    #[test]
    fn sets_are_independent_per_direction() {
        let mut queue = FloorQueue::new();
        queue.insert(3, Direction::Up);
        queue.insert(3, Direction::Down);
        queue.remove(3, Direction::Up);
        assert!(!queue.has_up());
        assert!(queue.has_down());
    }

    #[test]
    fn idle_insert_is_ignored() {
        let mut queue = FloorQueue::new();
        queue.insert(3, Direction::Idle);
        assert!(!queue.has_up());
        assert!(!queue.has_down());
    }
}
