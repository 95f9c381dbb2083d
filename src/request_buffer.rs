use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

use crate::call::Call;

/// FIFO buffer between call producers and the dispatcher. Enqueueing never
/// blocks and never drops; dequeueing never blocks. Clones share the same
/// underlying queue, so any number of producer threads can feed the single
/// dispatcher consumer.
#[derive(Clone)]
pub struct RequestBuffer {
    tx: Sender<Call>,
    rx: Receiver<Call>,
}

impl RequestBuffer {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        RequestBuffer { tx, rx }
    }

    pub fn enqueue(&self, call: Call) {
        // Receiver half lives as long as self, so the send cannot fail.
        let _ = self.tx.send(call);
    }

    pub fn try_dequeue(&self) -> Option<Call> {
        match self.rx.try_recv() {
            Ok(call) => Some(call),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn dequeue_preserves_arrival_order() {
        let buffer = RequestBuffer::new();
        for floor in [4, 1, 7] {
            buffer.enqueue(Call { floor, direction: Direction::Up, destination_floor: 9 });
        }
        assert_eq!(buffer.try_dequeue().map(|c| c.floor), Some(4));
        assert_eq!(buffer.try_dequeue().map(|c| c.floor), Some(1));
        assert_eq!(buffer.try_dequeue().map(|c| c.floor), Some(7));
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let buffer = RequestBuffer::new();
        assert!(buffer.try_dequeue().is_none());
    }

    #[test]
    fn clones_share_the_queue() {
        let buffer = RequestBuffer::new();
        let producer = buffer.clone();
        producer.enqueue(Call { floor: 2, direction: Direction::Down, destination_floor: 0 });
        assert_eq!(buffer.try_dequeue().map(|c| c.floor), Some(2));
    }
}
