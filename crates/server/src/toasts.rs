use crate::types::{SequencedNotice, ToastCursor};

/// Ring buffer of transient notices. Pushing never blocks; readers that fall
/// more than `capacity` notices behind skip the ones that were overwritten.
pub struct ToastBuffer<T> {
    buffer: Vec<Option<SequencedNotice<T>>>,
    capacity: usize,
    next_sequence: u64,
}

impl<T: Clone> ToastBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            capacity,
            next_sequence: 0,
        }
    }

    /// Push a notice and return its sequence number.
    pub fn push(&mut self, notice: T) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let index = (sequence as usize) % self.capacity;
        self.buffer[index] = Some(SequencedNotice { sequence, notice });
        sequence
    }

    /// Notices from `cursor` onwards, and the cursor to pass next time.
    pub fn get_from_cursor(&self, cursor: ToastCursor) -> (Vec<SequencedNotice<T>>, ToastCursor) {
        let oldest_available = self.next_sequence.saturating_sub(self.capacity as u64);
        let start = cursor.0.max(oldest_available);

        let notices = (start..self.next_sequence)
            .filter_map(|seq| {
                self.buffer[(seq as usize) % self.capacity]
                    .as_ref()
                    .filter(|n| n.sequence == seq)
                    .cloned()
            })
            .collect();

        (notices, ToastCursor(self.next_sequence))
    }

    pub fn current_sequence(&self) -> u64 {
        self.next_sequence
    }
}
