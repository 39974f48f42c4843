use crate::solver::needs_reposition;

/// Read readiness of a descriptor, derived from its position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// At the start; the next read observes data from offset 0.
    Fresh,
    /// Somewhere in the middle; reads continue from the current offset.
    PartiallyConsumed,
    /// At or past the end; reads observe zero bytes until a rewind.
    Exhausted,
}

/// A byte-readable resource identified by a descriptor number.
///
/// Only the position bookkeeping is modelled, not the content. The position
/// may legally sit past `size` (a prior reader overshot); that is an exhausted
/// descriptor, not an invalid one.
#[derive(Debug, Clone)]
pub struct Descriptor {
    number: i64,
    position: u64,
    size: u64,
}

impl Descriptor {
    pub fn new(number: i64, position: u64, size: u64) -> Self {
        Self {
            number,
            position,
            size,
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Exhausted wins over Fresh for an empty resource: classification follows
    /// what the next read would observe.
    pub fn state(&self) -> ReadState {
        if needs_reposition(self.position, self.size) {
            ReadState::Exhausted
        } else if self.position == 0 {
            ReadState::Fresh
        } else {
            ReadState::PartiallyConsumed
        }
    }

    pub fn needs_reposition(&self) -> bool {
        needs_reposition(self.position, self.size)
    }

    /// How many bytes a read of `want` would observe from here. Zero means
    /// end-of-resource, never an error.
    pub fn readable(&self, want: u64) -> u64 {
        want.min(self.size.saturating_sub(self.position))
    }

    /// Account for a successful read of `n` bytes.
    pub fn advance(&mut self, n: u64) {
        self.position = self.position.saturating_add(n);
    }

    /// Reposition to the start. Recovers from `Exhausted`; no state is a dead
    /// end.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_walk_through_the_states() {
        let mut fd = Descriptor::new(0, 0, 9);
        assert_eq!(fd.state(), ReadState::Fresh);

        fd.advance(4);
        assert_eq!(fd.state(), ReadState::PartiallyConsumed);
        assert!(!fd.needs_reposition());

        fd.advance(5);
        assert_eq!(fd.state(), ReadState::Exhausted);
        assert!(fd.needs_reposition());
    }

    #[test]
    fn overshot_position_is_exhausted_not_invalid() {
        let fd = Descriptor::new(3, 10, 9);
        assert_eq!(fd.state(), ReadState::Exhausted);
        assert_eq!(fd.readable(1), 0);
    }

    #[test]
    fn empty_resource_is_exhausted() {
        let fd = Descriptor::new(0, 0, 0);
        assert_eq!(fd.state(), ReadState::Exhausted);
    }

    #[test]
    fn rewind_recovers_from_any_state() {
        let mut fd = Descriptor::new(0, 42, 9);
        fd.rewind();
        assert_eq!(fd.state(), ReadState::Fresh);
        assert_eq!(fd.readable(100), 9);

        fd.advance(1);
        fd.rewind();
        assert_eq!(fd.position(), 0);
    }

    #[test]
    fn readable_clamps_to_remaining_bytes() {
        let mut fd = Descriptor::new(0, 0, 9);
        assert_eq!(fd.readable(4), 4);
        assert_eq!(fd.readable(100), 9);

        fd.advance(7);
        assert_eq!(fd.readable(100), 2);

        // Reading at the end observes zero bytes, and a retry without a
        // rewind observes zero again.
        fd.advance(2);
        assert_eq!(fd.readable(1), 0);
        assert_eq!(fd.readable(1), 0);
    }
}
