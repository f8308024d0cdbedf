use super::TransitEdgeId;
use std::ops::Range;

/// the run-wide id sequence shared by the way splitter and the route stitcher.
/// it is passed around by `&mut`, so ids are always handed out sequentially.
#[derive(Debug, Default, Clone)]
pub struct SegmentIdGenerator {
    next: u64,
}

impl SegmentIdGenerator {
    pub fn new() -> SegmentIdGenerator {
        SegmentIdGenerator { next: 0 }
    }

    /// the value the next call will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_index(&mut self) -> u64 {
        let index = self.next;
        self.next += 1;
        index
    }

    pub fn next_transit_edge_id(&mut self) -> TransitEdgeId {
        TransitEdgeId(self.next_index())
    }

    /// reserves a contiguous block of `n` indices. used when the slices of many
    /// ways are computed in parallel: each way gets its block in way order, so
    /// the first segment of a way still holds the lowest index of that way.
    pub fn reserve(&mut self, n: usize) -> Range<u64> {
        let start = self.next;
        self.next += n as u64;
        start..self.next
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentIdGenerator;

    #[test]
    fn test_sequence_is_shared() {
        let mut ids = SegmentIdGenerator::new();
        let segments = ids.reserve(2);
        let t = ids.next_transit_edge_id();
        assert_eq!(segments, 0..2);
        assert_eq!(t.0, 2);
        assert_eq!(t.to_string(), "transit-2");
    }

    #[test]
    fn test_reserve() {
        let mut ids = SegmentIdGenerator::new();
        let _ = ids.next_index();
        let range = ids.reserve(3);
        assert_eq!(range, 1..4);
        assert_eq!(ids.peek(), 4);
        let empty = ids.reserve(0);
        assert!(empty.is_empty());
        assert_eq!(ids.next_index(), 4);
    }
}
