use rand::Rng;

/// Source of the offset added to the in-stream floor percentage.
pub trait FloorOffset: Send + Sync {
    /// Return a value in `0..span`; `span == 0` must yield 0.
    fn offset(&self, span: u8) -> u8;
}

/// Uniform offset from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomFloorOffset;

impl FloorOffset for RandomFloorOffset {
    fn offset(&self, span: u8) -> u8 {
        if span == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..span)
    }
}

/// Pinned offset, wrapped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFloorOffset(pub u8);

impl FloorOffset for FixedFloorOffset {
    fn offset(&self, span: u8) -> u8 {
        if span == 0 {
            return 0;
        }
        self.0 % span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_offset_stays_in_span() {
        let source = RandomFloorOffset;
        for _ in 0..500 {
            assert!(source.offset(10) < 10);
        }
        assert_eq!(source.offset(0), 0);
    }

    #[test]
    fn fixed_offset_wraps() {
        assert_eq!(FixedFloorOffset(3).offset(10), 3);
        assert_eq!(FixedFloorOffset(12).offset(10), 2);
        assert_eq!(FixedFloorOffset(7).offset(0), 0);
    }
}
