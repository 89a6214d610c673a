use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::{SliceError, SliceResult};

/// A list-style slice descriptor: optional start, stop and step, each of
/// which may be negative to count from the end of the sequence. Matches
/// the semantics of a Python `slice` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Slice { start, stop, step }
    }

    /// The slice selecting the whole sequence.
    pub fn full() -> Self {
        Slice::default()
    }

    pub fn with_step(self, step: isize) -> Self {
        Slice {
            step: Some(step),
            ..self
        }
    }

    /// Resolves the descriptor against a sequence of length `len`.
    /// Out-of-range bounds clamp, negative bounds count from the end and
    /// omitted bounds default according to the step sign.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidSlice`] if the step is zero.
    pub fn resolve(self, len: usize) -> SliceResult<ResolvedSlice> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SliceError::InvalidSlice);
        }
        let len = len as isize;

        let start = match self.start {
            Some(start) => clamp_bound(start, len, step),
            None if step > 0 => 0,
            None => len - 1,
        };
        let stop = match self.stop {
            Some(stop) => clamp_bound(stop, len, step),
            None if step > 0 => len,
            None => -1,
        };

        let count = if step > 0 {
            if start < stop {
                (stop - start - 1) / step + 1
            } else {
                0
            }
        } else if stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        };

        Ok(ResolvedSlice {
            start,
            stop,
            step,
            count: count as usize,
        })
    }
}

/// Maps a possibly negative bound into `0..=len` (or `-1..=len - 1` for a
/// negative step) the way Python adjusts slice indices.
fn clamp_bound(bound: isize, len: isize, step: isize) -> isize {
    let bound = if bound < 0 { bound + len } else { bound };
    if bound < 0 {
        if step < 0 {
            -1
        } else {
            0
        }
    } else if bound >= len {
        if step < 0 {
            len - 1
        } else {
            len
        }
    } else {
        bound
    }
}

impl From<Range<isize>> for Slice {
    fn from(value: Range<isize>) -> Self {
        Slice::new(Some(value.start), Some(value.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(value: RangeFrom<isize>) -> Self {
        Slice::new(Some(value.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(value: RangeTo<isize>) -> Self {
        Slice::new(None, Some(value.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::full()
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(value: RangeInclusive<isize>) -> Self {
        // `start..=-1` reaches through the last element, which an
        // exclusive stop of 0 would not express.
        let stop = match *value.end() {
            -1 => None,
            end => Some(end + 1),
        };
        Slice::new(Some(*value.start()), stop, None)
    }
}

/// A [`Slice`] resolved against a concrete sequence length: concrete
/// bounds, a nonzero step and the number of selected positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlice {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    count: usize,
}

impl ResolvedSlice {
    /// Number of positions the slice selects.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The selected positions, in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        let start = self.start;
        let step = self.step;
        (0..self.count).map(move |i| (start + i as isize * step) as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Slice, SliceError};

    fn indices(slice: Slice, len: usize) -> Vec<usize> {
        slice.resolve(len).unwrap().indices().collect()
    }

    #[test]
    fn test_forward_slice() {
        assert_eq!(vec![1, 2, 3], indices(Slice::from(1..4), 5));
        assert_eq!(vec![0, 1, 2, 3, 4], indices(Slice::full(), 5));
    }

    #[test]
    fn test_stepped_slice() {
        assert_eq!(vec![0, 2, 4], indices(Slice::from(0..5).with_step(2), 5));
        assert_eq!(vec![1, 3], indices(Slice::from(1..5).with_step(2), 5));
    }

    #[test]
    fn test_negative_step() {
        assert_eq!(vec![4, 3, 2], indices(Slice::from(4..1).with_step(-1), 5));
        assert_eq!(
            vec![4, 3, 2, 1, 0],
            indices(Slice::full().with_step(-1), 5)
        );
        assert_eq!(vec![4, 2, 0], indices(Slice::full().with_step(-2), 5));
    }

    #[test]
    fn test_negative_bounds_count_from_end() {
        assert_eq!(vec![2, 3, 4], indices(Slice::from(-3..), 5));
        assert_eq!(vec![0, 1], indices(Slice::from(..-3), 5));
        assert_eq!(vec![3, 4], indices(Slice::from(-2..=-1), 5));
    }

    #[test]
    fn test_out_of_range_bounds_clamp() {
        assert_eq!(vec![0, 1, 2, 3, 4], indices(Slice::from(0..100), 5));
        assert_eq!(vec![0, 1, 2, 3, 4], indices(Slice::from(-100..100), 5));
        assert!(indices(Slice::from(7..9), 5).is_empty());
    }

    #[test]
    fn test_empty_selection() {
        assert!(indices(Slice::from(3..1), 5).is_empty());
        assert!(indices(Slice::from(1..3).with_step(-1), 5).is_empty());
        assert!(indices(Slice::full(), 0).is_empty());
    }

    #[test]
    fn test_zero_step_is_invalid() {
        assert!(matches!(
            Slice::full().with_step(0).resolve(5),
            Err(SliceError::InvalidSlice)
        ));
    }

    #[test]
    fn test_count_matches_indices() {
        for (slice, len) in [
            (Slice::from(1..4), 5),
            (Slice::full().with_step(-2), 7),
            (Slice::from(4..1).with_step(-1), 5),
            (Slice::from(0..0), 5),
        ] {
            let resolved = slice.resolve(len).unwrap();
            assert_eq!(resolved.count(), resolved.indices().count());
        }
    }
}
