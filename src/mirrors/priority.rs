//! Mirror priority assignment.
//!
//! # Responsibilities
//! - Map the `--reverse` flag to an ordering
//! - Produce one `pri` value per mirror, in command-line order
//!
//! # Design Decisions
//! - Ascending: 1, 2, ..., n
//! - Descending: n, n-1, ..., 1 (the first mirror never gets n+1)
//! - No meaning is attached to the numbers beyond their order

/// Ordering of `pri` values across the configured mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityOrder {
    /// First mirror gets 1, each following mirror one more.
    #[default]
    Ascending,
    /// First mirror gets the mirror count, the last one gets 1.
    Descending,
}

impl PriorityOrder {
    /// Ordering selected by the `-r/--reverse` flag.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            PriorityOrder::Descending
        } else {
            PriorityOrder::Ascending
        }
    }

    /// Priorities for `count` mirrors, in mirror order.
    pub fn priorities(self, count: usize) -> Priorities {
        let next = match self {
            PriorityOrder::Ascending => 1,
            PriorityOrder::Descending => count,
        };
        Priorities {
            order: self,
            next,
            remaining: count,
        }
    }
}

/// Iterator over the `pri` values of a mirror list.
#[derive(Debug, Clone)]
pub struct Priorities {
    order: PriorityOrder,
    next: usize,
    remaining: usize,
}

impl Iterator for Priorities {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.next;
        match self.order {
            PriorityOrder::Ascending => self.next += 1,
            PriorityOrder::Descending => self.next -= 1,
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Priorities {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_priorities() {
        let pri: Vec<_> = PriorityOrder::Ascending.priorities(4).collect();
        assert_eq!(pri, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_descending_priorities() {
        let pri: Vec<_> = PriorityOrder::Descending.priorities(4).collect();
        assert_eq!(pri, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_descending_starts_at_count() {
        // Highest value handed out is the mirror count, never count + 1.
        let mut pri = PriorityOrder::Descending.priorities(3);
        assert_eq!(pri.next(), Some(3));
        assert_eq!(pri.len(), 2);
    }

    #[test]
    fn test_single_mirror() {
        assert_eq!(PriorityOrder::Ascending.priorities(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(PriorityOrder::Descending.priorities(1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(PriorityOrder::Descending.priorities(0).count(), 0);
    }

    #[test]
    fn test_from_reverse() {
        assert_eq!(PriorityOrder::from_reverse(false), PriorityOrder::Ascending);
        assert_eq!(PriorityOrder::from_reverse(true), PriorityOrder::Descending);
        assert_eq!(PriorityOrder::default(), PriorityOrder::Ascending);
    }
}
