use std::fmt::{self, Debug, Display};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// Slot count used when none is given.
pub const DEFAULT_SLOTS: usize = 100;

/// A queue of `i32` with [`DEFAULT_SLOTS`] slots.
pub type IntQueue = CircularQueue<i32, DEFAULT_SLOTS>;

/// A first-in-first-out queue over a fixed array of `C` slots.
///
/// `front` is the slot right before the oldest element and never holds a value,
/// which leaves room for at most `C - 1` elements.
/// ```
/// let mut queue = ringq::CircularQueue::<_, 4>::new();
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
///
/// assert_eq!(*queue.peek().unwrap(), 1);
/// assert_eq!(queue.dequeue().unwrap(), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct CircularQueue<T, const C: usize = DEFAULT_SLOTS> {
    slots: [Option<T>; C],
    front: usize,
    rear: usize,
}

impl<T, const C: usize> CircularQueue<T, C> {
    // One slot is always vacant, so a single slot would be both empty and full.
    const AT_LEAST_TWO_SLOTS: () = assert!(C >= 2, "a circular queue needs at least two slots");

    /// Create an empty queue.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::AT_LEAST_TWO_SLOTS;

        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            rear: 0,
        }
    }

    fn advance(index: usize) -> usize {
        (index + 1) % C
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Returns `true` if the next enqueue would be rejected.
    pub fn is_full(&self) -> bool {
        self.front == Self::advance(self.rear)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        (self.rear + C - self.front) % C
    }

    /// Maximum number of elements the queue can hold (`C - 1`)
    pub fn capacity(&self) -> usize {
        C - 1
    }

    /// Size of the backing array (`C`)
    pub fn slots(&self) -> usize {
        C
    }

    /// The raw `(front, rear)` indices.
    pub fn indices(&self) -> (usize, usize) {
        (self.front, self.rear)
    }

    /// Append `value` at the rear and return a reference to the stored value.
    ///
    /// Returns `Error::CapacityExceeded` and leaves the queue untouched if it is full,
    /// dropping `value`.
    pub fn enqueue(&mut self, value: T) -> Result<&T> {
        if self.is_full() {
            debug!("enqueue rejected, queue is full (front: {}, rear: {})", self.front, self.rear);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.rear = Self::advance(self.rear);
        trace!("enqueued (front: {}, rear: {})", self.front, self.rear);
        Ok(&*self.slots[self.rear].insert(value))
    }

    /// The oldest element, without removing it.
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            debug!("peek on empty queue (front: {}, rear: {})", self.front, self.rear);
            return Err(Error::EmptyQueue);
        }

        self.slots[Self::advance(self.front)]
            .as_ref()
            .ok_or(Error::EmptyQueue)
    }

    /// Remove and return the oldest element.
    ///
    /// The vacated slot becomes the new `front` and is left empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.peek()?;

        let head = Self::advance(self.front);
        let value = self.slots[head].take().ok_or(Error::EmptyQueue)?;
        self.front = head;
        trace!("dequeued (front: {}, rear: {})", self.front, self.rear);
        Ok(value)
    }

    /// Drop every element and reset both indices to zero.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.rear = 0;
    }

    /// Iterate over the live elements from front to rear.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            queue: self,
            index: self.front,
            remaining: self.len(),
        }
    }
}

impl<T: Clone, const C: usize> CircularQueue<T, C> {
    /// Copy the indices and live elements out of the queue.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            slots: C,
            front: self.front,
            rear: self.rear,
            items: self.iter().cloned().collect(),
        }
    }
}

impl<T, const C: usize> Default for CircularQueue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, const C: usize> Debug for CircularQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("items", &self.iter().collect::<Vec<_>>())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish()
    }
}

impl<T: Display, const C: usize> Display for CircularQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<- [front]  ")?;
        for value in self {
            write!(f, "  [{value}]  ")?;
        }
        write!(f, "  <- rear")
    }
}

/// Front-to-rear iterator returned by [`CircularQueue::iter`]
#[derive(Debug)]
pub struct Iter<'a, T, const C: usize> {
    queue: &'a CircularQueue<T, C>,
    index: usize,
    remaining: usize,
}

impl<'a, T, const C: usize> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.index = CircularQueue::<T, C>::advance(self.index);
        self.queue.slots[self.index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const C: usize> ExactSizeIterator for Iter<'_, T, C> {}

impl<'a, T, const C: usize> IntoIterator for &'a CircularQueue<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new() {
        let queue = CircularQueue::<u8, 3>::new();
        assert_eq!(queue.indices(), (0, 0));
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.capacity(), 2);
        assert_eq!(queue.slots(), 3);
    }

    #[test]
    fn enqueue_advances_rear() {
        let mut queue = CircularQueue::<_, 5>::new();
        assert_eq!(*queue.enqueue(10).unwrap(), 10);
        queue.enqueue(15).unwrap();
        queue.enqueue(12).unwrap();

        assert_eq!(queue.indices(), (0, 3));
        assert!(queue.slots[0].is_none());
        assert_eq!(queue.slots[1], Some(10));
        assert_eq!(queue.slots[3], Some(12));
    }

    #[test]
    fn dequeue_clears_vacated_slot() {
        let mut queue = CircularQueue::<_, 5>::new();
        queue.enqueue(10).unwrap();
        queue.enqueue(15).unwrap();

        assert_eq!(queue.dequeue().unwrap(), 10);
        assert_eq!(queue.indices(), (1, 2));
        assert!(queue.slots[1].is_none());
    }

    #[test]
    fn rear_wraps() {
        let mut queue = CircularQueue::<_, 3>::new();
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        queue.dequeue().unwrap();
        queue.enqueue('c').unwrap();

        assert_eq!(queue.indices(), (1, 0));
        assert_eq!(queue.len(), 2);
        assert!(queue.is_full());
    }

    #[test]
    fn full_enqueue_leaves_state() {
        let mut queue = CircularQueue::<_, 2>::new();
        queue.enqueue(1).unwrap();

        let err = queue.enqueue(2).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { capacity: 1 }));
        assert_eq!(queue.indices(), (0, 1));
        assert_eq!(*queue.peek().unwrap(), 1);
    }

    #[test]
    fn clear() {
        let mut queue = CircularQueue::<_, 4>::new();
        queue.enqueue(String::from("a")).unwrap();
        queue.enqueue(String::from("b")).unwrap();
        queue.dequeue().unwrap();

        queue.clear();

        assert_eq!(queue.indices(), (0, 0));
        assert!(queue.slots.iter().all(Option::is_none));
        assert!(matches!(queue.dequeue(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn iter_wraps() {
        let mut queue = CircularQueue::<_, 4>::new();
        for value in 0..3 {
            queue.enqueue(value).unwrap();
        }
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();

        let iter = queue.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn display() {
        let mut queue = CircularQueue::<_, 5>::new();
        assert_eq!(queue.to_string(), "<- [front]    <- rear");

        queue.enqueue(10).unwrap();
        queue.enqueue(15).unwrap();
        assert_eq!(queue.to_string(), "<- [front]    [10]    [15]    <- rear");
    }

    #[test]
    fn debug() {
        let mut queue = CircularQueue::<_, 3>::new();
        queue.enqueue(7).unwrap();
        assert_eq!(
            format!("{queue:?}"),
            "CircularQueue { items: [7], front: 0, rear: 1 }"
        );
    }

    #[test]
    fn snapshot() {
        let mut queue = CircularQueue::<_, 4>::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.dequeue().unwrap();

        let snapshot = queue.snapshot();
        assert_eq!(snapshot.slots, 4);
        assert_eq!((snapshot.front, snapshot.rear), (1, 2));
        assert_eq!(snapshot.items, vec![2]);
    }
}
