// src/model/queues.rs

use std::fmt::Display;

const INITIAL_CAPACITY: usize = 8;

/// FIFO ring over a growable slot buffer.
///
/// The head lives at `slots[head]` and the ring wraps modulo `slots.len()`.
/// Empty iff `len == 0`. Every slot inside the live window holds `Some`.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Puts `item` behind the current tail, i.e. last in line.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    /// Removes the head. An empty queue yields `None`.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        item
    }

    /// Walks the ring once, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.head + offset) % self.slots.len()].as_ref()
        })
    }

    // Doubles the buffer and unrolls the ring so the head lands at index 0.
    fn grow(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let mut slots: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        for offset in 0..self.len {
            let idx = (self.head + offset) % self.slots.len();
            slots.push(self.slots[idx].take());
        }
        slots.resize_with(new_capacity, || None);
        self.slots = slots;
        self.head = 0;
    }
}

impl<T: Display> CircularQueue<T> {
    /// Display strings of everything waiting, in FIFO order. Does not mutate.
    pub fn snapshot(&self) -> Vec<String> {
        self.iter().map(|item| item.to_string()).collect()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::customer::Customer;
    use proptest::prelude::*;

    #[test]
    fn new_queue_is_empty() {
        let mut q: CircularQueue<Customer> = CircularQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.dequeue().is_none());
        assert!(q.snapshot().is_empty());
    }

    #[test]
    fn enqueue_then_dequeue_restores_empty() {
        let mut q = CircularQueue::new();
        let c = Customer::new(1, 20);
        q.enqueue(c.clone());
        assert!(!q.is_empty());
        assert_eq!(q.dequeue(), Some(c));
        assert!(q.is_empty());
    }

    #[test]
    fn snapshot_lists_in_fifo_order() {
        let a = Customer::new(1, 15);
        let b = Customer::new(2, 22);
        let c = Customer::new(3, 30);
        let mut q = CircularQueue::new();
        q.enqueue(a.clone());
        q.enqueue(b.clone());
        q.enqueue(c.clone());

        let expected = vec![a.to_string(), b.to_string(), c.to_string()];
        assert_eq!(q.snapshot(), expected);
        // Snapshot is repeatable and leaves the queue alone
        assert_eq!(q.snapshot(), expected);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn wraps_around_and_grows() {
        let mut q = CircularQueue::with_capacity(2);
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        // Tail wraps to slot 0
        q.enqueue(3);
        // Full ring with head at slot 1 forces a re-pack
        q.enqueue(4);
        q.enqueue(5);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn requeued_head_moves_behind_others() {
        let mut q = CircularQueue::new();
        q.enqueue("a");
        q.enqueue("b");
        let head = q.dequeue().unwrap();
        q.enqueue(head);
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    proptest! {
        #[test]
        fn dequeue_order_matches_enqueue_order(items in prop::collection::vec(any::<u32>(), 0..200)) {
            let mut q = CircularQueue::with_capacity(1);
            for &item in &items {
                q.enqueue(item);
            }
            let mut out = Vec::new();
            while let Some(item) = q.dequeue() {
                out.push(item);
            }
            prop_assert_eq!(out, items);
            prop_assert!(q.is_empty());
        }

        #[test]
        fn emptiness_tracks_net_operations(ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut q = CircularQueue::with_capacity(3);
            let mut net = 0usize;
            for (i, push) in ops.into_iter().enumerate() {
                if push {
                    q.enqueue(i);
                    net += 1;
                } else if q.dequeue().is_some() {
                    net -= 1;
                }
                prop_assert_eq!(q.is_empty(), net == 0);
                prop_assert_eq!(q.len(), net);
            }
        }
    }
}
