//! Integration tests for the public API.
//!
//! These walk through complete usage scenarios on value and handle sequences,
//! the way an embedding program would use them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use querylist_core::{ByRef, Extends, Handle, RefSequence, Sequence, SequenceError};

#[test]
fn test_integer_scenario() {
    let mut numbers = Sequence::<i32>::from([5, 3, 8, 1]);

    assert_eq!(numbers.sum(), 17);
    assert_eq!(numbers.count(|n| *n > 3), 2);
    assert_eq!(*numbers.first_or_default_where(|n| *n > 10), 0);

    let big = numbers.filter(|n| *n > 3);
    let big: Vec<i32> = big.iter().copied().collect();
    assert_eq!(big, vec![5, 8]);

    numbers.order_by(|n| *n);
    assert_eq!(numbers.as_slice(), &[1, 3, 5, 8]);
}

#[test]
fn test_empty_scenario() {
    let empty = Sequence::<i32>::new();

    assert_eq!(empty.sum(), 0);
    assert!(!empty.any());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.min(|n| f64::from(*n)), f64::MAX);
}

#[test]
fn test_null_handle_scenario() {
    let seven = 7;
    let handles: RefSequence<Option<&i32>> = Sequence::from([None, Some(&seven)]);

    assert_eq!(*handles.first_or_default(), 7);
    assert_eq!(handles.len(), 2);
    assert_eq!(handles.count(|_| true), 1);
    assert_eq!(handles.try_get(0), Err(SequenceError::NullHandle { index: 0 }));
}

#[test]
fn test_clear_is_idempotent() {
    let mut numbers = Sequence::<i32>::from([1, 2, 3]);
    numbers.clear();
    numbers.clear();
    assert_eq!(numbers.len(), 0);
    assert!(!numbers.any());
}

#[derive(Debug, Clone, PartialEq)]
struct Ticket {
    id: u32,
    priority: u8,
    open: bool,
}

fn tickets() -> Vec<Ticket> {
    vec![
        Ticket { id: 100, priority: 2, open: true },
        Ticket { id: 101, priority: 5, open: false },
        Ticket { id: 102, priority: 1, open: true },
        Ticket { id: 103, priority: 4, open: true },
    ]
}

#[test]
fn test_work_queue_with_shared_handles() {
    let queue: RefSequence<Rc<Ticket>> = tickets().into_iter().map(Rc::new).collect();

    // Filtering clones the `Rc`s, not the tickets.
    let mut open = queue.filter(|ticket| ticket.open);
    assert_eq!(open.len(), 3);
    assert!(Rc::ptr_eq(&open.as_slice()[0], &queue.as_slice()[0]));

    open.order_by_descending(|ticket| ticket.priority);
    assert_eq!(open.select(|ticket| ticket.id), Sequence::from([103, 100, 102]));

    assert_eq!(open.erase_if(|ticket| ticket.priority < 2), 1);
    assert!(open.all(|ticket| ticket.priority >= 2));
    assert_eq!(Rc::strong_count(&queue.as_slice()[2]), 1);
}

#[test]
fn test_handles_across_threads() {
    let shared: RefSequence<Arc<Ticket>> = tickets().into_iter().map(Arc::new).collect();
    let worker = std::thread::spawn(move || shared.count(|ticket| ticket.open));
    assert_eq!(worker.join().unwrap(), 3);
}

#[test]
fn test_value_sequence_in_place_updates() {
    let mut board = Sequence::<Ticket>::from_slice(&tickets());

    for index in 0..board.len() {
        let ticket = board.at_mut(index);
        ticket.priority = ticket.priority.saturating_sub(1);
    }
    assert_eq!(board.select(|ticket| ticket.priority), Sequence::from([1, 4, 0, 3]));

    assert!(board.erase_at(1));
    assert_eq!(board.first_where(|ticket| !ticket.open), None);
    assert_eq!(board.min(|ticket| f64::from(ticket.priority)), 0.0);
}

/// A handle whose target lives in a registry, resolved on demand.
struct Slot<'a> {
    registry: &'a [Option<String>],
    index: usize,
}

impl Handle for Slot<'_> {
    type Target = String;

    fn get(&self) -> Option<&String> {
        self.registry.get(self.index)?.as_ref()
    }
}

#[test]
fn test_custom_handle_type() {
    let registry = vec![Some(String::from("alpha")), None, Some(String::from("gamma"))];
    let slots: Sequence<Slot<'_>, ByRef> = (0..4)
        .map(|index| Slot {
            registry: &registry,
            index,
        })
        .collect();

    assert_eq!(slots.len(), 4);
    assert_eq!(slots.count(|_| true), 2);
    assert_eq!(slots.first_where(|name| name.starts_with('g')).map(String::as_str), Some("gamma"));
    assert_eq!(slots.get_or_default(1), "");
    assert_eq!(slots.to_values(), Sequence::from([String::from("alpha"), String::from("gamma")]));
}

#[test]
fn test_filter_results_observe_later_writes_through_cells() {
    let cells: Sequence<RefCell<i32>> = (1..=4).map(RefCell::new).collect();
    let evens = cells.filter(|cell| *cell.borrow() % 2 == 0);

    for cell in &evens {
        *cell.borrow_mut() *= 10;
    }
    assert_eq!(cells.select(|cell| *cell.borrow()), Sequence::from([1, 20, 3, 40]));
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Header {
    kind: u16,
    len: u16,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Packet {
    header: Header,
    checksum: u32,
}

unsafe impl Extends<Header> for Packet {}

#[test]
fn test_base_prefix_adapter() {
    let headers = [Header { kind: 1, len: 8 }, Header { kind: 2, len: 16 }];
    let packets = unsafe { Sequence::<Packet>::from_base_prefix(&headers) };

    assert_eq!(packets.select(|packet| packet.header), Sequence::from(headers));
    assert!(packets.all(|packet| packet.checksum == 0));
}
