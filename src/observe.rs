//! Observable append-only containers.
//!
//! Every mesh container on a grid ([`points`], [`triangles`], [`bases`],
//! [`quads`], [`neighbours`]) is an [`ObservableVec`]: an ordered, append-only
//! sequence that notifies subscribers of every appended batch. Notification
//! happens *before* the batch becomes visible through the read surface, so an
//! observer must treat its payload as the only view of the new items and not
//! assume they are already queryable elsewhere.
//!
//! Items are never removed or renumbered, which is what makes the index-based
//! mesh topology stable. In-place edits of existing items (the relaxation
//! passes move point coordinates this way) do not notify; only growth does.
//!
//! [`points`]: crate::Grid::points
//! [`triangles`]: crate::Grid::triangles
//! [`bases`]: crate::Grid::bases
//! [`quads`]: crate::Grid::quads
//! [`neighbours`]: crate::Grid::neighbours

use std::fmt;
use std::ops::Deref;

pub(crate) type BoxedObserver<T> = Box<dyn FnMut(&[T]) + 'static>;

/// Identifies a subscription on an [`ObservableVec`], for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An append-only sequence that notifies observers on growth.
///
/// Dereferences to `&[T]` for reading; mutation is reserved to the crate.
pub struct ObservableVec<T> {
    items: Vec<T>,
    observers: Vec<(SubscriptionId, BoxedObserver<T>)>,
    next_id: u64,
}

impl<T> ObservableVec<T> {
    pub(crate) fn new() -> Self {
        ObservableVec {
            items: Vec::new(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer called with every subsequently appended batch.
    ///
    /// Subscriptions persist for the container's lifetime unless removed with
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, observer: impl FnMut(&[T]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if the subscription was not found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Append one item, notifying observers with a batch of one.
    pub(crate) fn push(&mut self, item: T) {
        let batch = std::slice::from_ref(&item);
        for (_, observer) in &mut self.observers {
            observer(batch);
        }
        self.items.push(item);
    }

    /// Append a batch of items, notifying observers once with the whole batch.
    pub(crate) fn append(&mut self, items: Vec<T>) {
        for (_, observer) in &mut self.observers {
            observer(&items);
        }
        self.items.extend(items);
    }

    /// Mutable access to an existing item. Does not notify.
    pub(crate) fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Deref for ObservableVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_push_notifies_with_single_item_batch() {
        let seen: Rc<RefCell<Vec<Vec<u32>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut vec = ObservableVec::new();
        vec.subscribe(move |batch: &[u32]| sink.borrow_mut().push(batch.to_vec()));

        vec.push(10);
        vec.push(20);

        assert_eq!(*seen.borrow(), vec![vec![10], vec![20]]);
        assert_eq!(&*vec, &[10, 20]);
    }

    #[test]
    fn test_append_notifies_once_per_batch() {
        let batches: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&batches);

        let mut vec = ObservableVec::new();
        vec.subscribe(move |batch: &[u32]| sink.borrow_mut().push(batch.len()));

        vec.append(vec![1, 2, 3]);
        vec.append(vec![4]);

        assert_eq!(*batches.borrow(), vec![3, 1]);
        assert_eq!(vec.len(), 4);
    }

    #[test]
    fn test_subscribe_after_growth_sees_only_new_items() {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut vec = ObservableVec::new();
        vec.push(1);
        vec.subscribe(move |batch: &[u32]| sink.borrow_mut().extend_from_slice(batch));
        vec.push(2);

        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut vec = ObservableVec::new();
        let id = vec.subscribe(move |_: &[u32]| *sink.borrow_mut() += 1);

        vec.push(1);
        assert!(vec.unsubscribe(id));
        vec.push(2);

        assert_eq!(*count.borrow(), 1);
        assert!(!vec.unsubscribe(id), "double unsubscribe should be a no-op");
    }

    #[test]
    fn test_multiple_observers_all_notified() {
        let a = Rc::new(RefCell::new(0usize));
        let b = Rc::new(RefCell::new(0usize));
        let sink_a = Rc::clone(&a);
        let sink_b = Rc::clone(&b);

        let mut vec = ObservableVec::new();
        vec.subscribe(move |batch: &[u32]| *sink_a.borrow_mut() += batch.len());
        vec.subscribe(move |batch: &[u32]| *sink_b.borrow_mut() += batch.len());

        vec.append(vec![1, 2]);

        assert_eq!(*a.borrow(), 2);
        assert_eq!(*b.borrow(), 2);
    }

    #[test]
    fn test_in_place_edit_does_not_notify() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut vec = ObservableVec::new();
        vec.push(5u32);
        vec.subscribe(move |_: &[u32]| *sink.borrow_mut() += 1);

        *vec.get_mut(0) = 99;

        assert_eq!(*count.borrow(), 0);
        assert_eq!(vec[0], 99);
    }
}
