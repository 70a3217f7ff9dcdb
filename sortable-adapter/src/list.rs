use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use sortable::{MoveError, SortableItem, SortableScope};

// Pointer-sized so the counter exists on targets without 64-bit atomics.
static NEXT_CONTAINER_ID: AtomicUsize = AtomicUsize::new(1);

/// A stable container identity token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

impl ContainerId {
    /// A fresh id, unique within the process.
    pub fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed) as u64)
    }
}

/// A `Vec`-backed sortable container.
///
/// Cloning yields another handle to the same storage and id. The caller re-renders after a move
/// is applied; nothing here is reactive.
pub struct ListScope<T> {
    id: ContainerId,
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> ListScope<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_id(ContainerId::next(), items)
    }

    /// Wraps `items` under an explicit identity, e.g. one restored from the host's own keys.
    pub fn with_id(id: ContainerId, items: Vec<T>) -> Self {
        Self {
            id,
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Runs `f` with read access to the items.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }
}

impl<T: Clone> ListScope<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// A handle to the item currently at `index`.
    pub fn item(&self, index: usize) -> Option<ListItem<T>> {
        let value = self.items.borrow().get(index)?.clone();
        Some(ListItem {
            scope: self.clone(),
            index,
            value,
        })
    }
}

impl<T> Clone for ListScope<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListScope");
        s.field("id", &self.id);
        match self.items.try_borrow() {
            Ok(items) => s.field("items", &*items),
            Err(_) => s.field("items", &"<borrowed>"),
        };
        s.finish()
    }
}

impl<T> SortableScope for ListScope<T> {
    type Element = ContainerId;
    type Value = T;

    fn element(&self) -> ContainerId {
        self.id
    }

    fn remove_item(&self, index: usize) -> Result<T, MoveError> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| MoveError::ContainerBusy)?;
        if index >= items.len() {
            awarn!(index, len = items.len(), "ListScope::remove_item: out of bounds");
            return Err(MoveError::IndexOutOfBounds {
                index,
                len: items.len(),
            });
        }
        atrace!(id = self.id.0, index, "ListScope::remove_item");
        Ok(items.remove(index))
    }

    fn insert_item(&self, index: usize, value: T) -> Result<(), MoveError> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| MoveError::ContainerBusy)?;
        if index > items.len() {
            awarn!(index, len = items.len(), "ListScope::insert_item: out of bounds");
            return Err(MoveError::IndexOutOfBounds {
                index,
                len: items.len(),
            });
        }
        atrace!(id = self.id.0, index, "ListScope::insert_item");
        items.insert(index, value);
        Ok(())
    }
}

/// A handle to one item of a [`ListScope`], captured at the moment it was taken.
#[derive(Clone)]
pub struct ListItem<T> {
    scope: ListScope<T>,
    index: usize,
    value: T,
}

impl<T> ListItem<T> {
    pub fn scope(&self) -> &ListScope<T> {
        &self.scope
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for ListItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListItem")
            .field("scope", &self.scope.id)
            .field("index", &self.index)
            .field("value", &self.value)
            .finish()
    }
}

impl<T: Clone> SortableItem for ListItem<T> {
    type Scope = ListScope<T>;

    fn index(&self) -> usize {
        self.index
    }

    fn sortable_scope(&self) -> ListScope<T> {
        self.scope.clone()
    }

    fn model_value(&self) -> T {
        self.value.clone()
    }
}
