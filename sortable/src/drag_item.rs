use core::fmt;

use crate::MoveError;

/// A sortable container: one drop zone that accepts insertion and removal at any index.
///
/// Methods take `&self` because the source and destination of a move may be the same container;
/// implementations are expected to be cheap shared handles (see `sortable_adapter::ListScope`).
pub trait SortableScope {
    /// A stable identity token. Two scope handles are the same container iff their elements are
    /// equal, regardless of whether the handles themselves are the same object.
    type Element: PartialEq;
    type Value;

    fn element(&self) -> Self::Element;

    fn remove_item(&self, index: usize) -> Result<Self::Value, MoveError>;

    /// Inserts at `index`; `index == len` appends.
    fn insert_item(&self, index: usize, value: Self::Value) -> Result<(), MoveError>;
}

/// A handle to one item inside a sortable container.
pub trait SortableItem: Clone {
    type Scope: SortableScope + Clone;

    fn index(&self) -> usize;

    fn sortable_scope(&self) -> Self::Scope;

    /// The data value that is re-inserted at the destination.
    fn model_value(&self) -> <Self::Scope as SortableScope>::Value;
}

/// Where a drag started. Never changes after the descriptor is built.
#[derive(Clone, Debug)]
pub struct SourceInfo<I, S> {
    pub index: usize,
    pub item_scope: I,
    pub sortable_scope: S,
}

#[derive(Clone, Debug)]
pub struct Dest<S> {
    pub index: usize,
    pub sortable_scope: S,
}

/// The payload handed to observers of a proposed or completed move.
#[derive(Clone, Debug)]
pub struct MoveEvent<I, S> {
    pub source: SourceInfo<I, S>,
    pub dest: Dest<S>,
}

/// Tracks a single drag: the immutable source and the current candidate destination.
///
/// The descriptor is "proposed" until [`DragItem::apply`] consumes it. A cancelled drag is simply
/// dropped.
pub struct DragItem<I: SortableItem> {
    index: usize,
    parent: I::Scope,
    source: I,
    source_info: SourceInfo<I, I::Scope>,
}

impl<I: SortableItem> DragItem<I> {
    /// Snapshots `item`'s position. The candidate destination starts at the source (a no-op move).
    pub fn new(item: I) -> Self {
        let index = item.index();
        let sortable_scope = item.sortable_scope();
        sdebug!(index, "DragItem::new");
        Self {
            index,
            parent: sortable_scope.clone(),
            source_info: SourceInfo {
                index,
                item_scope: item.clone(),
                sortable_scope,
            },
            source: item,
        }
    }

    /// Candidate destination index (already adjusted for same-parent moves).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Candidate destination container.
    pub fn parent(&self) -> &I::Scope {
        &self.parent
    }

    pub fn source(&self) -> &I {
        &self.source
    }

    pub fn source_info(&self) -> &SourceInfo<I, I::Scope> {
        &self.source_info
    }

    /// Proposes `index` inside `parent` as the drop target.
    ///
    /// `index` is expressed against the container as currently rendered, source item included.
    /// When the target is the source container and lies after the source, the stored index is
    /// one less: [`DragItem::apply`] removes the source first, shifting later items down.
    pub fn move_to(&mut self, parent: I::Scope, mut index: usize) {
        self.parent = parent;
        if self.is_same_parent() && index > self.source_info.index {
            index -= 1;
        }
        strace!(
            index,
            same_parent = self.is_same_parent(),
            "DragItem::move_to"
        );
        self.index = index;
    }

    pub fn is_same_parent(&self) -> bool {
        self.parent.element() == self.source_info.sortable_scope.element()
    }

    pub fn is_order_changed(&self) -> bool {
        self.index != self.source_info.index
    }

    pub fn event_args(&self) -> MoveEvent<I, I::Scope> {
        MoveEvent {
            source: self.source_info.clone(),
            dest: Dest {
                index: self.index,
                sortable_scope: self.parent.clone(),
            },
        }
    }

    /// Removes the item from the source container, then inserts its model value into the
    /// candidate container.
    ///
    /// The inserted value is the source item's [`SortableItem::model_value`], not whatever the
    /// source container handed back from the removal; on success the removed value is dropped.
    ///
    /// Consumes the descriptor, so a move can be applied at most once. If the insert fails, the
    /// removed value is put back at its original index and the insert error is returned.
    pub fn apply(self) -> Result<MoveEvent<I, I::Scope>, MoveError> {
        let from = self.source_info.index;
        // Kept only for rollback; the destination receives the item's model value.
        let removed = self.source_info.sortable_scope.remove_item(from)?;

        if let Err(err) = self.parent.insert_item(self.index, self.source.model_value()) {
            swarn!(from, to = self.index, %err, "DragItem::apply: insert failed, rolling back");
            if let Err(_rollback) = self.source_info.sortable_scope.insert_item(from, removed) {
                swarn!(from, %_rollback, "DragItem::apply: rollback failed");
            }
            return Err(err);
        }

        sdebug!(
            from,
            to = self.index,
            same_parent = self.is_same_parent(),
            "DragItem::apply"
        );
        Ok(MoveEvent {
            source: self.source_info,
            dest: Dest {
                index: self.index,
                sortable_scope: self.parent,
            },
        })
    }
}

impl<I> fmt::Debug for DragItem<I>
where
    I: SortableItem + fmt::Debug,
    I::Scope: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragItem")
            .field("index", &self.index)
            .field("parent", &self.parent)
            .field("source", &self.source)
            .field("source_info", &self.source_info)
            .finish()
    }
}
