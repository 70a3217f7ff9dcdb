use core::fmt;

use sortable::{
    DocumentScroll, DragItem, ElementHandle, Helper, MoveError, MoveEvent, PagePoint, PageScroll,
    PointerEvent, Position, SortableItem,
};

type ItemMoveEvent<I> = MoveEvent<I, <I as SortableItem>::Scope>;

/// A framework-neutral controller for one drag gesture.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `start` on pointer-down
/// - `on_move` on every pointer move, and `move_to` whenever the hovered drop slot changes
/// - `finish` on pointer-up, or `cancel` when the gesture is aborted
pub struct DragSession<I: SortableItem> {
    position: Position,
    drag: DragItem<I>,
}

impl<I: SortableItem> DragSession<I> {
    /// Starts a drag of `item`, whose rendered element is `target`.
    ///
    /// `pressed` is the element the pointer went down on (the row itself or something nested in
    /// it). Returns `None` if `pressed` opts out via `nodrag` / `data-nodrag`.
    pub fn start<W: PageScroll, D: DocumentScroll>(
        helper: &Helper<W, D>,
        event: &impl PointerEvent,
        pressed: &impl ElementHandle,
        target: &impl ElementHandle,
        item: I,
    ) -> Option<Self> {
        if helper.no_drag(pressed) {
            adebug!("DragSession::start: vetoed by nodrag");
            return None;
        }
        let position = helper.position_started(event, target);
        adebug!(
            x = position.start_x,
            y = position.start_y,
            index = item.index(),
            "DragSession::start"
        );
        Some(Self {
            position,
            drag: helper.drag_item(item),
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn drag_item(&self) -> &DragItem<I> {
        &self.drag
    }

    /// Records a pointer move and returns the page placement of the dragged element.
    pub fn on_move(&mut self, event: &impl PointerEvent) -> PagePoint {
        self.position.track(event)
    }

    /// Proposes a new drop slot. See [`DragItem::move_to`].
    pub fn move_to(&mut self, parent: I::Scope, index: usize) {
        self.drag.move_to(parent, index);
    }

    /// Whether dropping now would change anything.
    pub fn is_pending_move(&self) -> bool {
        self.drag.is_order_changed() || !self.drag.is_same_parent()
    }

    /// Ends the gesture, applying the move.
    ///
    /// Returns `Ok(None)` when the item would land exactly where it started.
    pub fn finish(self) -> Result<Option<ItemMoveEvent<I>>, MoveError> {
        if !self.is_pending_move() {
            adebug!("DragSession::finish: no-op");
            return Ok(None);
        }
        self.drag.apply().map(Some)
    }

    /// Ends the gesture without touching any container.
    ///
    /// Returns the last proposed move so observers can be told what was abandoned.
    pub fn cancel(self) -> ItemMoveEvent<I> {
        adebug!(index = self.drag.index(), "DragSession::cancel");
        self.drag.event_args()
    }
}

impl<I> fmt::Debug for DragSession<I>
where
    I: SortableItem + fmt::Debug,
    I::Scope: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSession")
            .field("position", &self.position)
            .field("drag", &self.drag)
            .finish()
    }
}
