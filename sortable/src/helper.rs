use crate::{
    DocumentScroll, DragItem, ElementHandle, OffsetBox, PageScroll, PointerEvent, Position,
    SortableItem,
};

/// Geometry and drag-state helpers.
///
/// The window and document scroll sources are injected here rather than read from globals, so
/// the helper runs the same against a browser, a test fixture or a non-DOM host.
#[derive(Clone, Debug)]
pub struct Helper<W, D> {
    window: W,
    document: D,
}

impl<W: PageScroll, D: DocumentScroll> Helper<W, D> {
    pub fn new(window: W, document: D) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Scroll height of an element.
    pub fn height(&self, element: &impl ElementHandle) -> f64 {
        element.scroll_height()
    }

    /// Scroll width of an element.
    pub fn width(&self, element: &impl ElementHandle) -> f64 {
        element.scroll_width()
    }

    /// The element's box in page coordinates: its viewport rect shifted by the page scroll.
    pub fn offset(&self, element: &impl ElementHandle) -> OffsetBox {
        let rect = element.client_rect();
        OffsetBox {
            width: element.offset_width(),
            height: element.offset_height(),
            top: rect.top + self.scroll_y(),
            left: rect.left + self.scroll_x(),
        }
    }

    /// Page scroll on the x axis.
    ///
    /// A missing, zero or NaN page offset falls through to the document root.
    pub fn scroll_x(&self) -> f64 {
        match self.window.page_x_offset() {
            Some(x) if x != 0.0 && !x.is_nan() => x,
            _ => self.document.scroll_left(),
        }
    }

    /// Page scroll on the y axis. See [`Helper::scroll_x`].
    pub fn scroll_y(&self) -> f64 {
        match self.window.page_y_offset() {
            Some(y) if y != 0.0 && !y.is_nan() => y,
            _ => self.document.scroll_top(),
        }
    }

    /// Starting position of a drag on `target` from the pointer-down `event`.
    pub fn position_started(
        &self,
        event: &impl PointerEvent,
        target: &impl ElementHandle,
    ) -> Position {
        let page_x = event.page_x();
        let page_y = event.page_y();
        Position {
            offset_x: page_x - self.offset(target).left,
            offset_y: page_y - self.offset(target).top,
            start_x: page_x,
            start_y: page_y,
            last_x: page_x,
            last_y: page_y,
            ..Position::default()
        }
    }

    /// Builds the move descriptor for a drag of `item`.
    pub fn drag_item<I: SortableItem>(&self, item: I) -> DragItem<I> {
        DragItem::new(item)
    }

    pub fn no_drag(&self, element: &impl ElementHandle) -> bool {
        no_drag(element)
    }
}

/// Returns `true` if `element` opts out of starting a drag (a `nodrag` or `data-nodrag`
/// attribute, any value).
pub fn no_drag(element: &impl ElementHandle) -> bool {
    let veto = element.attr("nodrag").is_some() || element.attr("data-nodrag").is_some();
    if veto {
        strace!("no_drag: veto");
    }
    veto
}
