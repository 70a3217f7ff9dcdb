use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{ClientRect, PagePoint};

/// A rendered UI node, borrowed for the duration of a single query.
///
/// Implementations forward to the host's own queries (e.g. `web_sys::Element`). A query on a
/// detached or otherwise invalid node fails however the host fails; nothing here catches it.
pub trait ElementHandle {
    /// Reads an attribute. `Some("")` means the attribute is present without a value.
    fn attr(&self, name: &str) -> Option<Cow<'_, str>>;

    /// The viewport-relative bounding box.
    fn client_rect(&self) -> ClientRect;

    fn scroll_width(&self) -> f64;

    fn scroll_height(&self) -> f64;

    /// Layout width (aka DOM `offsetWidth`).
    fn offset_width(&self) -> f64;

    /// Layout height (aka DOM `offsetHeight`).
    fn offset_height(&self) -> f64;
}

impl<T: ElementHandle + ?Sized> ElementHandle for &T {
    fn attr(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).attr(name)
    }

    fn client_rect(&self) -> ClientRect {
        (**self).client_rect()
    }

    fn scroll_width(&self) -> f64 {
        (**self).scroll_width()
    }

    fn scroll_height(&self) -> f64 {
        (**self).scroll_height()
    }

    fn offset_width(&self) -> f64 {
        (**self).offset_width()
    }

    fn offset_height(&self) -> f64 {
        (**self).offset_height()
    }
}

/// Window-level page scroll (aka `pageXOffset` / `pageYOffset`).
///
/// `None` means the host cannot report it; [`crate::Helper`] then falls back to
/// [`DocumentScroll`].
pub trait PageScroll {
    fn page_x_offset(&self) -> Option<f64>;

    fn page_y_offset(&self) -> Option<f64>;
}

impl<T: PageScroll + ?Sized> PageScroll for &T {
    fn page_x_offset(&self) -> Option<f64> {
        (**self).page_x_offset()
    }

    fn page_y_offset(&self) -> Option<f64> {
        (**self).page_y_offset()
    }
}

/// Document-root scroll position (aka `documentElement.scrollLeft` / `scrollTop`).
pub trait DocumentScroll {
    fn scroll_left(&self) -> f64;

    fn scroll_top(&self) -> f64;
}

impl<T: DocumentScroll + ?Sized> DocumentScroll for &T {
    fn scroll_left(&self) -> f64 {
        (**self).scroll_left()
    }

    fn scroll_top(&self) -> f64 {
        (**self).scroll_top()
    }
}

/// A pointer event carrying page coordinates.
pub trait PointerEvent {
    fn page_x(&self) -> f64;

    fn page_y(&self) -> f64;
}

impl PointerEvent for PagePoint {
    fn page_x(&self) -> f64 {
        self.x
    }

    fn page_y(&self) -> f64 {
        self.y
    }
}

/// A plain-data element handle.
///
/// Useful for non-DOM hosts (TUI cells, canvas hit boxes) and for driving the helpers without a
/// browser.
#[derive(Clone, Default, PartialEq)]
pub struct ElementSnapshot {
    pub rect: ClientRect,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub offset_width: f64,
    pub offset_height: f64,
    attrs: Vec<(String, String)>,
}

impl ElementSnapshot {
    /// Creates a snapshot whose layout and scroll sizes equal the rect size.
    pub fn new(rect: ClientRect) -> Self {
        Self {
            rect,
            scroll_width: rect.width,
            scroll_height: rect.height,
            offset_width: rect.width,
            offset_height: rect.height,
            attrs: Vec::new(),
        }
    }

    pub fn with_scroll_size(mut self, width: f64, height: f64) -> Self {
        self.scroll_width = width;
        self.scroll_height = height;
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(pos).1)
    }
}

impl fmt::Debug for ElementSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementSnapshot")
            .field("rect", &self.rect)
            .field("scroll", &(self.scroll_width, self.scroll_height))
            .field("offset", &(self.offset_width, self.offset_height))
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl ElementHandle for ElementSnapshot {
    fn attr(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }

    fn client_rect(&self) -> ClientRect {
        self.rect
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn offset_width(&self) -> f64 {
        self.offset_width
    }

    fn offset_height(&self) -> f64 {
        self.offset_height
    }
}

/// Fixed scroll offsets, implementing both [`PageScroll`] and [`DocumentScroll`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedScroll {
    pub page_x_offset: Option<f64>,
    pub page_y_offset: Option<f64>,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl FixedScroll {
    /// A window that reports its page offset.
    pub fn page(x: f64, y: f64) -> Self {
        Self {
            page_x_offset: Some(x),
            page_y_offset: Some(y),
            ..Self::default()
        }
    }

    /// A window without a page offset; only the document root scroll is known.
    pub fn root(left: f64, top: f64) -> Self {
        Self {
            page_x_offset: None,
            page_y_offset: None,
            scroll_left: left,
            scroll_top: top,
        }
    }
}

impl PageScroll for FixedScroll {
    fn page_x_offset(&self) -> Option<f64> {
        self.page_x_offset
    }

    fn page_y_offset(&self) -> Option<f64> {
        self.page_y_offset
    }
}

impl DocumentScroll for FixedScroll {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }
}
