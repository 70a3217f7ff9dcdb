use crate::{Axis, PagePoint, PointerEvent};

/// Pointer bookkeeping for one drag gesture.
///
/// Built by [`crate::Helper::position_started`] at pointer-down. The `offset_*` and `start_*`
/// fields are fixed for the gesture; everything else is updated on every pointer move, either by
/// [`Position::track`] or by the host's own motion handler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Pointer offset from the target's top-left corner at drag start.
    pub offset_x: f64,
    pub offset_y: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub last_x: f64,
    pub last_y: f64,
    pub now_x: f64,
    pub now_y: f64,
    /// Distance covered by the latest move.
    pub dist_x: f64,
    pub dist_y: f64,
    /// Direction of the latest move: -1, 0 or 1.
    pub dir_x: i8,
    pub dir_y: i8,
    pub last_dir_x: i8,
    pub last_dir_y: i8,
    /// Distance accumulated along each axis since the dominant axis or direction last changed.
    pub dist_ax_x: f64,
    pub dist_ax_y: f64,
    pub dir_ax: Axis,
}

impl Position {
    /// Records a pointer move and returns where the dragged element's top-left corner should be
    /// placed, in page coordinates.
    pub fn track(&mut self, event: &impl PointerEvent) -> PagePoint {
        self.now_x = event.page_x();
        self.now_y = event.page_y();
        self.dist_x = self.now_x - self.last_x;
        self.dist_y = self.now_y - self.last_y;

        self.last_dir_x = self.dir_x;
        self.last_dir_y = self.dir_y;
        self.dir_x = sign(self.dist_x);
        self.dir_y = sign(self.dist_y);

        let axis = if abs(self.dist_x) > abs(self.dist_y) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };

        if axis != self.dir_ax {
            self.dist_ax_x = 0.0;
            self.dist_ax_y = 0.0;
        } else {
            self.dist_ax_x += abs(self.dist_x);
            if self.dir_x != 0 && self.dir_x != self.last_dir_x {
                self.dist_ax_x = 0.0;
            }
            self.dist_ax_y += abs(self.dist_y);
            if self.dir_y != 0 && self.dir_y != self.last_dir_y {
                self.dist_ax_y = 0.0;
            }
        }
        self.dir_ax = axis;

        self.last_x = self.now_x;
        self.last_y = self.now_y;

        PagePoint::new(self.now_x - self.offset_x, self.now_y - self.offset_y)
    }

    /// Distance from the drag start to `event`.
    pub fn total_distance(&self, event: &impl PointerEvent) -> PagePoint {
        PagePoint::new(event.page_x() - self.start_x, event.page_y() - self.start_y)
    }
}

// `f64::abs`/`signum` need `std`.
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
