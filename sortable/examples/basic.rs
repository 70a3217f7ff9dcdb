// Example: page offsets and the pointer offset captured at drag start.
use sortable::{ClientRect, ElementSnapshot, FixedScroll, Helper, PagePoint, no_drag};

fn main() {
    let window = FixedScroll::page(0.0, 480.0);
    let helper = Helper::new(window, FixedScroll::default());

    let row = ElementSnapshot::new(ClientRect::new(16.0, 120.0, 320.0, 32.0));
    println!("offset={:?}", helper.offset(&row));

    let mut pos = helper.position_started(&PagePoint::new(40.0, 610.0), &row);
    println!("grab offset=({}, {})", pos.offset_x, pos.offset_y);

    for y in [620.0, 640.0, 635.0] {
        let placed = pos.track(&PagePoint::new(40.0, y));
        println!("placed={placed:?} dir_y={} dist_ax_y={}", pos.dir_y, pos.dist_ax_y);
    }

    let button = row.clone().with_attr("nodrag", "");
    println!("row no_drag={} button no_drag={}", no_drag(&row), no_drag(&button));
}
