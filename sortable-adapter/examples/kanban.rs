// Example: drag a card from one column to another with a DragSession.
use sortable::{ClientRect, ElementSnapshot, FixedScroll, Helper, PagePoint};
use sortable_adapter::{DragSession, ListScope};

fn main() {
    let helper = Helper::new(FixedScroll::default(), FixedScroll::default());
    let todo = ListScope::new(vec!["design", "build", "review"]);
    let done = ListScope::new(vec!["kickoff"]);

    let card = ElementSnapshot::new(ClientRect::new(0.0, 40.0, 200.0, 40.0));
    let Some(mut session) = DragSession::start(
        &helper,
        &PagePoint::new(12.0, 50.0),
        &card,
        &card,
        todo.item(1).expect("card exists"),
    ) else {
        return;
    };

    let placed = session.on_move(&PagePoint::new(260.0, 58.0));
    println!("card placed at {placed:?}");

    session.move_to(done.clone(), 0);
    match session.finish() {
        Ok(Some(ev)) => println!("moved {} -> {}", ev.source.index, ev.dest.index),
        Ok(None) => println!("no change"),
        Err(err) => println!("move failed: {err}"),
    }
    println!("todo={:?} done={:?}", todo.to_vec(), done.to_vec());
}
