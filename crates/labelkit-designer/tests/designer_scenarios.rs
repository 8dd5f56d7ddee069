//! End-to-end designer session workflows

use labelkit_core::ElementType;
use labelkit_designer::{
    Alignment, DesignerSession, ElementPatch, Layout, Modifiers, Point, Rect, ResizeHandle,
};

fn session() -> DesignerSession {
    DesignerSession::new(Layout::new("retail", "Retail"))
}

#[test]
fn test_add_and_drag_with_snap() {
    let mut s = session();
    assert_eq!((s.layout().width, s.layout().height), (400, 600));

    let id = s.add_element(ElementType::Weight).unwrap();
    assert_eq!(s.element(id).unwrap().rect(), Rect::new(20, 20, 200, 30));

    assert!(s.press_element(id, Point::new(50.0, 30.0), Modifiers::NONE));
    s.pointer_move(Point::new(65.0, 25.0));
    s.pointer_up();

    let el = s.element(id).unwrap();
    assert_eq!((el.x, el.y), (40, 20));
}

#[test]
fn test_align_center_x_to_anchor() {
    let mut s = session();
    let first = s.add_element(ElementType::Variety).unwrap();
    let second = s.add_element(ElementType::Quality).unwrap();
    s.update_element(first, &ElementPatch::new().with_x(10).with_width(100), true);
    s.update_element(second, &ElementPatch::new().with_x(150).with_y(80).with_width(100), true);

    s.select(first, false);
    s.select(second, true);
    assert_eq!(s.anchor(), Some(second));

    let entries = s.history_len();
    assert!(s.align(Alignment::CenterX));
    assert_eq!(s.history_len(), entries + 1);

    assert_eq!(s.element(second).unwrap().x, 150);
    assert_eq!(s.element(second).unwrap().y, 80);
    assert_eq!(s.element(first).unwrap().x, 150);
}

#[test]
fn test_align_single_right_to_canvas() {
    let mut s = session();
    let id = s.add_element(ElementType::LotCode).unwrap();
    s.update_element(id, &ElementPatch::new().with_x(350).with_width(100), true);

    assert!(s.align(Alignment::Right));
    assert_eq!(s.element(id).unwrap().x, 300);
}

#[test]
fn test_delete_two_of_five() {
    let mut s = session();
    let ids: Vec<_> = [
        ElementType::Variety,
        ElementType::Quality,
        ElementType::Weight,
        ElementType::Date,
        ElementType::LotCode,
    ]
    .into_iter()
    .filter_map(|t| s.add_element(t))
    .collect();

    s.select(ids[1], false);
    s.select(ids[3], true);
    let entries = s.history_len();

    assert_eq!(s.delete_selected_elements(), 2);
    assert_eq!(s.elements().len(), 3);
    assert!(s.selected_ids().is_empty());
    assert_eq!(s.history_len(), entries + 1);
    assert!(s.element(ids[1]).is_none());
    assert!(s.element(ids[3]).is_none());
}

#[test]
fn test_resize_east_below_minimum() {
    let mut s = session();
    let id = s.add_element(ElementType::Producer).unwrap();
    s.update_element(id, &ElementPatch::new().with_width(50), true);

    let handle = s.element(id).map(|e| ResizeHandle::E.anchor_point(e.rect())).unwrap();
    assert!(s.press_handle(ResizeHandle::E, handle));
    s.pointer_move(Point::new(handle.x - 60.0, handle.y));
    s.pointer_up();

    assert_eq!(s.element(id).unwrap().width, 10);
}

#[test]
fn test_drag_moves_whole_selection() {
    let mut s = session();
    s.set_snap_to_grid(false);
    let a = s.add_element(ElementType::Variety).unwrap();
    let b = s.add_element(ElementType::Quality).unwrap();
    s.update_element(b, &ElementPatch::position(100, 200), true);
    s.select(a, false);

    // shift-press adds b and drags both
    assert!(s.press_element(b, Point::new(110.0, 210.0), Modifiers::shift()));
    s.pointer_move(Point::new(103.0, 217.0));
    s.pointer_up();

    assert_eq!(s.element(a).unwrap().rect(), Rect::new(13, 27, 200, 30));
    assert_eq!(s.element(b).unwrap().rect(), Rect::new(93, 207, 200, 30));
    assert_eq!(s.anchor(), Some(b));
}

#[test]
fn test_drag_clamps_at_origin() {
    let mut s = session();
    let id = s.add_element(ElementType::Variety).unwrap();
    s.press_element(id, Point::new(30.0, 30.0), Modifiers::NONE);
    s.pointer_move(Point::new(-500.0, -500.0));
    s.pointer_leave();
    let el = s.element(id).unwrap();
    assert_eq!((el.x, el.y), (0, 0));
}

#[test]
fn test_undo_whole_gesture() {
    let mut s = session();
    let id = s.add_element(ElementType::Variety).unwrap();
    {
        let mut g = s.gesture();
        g.pointer_down(Point::new(30.0, 30.0), Modifiers::NONE);
        for i in 0..20 {
            g.pointer_move(Point::new(30.0 + i as f64 * 10.0, 30.0));
        }
    }
    assert_eq!(s.element(id).unwrap().x, 210);

    assert!(s.undo());
    assert_eq!(s.element(id).unwrap().x, 20);
}
