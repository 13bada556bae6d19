use super::*;

#[test]
fn inset_shrinks_and_saturates() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 3));
    assert_eq!(Rect::new(0, 0, 2, 2).inset(Insets::all(3)), Rect::new(3, 3, 0, 0));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 5, 5);
    assert_eq!(a.intersect(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 2, 2));
    assert!(a.intersect(Rect::new(8, 8, 2, 2)).is_empty());
}

#[test]
fn split_left_and_right() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.split_left(4), (Rect::new(0, 0, 4, 5), Rect::new(4, 0, 6, 5)));
    assert_eq!(r.split_right(4), (Rect::new(0, 0, 6, 5), Rect::new(6, 0, 4, 5)));
    assert_eq!(r.split_left(40).1.w, 0);
}

#[test]
fn centered_clamps_to_bounds() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.centered(4, 1), Rect::new(3, 2, 4, 1));
    assert_eq!(r.centered(100, 100), r);
}

#[test]
fn hstack_places_slots_with_spacing() {
    let slots = hstack(Rect::new(2, 1, 20, 3), &[3, 4, 3], 1);
    assert_eq!(
        slots,
        vec![
            Rect::new(2, 1, 3, 3),
            Rect::new(6, 1, 4, 3),
            Rect::new(11, 1, 3, 3),
        ]
    );
}

#[test]
fn hstack_truncates_overflowing_slots() {
    let slots = hstack(Rect::new(0, 0, 6, 1), &[3, 4, 3], 0);
    assert_eq!(slots[1], Rect::new(3, 0, 3, 1));
    assert!(slots[2].is_empty());
}

#[test]
fn hstack_size_sums_widths_and_gaps() {
    let size = hstack_size(&[Size::new(3, 1), Size::new(2, 3), Size::new(3, 1)], 2);
    assert_eq!(size, Size::new(12, 3));
    assert_eq!(hstack_size(&[], 2), Size::new(0, 0));
}
