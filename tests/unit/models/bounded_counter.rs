use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn record_commits(counter: &mut BoundedCounter) -> Rc<RefCell<Vec<Commit>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    counter.on_commit(move |c| sink.borrow_mut().push(*c));
    log
}

fn record_refreshes(counter: &mut BoundedCounter) -> Rc<RefCell<Vec<CounterState>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    counter.on_refresh(move |s| sink.borrow_mut().push(*s));
    log
}

#[test]
fn defaults_are_zero_in_zero_to_nine() {
    let counter = BoundedCounter::default();
    assert_eq!(counter.value(), 0);
    assert_eq!(counter.min_value(), 0);
    assert_eq!(counter.max_value(), 9);
    assert!(counter.can_increment());
    assert!(!counter.can_decrement());
}

#[test]
fn with_bounds_clamps_initial_value() {
    assert_eq!(BoundedCounter::with_bounds(42, 0, 9).value(), 9);
    assert_eq!(BoundedCounter::with_bounds(-3, 0, 9).value(), 0);
    assert_eq!(BoundedCounter::with_bounds(4, 0, 9).value(), 4);
}

#[test]
fn set_value_always_lands_inside_bounds() {
    let mut counter = BoundedCounter::with_bounds(0, -5, 5);
    for n in [i64::MIN, -100, -6, -5, -1, 0, 3, 5, 6, 1000, i64::MAX] {
        counter.set_value(n);
        let v = counter.value();
        assert!(counter.min_value() <= v && v <= counter.max_value(), "n={n} v={v}");
    }
}

#[test]
fn set_value_clamps_out_of_range_input() {
    let mut counter = BoundedCounter::with_bounds(5, 0, 9);
    counter.set_value(100);
    assert_eq!(counter.value(), 9);
    counter.set_value(-5);
    assert_eq!(counter.value(), 0);
}

#[test]
fn nine_increments_reach_max_and_tenth_is_silent() {
    let mut counter = BoundedCounter::with_bounds(0, 0, 9);
    let commits = record_commits(&mut counter);

    for _ in 0..9 {
        assert!(counter.increment().is_some());
    }
    assert_eq!(counter.value(), 9);
    assert!(!counter.can_increment());
    assert_eq!(commits.borrow().len(), 9);

    assert_eq!(counter.increment(), None);
    assert_eq!(counter.value(), 9);
    assert_eq!(commits.borrow().len(), 9);
}

#[test]
fn decrement_at_min_is_silent() {
    let mut counter = BoundedCounter::with_bounds(0, 0, 9);
    let commits = record_commits(&mut counter);
    let refreshes = record_refreshes(&mut counter);

    assert_eq!(counter.decrement(), None);
    assert_eq!(counter.value(), 0);
    assert!(commits.borrow().is_empty());
    assert!(refreshes.borrow().is_empty());
}

#[test]
fn increment_at_max_fires_no_refresh() {
    let mut counter = BoundedCounter::with_bounds(9, 0, 9);
    let refreshes = record_refreshes(&mut counter);
    assert_eq!(counter.increment(), None);
    assert!(refreshes.borrow().is_empty());
}

#[test]
fn can_step_flags_track_bounds() {
    let mut counter = BoundedCounter::with_bounds(0, 0, 2);
    assert!(!counter.can_decrement());
    assert!(counter.can_increment());

    counter.increment();
    assert!(counter.can_decrement());
    assert!(counter.can_increment());

    counter.increment();
    assert_eq!(counter.value(), 2);
    assert!(counter.can_decrement());
    assert!(!counter.can_increment());
}

#[test]
fn lowering_max_pulls_value_down() {
    let mut counter = BoundedCounter::with_bounds(5, 0, 9);
    counter.set_max_value(3);
    assert_eq!(counter.value(), 3);
    assert_eq!(counter.max_value(), 3);
}

#[test]
fn raising_min_pushes_value_up() {
    let mut counter = BoundedCounter::with_bounds(2, 0, 9);
    counter.set_min_value(4);
    assert_eq!(counter.value(), 4);

    counter.set_min_value(1);
    assert_eq!(counter.value(), 4);
}

#[test]
fn min_above_max_resolves_to_min() {
    let mut counter = BoundedCounter::with_bounds(5, 0, 9);
    counter.set_min_value(12);
    assert_eq!(counter.value(), 12);
    assert!(!counter.can_increment());
    assert!(!counter.can_decrement());

    counter.set_value(3);
    assert_eq!(counter.value(), 12);
    assert_eq!(counter.increment(), None);
    assert_eq!(counter.decrement(), None);
}

#[test]
fn max_below_min_resolves_to_min() {
    let mut counter = BoundedCounter::with_bounds(5, 4, 9);
    counter.set_max_value(1);
    assert_eq!(counter.value(), 4);
}

#[test]
fn set_value_refreshes_without_commit_but_steps_commit() {
    let mut direct = BoundedCounter::with_bounds(3, 0, 9);
    let direct_commits = record_commits(&mut direct);
    let direct_refreshes = record_refreshes(&mut direct);
    direct.set_value(4);
    assert_eq!(direct.value(), 4);
    assert!(direct_commits.borrow().is_empty());
    assert_eq!(direct_refreshes.borrow().len(), 1);

    let mut stepped = BoundedCounter::with_bounds(3, 0, 9);
    let stepped_commits = record_commits(&mut stepped);
    let stepped_refreshes = record_refreshes(&mut stepped);
    stepped.increment();
    assert_eq!(stepped.value(), 4);
    assert_eq!(
        *stepped_commits.borrow(),
        vec![Commit {
            previous: 3,
            value: 4,
            step: Step::Increment,
        }]
    );
    assert_eq!(stepped_refreshes.borrow().len(), 1);
}

#[test]
fn decrement_commit_reports_direction() {
    let mut counter = BoundedCounter::with_bounds(3, 0, 9);
    let commit = counter.decrement().unwrap();
    assert_eq!(commit.previous, 3);
    assert_eq!(commit.value, 2);
    assert_eq!(commit.step, Step::Decrement);
}

#[test]
fn same_value_assignment_does_not_refresh() {
    let mut counter = BoundedCounter::with_bounds(3, 0, 9);
    let refreshes = record_refreshes(&mut counter);
    counter.set_value(3);
    counter.set_value(100);
    counter.set_value(42);
    assert_eq!(refreshes.borrow().len(), 1);
    assert_eq!(refreshes.borrow()[0].value, 9);
}

#[test]
fn bound_change_refreshes_flags_even_when_value_stays() {
    let mut counter = BoundedCounter::with_bounds(3, 0, 9);
    let refreshes = record_refreshes(&mut counter);
    counter.set_max_value(3);

    let log = refreshes.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].value, 3);
    assert!(!log[0].can_increment);
}

#[test]
fn removed_listener_is_not_called() {
    let mut counter = BoundedCounter::default();
    let hits = Rc::new(RefCell::new(0));
    let sink = hits.clone();
    let id = counter.on_commit(move |_| *sink.borrow_mut() += 1);

    counter.increment();
    assert!(counter.remove_listener(id));
    assert!(!counter.remove_listener(id));
    counter.increment();

    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn step_at_integer_extremes_does_not_overflow() {
    let mut counter = BoundedCounter::with_bounds(i64::MAX, i64::MIN, i64::MAX);
    assert_eq!(counter.increment(), None);
    counter.set_value(i64::MIN);
    assert_eq!(counter.decrement(), None);
    assert_eq!(counter.value(), i64::MIN);
}

#[test]
fn clamp_prefers_lower_bound_when_bounds_cross() {
    assert_eq!(clamp(5, 0, 9), 5);
    assert_eq!(clamp(-1, 0, 9), 0);
    assert_eq!(clamp(10, 0, 9), 9);
    assert_eq!(clamp(5, 8, 2), 8);
}
