use super::*;

#[test]
fn same_path_gives_same_id() {
    let a = IdPath::root("stepper").push_u64(1).push_str("plus").finish();
    let b = IdPath::root("stepper").push_u64(1).push_str("plus").finish();
    assert_eq!(a, b);
}

#[test]
fn different_paths_give_different_ids() {
    let plus = IdPath::root("stepper").push_str("plus").finish();
    let minus = IdPath::root("stepper").push_str("minus").finish();
    assert_ne!(plus, minus);
    assert_ne!(
        IdPath::root("stepper").push_u64(1).finish(),
        IdPath::root("stepper").push_u64(2).finish()
    );
}

#[test]
fn segment_boundaries_matter() {
    let a = IdPath::root("ns").push_str("a").push_str("bc").finish();
    let b = IdPath::root("ns").push_str("ab").push_str("c").finish();
    assert_ne!(a, b);
}
