use super::*;

#[test]
fn unbounded_is_never_exceeded() {
    assert!(!LineWidth::Unbounded.exceeded_by(1e12));
    assert_eq!(LineWidth::Unbounded.as_f64(), f64::INFINITY);
    assert_eq!(LineWidth::Unbounded.bounded(), None);
}

#[test]
fn bounded_edge_is_inclusive() {
    let w = LineWidth::Bounded(100.0);
    assert!(!w.exceeded_by(100.0));
    assert!(w.exceeded_by(100.5));
    assert_eq!(w.bounded(), Some(100.0));
}
