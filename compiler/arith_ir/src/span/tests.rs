use super::*;

#[test]
fn test_span_merge() {
    let a = Span::new(2, 5);
    let b = Span::new(8, 11);
    assert_eq!(a.merge(b), Span::new(2, 11));
    assert_eq!(b.merge(a), Span::new(2, 11));
}

#[test]
fn test_span_point_is_empty() {
    let p = Span::point(7);
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
    assert_eq!(p.to_range(), 7..7);
}

#[test]
fn test_span_from_range() {
    assert_eq!(Span::from_range(3..9), Span::new(3, 9));
    assert_eq!(Span::new(3, 9).len(), 6);
}

#[test]
fn test_span_debug_format() {
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
    assert_eq!(Span::new(1, 4).to_string(), "1..4");
}

#[test]
fn test_location_display() {
    let loc = Location::new(2, 5, 9);
    assert_eq!(loc.to_string(), "line 2, column 5");
    assert_eq!(Location::default(), Location::START);
}
