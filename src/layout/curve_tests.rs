use super::*;

#[test]
fn coordinates_are_rounded() {
    assert_eq!(format_coord(2.0), "2");
    assert_eq!(format_coord(1.0 / 3.0), "0.333");
    assert_eq!(format_coord(-12.34567), "-12.346");
    assert_eq!(format_coord(-0.0001), "0");
}

#[test]
fn two_point_area_is_a_quad() {
    let d = basis_area(&[(0.0, 0.0), (10.0, 10.0)], &[(0.0, 20.0), (10.0, 20.0)]);
    assert_eq!(d, "M0,0L10,10L10,20L0,20Z");
}

#[test]
fn three_points_produce_basis_segments() {
    let top = [(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)];
    let bottom = [(0.0, 30.0), (6.0, 30.0), (12.0, 30.0)];
    let d = basis_area(&top, &bottom);
    assert!(d.starts_with("M0,0L1,1C2,2,4,4,6,4C8,4,10,2,11,1L12,0"));
    assert!(d.contains("L12,30"));
    assert!(d.ends_with("L0,30Z"));
}

#[test]
fn single_point_area() {
    let d = basis_area(&[(5.0, 1.0)], &[(5.0, 9.0)]);
    assert_eq!(d, "M5,1L5,9Z");
}

#[test]
fn empty_area_is_empty_string() {
    assert!(basis_area(&[], &[]).is_empty());
}

#[test]
fn path_data_builder() {
    let mut path = PathData::new();
    assert!(path.is_empty());
    path.move_to(1.0, 2.0);
    path.line_to(3.5, 4.0);
    path.close();
    assert_eq!(path.into_string(), "M1,2L3.5,4Z");
}
