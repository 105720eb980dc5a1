use super::*;

#[test]
fn linear_path_empty() {
    assert_eq!(linear_path(&[]), "");
}

#[test]
fn linear_path_moves_then_lines() {
    assert_eq!(linear_path(&[(0.0, 0.0), (10.0, 5.0)]), "M0,0 L10,5");
    assert_eq!(
        linear_path(&[(1.0, 1.0), (2.0, 2.0), (3.5, 1.25)]),
        "M1,1 L2,2 L3.5,1.25"
    );
}

#[test]
fn basis_path_with_few_points_is_linear() {
    assert_eq!(basis_path(&[]), "");
    assert_eq!(basis_path(&[(4.0, 2.0)]), "M4,2");
    assert_eq!(basis_path(&[(0.0, 0.0), (8.0, 8.0)]), "M0,0 L8,8");
}

#[test]
fn basis_path_three_points() {
    let path = basis_path(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]);
    assert_eq!(path, "M0,0 L1,1 C2,2 4,4 6,4 C8,4 10,2 11,1 L12,0");
}

#[test]
fn basis_path_has_one_segment_per_interior_step() {
    let points: Vec<(f64, f64)> = (0..6).map(|i| (f64::from(i) * 10.0, 5.0)).collect();
    let path = basis_path(&points);
    // one cubic per point after the first two, plus the closing one
    assert_eq!(path.matches('C').count(), points.len() - 1);
    assert!(path.starts_with("M0,5"));
    assert!(path.ends_with("L50,5"));
}
