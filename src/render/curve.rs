//! SVG path data for straight polylines and smoothed B-spline curves.

use std::fmt::Write;

use super::format::format_coord;

/// `M x,y L x,y ...` through every point.
#[must_use]
pub fn linear_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        let _ = write!(path, "{command}{},{}", format_coord(x), format_coord(y));
    }
    path
}

/// Uniform cubic B-spline through the control points.
///
/// The curve starts at the first point and ends at the last one; interior
/// points pull the curve without being interpolated.
#[must_use]
pub fn basis_path(points: &[(f64, f64)]) -> String {
    match points {
        [] => String::new(),
        [_] | [_, _] => linear_path(points),
        [(x0, y0), (x1, y1), rest @ ..] => {
            let mut path = String::new();
            let (mut x0, mut y0, mut x1, mut y1) = (*x0, *y0, *x1, *y1);

            let _ = write!(path, "M{},{}", format_coord(x0), format_coord(y0));
            let _ = write!(
                path,
                " L{},{}",
                format_coord(5.0f64.mul_add(x0, x1) / 6.0),
                format_coord(5.0f64.mul_add(y0, y1) / 6.0)
            );

            for &(x, y) in rest {
                push_segment(&mut path, (x0, y0), (x1, y1), (x, y));
                (x0, y0, x1, y1) = (x1, y1, x, y);
            }

            push_segment(&mut path, (x0, y0), (x1, y1), (x1, y1));
            let _ = write!(path, " L{},{}", format_coord(x1), format_coord(y1));
            path
        }
    }
}

fn push_segment(path: &mut String, p0: (f64, f64), p1: (f64, f64), p: (f64, f64)) {
    let c1 = (2.0f64.mul_add(p0.0, p1.0) / 3.0, 2.0f64.mul_add(p0.1, p1.1) / 3.0);
    let c2 = (2.0f64.mul_add(p1.0, p0.0) / 3.0, 2.0f64.mul_add(p1.1, p0.1) / 3.0);
    let end = (
        4.0f64.mul_add(p1.0, p0.0 + p.0) / 6.0,
        4.0f64.mul_add(p1.1, p0.1 + p.1) / 6.0,
    );
    let _ = write!(
        path,
        " C{},{} {},{} {},{}",
        format_coord(c1.0),
        format_coord(c1.1),
        format_coord(c2.0),
        format_coord(c2.1),
        format_coord(end.0),
        format_coord(end.1)
    );
}

#[cfg(test)]
#[path = "curve_tests.rs"]
mod tests;
