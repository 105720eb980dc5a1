use super::*;

#[test]
fn html_escape_special_characters() {
    assert_eq!(html_escape("<script>"), "&lt;script&gt;");
    assert_eq!(html_escape("a & b"), "a &amp; b");
    assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    assert_eq!(html_escape("it's"), "it&#39;s");
}

#[test]
fn format_value_integers_have_no_decimals() {
    assert_eq!(format_value(3.0), "3");
    assert_eq!(format_value(-13.0), "-13");
}

#[test]
fn format_value_trims_float_noise() {
    assert_eq!(format_value(0.1 + 0.2), "0.3");
    assert_eq!(format_value(3.25), "3.25");
}

#[test]
fn format_value_normalizes_negative_zero() {
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(-1e-12), "0");
}

#[test]
fn format_value_keeps_large_values() {
    assert_eq!(format_value(2.5e12), "2500000000000");
}

#[test]
fn format_coord_rounds_to_two_decimals() {
    assert_eq!(format_coord(12.3456), "12.35");
    assert_eq!(format_coord(100.0), "100");
    assert_eq!(format_coord(-0.001), "0");
}
