use std::time::Duration;
use typetrial::render::{diff_spans, fmt_duration};

#[test]
fn test_untouched_target_renders_plain() {
    let (correct, wrong, rest) = diff_spans("", "Test Quote");
    assert_eq!(correct, "");
    assert_eq!(wrong, "");
    assert_eq!(rest, "Test Quote");
}

#[test]
fn test_matching_prefix_goes_green() {
    let (correct, wrong, rest) = diff_spans("Tes", "Test");
    assert_eq!(correct, "Tes");
    assert_eq!(wrong, "");
    assert_eq!(rest, "t");
}

#[test]
fn test_wrong_input_covers_target_stretch() {
    // wrong chars highlight the target's chars, not the user's
    let (correct, wrong, rest) = diff_spans("Texx", "Test Quote");
    assert_eq!(correct, "Te");
    assert_eq!(wrong, "st");
    assert_eq!(rest, " Quote");
}

#[test]
fn test_typed_spaces_render_as_dots() {
    let (correct, wrong, rest) = diff_spans("Test x", "Test Quote");
    assert_eq!(correct, "Test·");
    assert_eq!(wrong, "Q");
    assert_eq!(rest, "uote");
}

#[test]
fn test_overlong_input_is_clamped_to_target() {
    let (correct, wrong, rest) = diff_spans("Testxxxxxx", "Test");
    assert_eq!(correct, "Test");
    assert_eq!(wrong, "");
    assert_eq!(rest, "");
}

#[test]
fn test_fully_typed_target() {
    let (correct, wrong, rest) = diff_spans("Test Quote", "Test Quote");
    assert_eq!(correct, "Test·Quote");
    assert_eq!(wrong, "");
    assert_eq!(rest, "");
}

#[test]
fn test_multibyte_target_spans() {
    let (correct, wrong, rest) = diff_spans("naï", "naïve");
    assert_eq!(correct, "naï");
    assert_eq!(wrong, "");
    assert_eq!(rest, "ve");
}

#[test]
fn test_fmt_duration_millisecond_precision() {
    assert_eq!(fmt_duration(Duration::from_millis(3204)), "3.204s");
    assert_eq!(fmt_duration(Duration::from_millis(42)), "0.042s");
    assert_eq!(fmt_duration(Duration::from_secs(61)), "61.000s");
    assert_eq!(fmt_duration(Duration::from_nanos(1_500_400_200)), "1.500s");
}
