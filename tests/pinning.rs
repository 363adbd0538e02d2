//! Pin helpers: corners, edge centers and the center variants, against both
//! views and layout guides.

use anchorkit::{AnchorSurface, LayoutEngine, Layoutable, Pinable, Rect, Relation};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn engine_with_container() -> (LayoutEngine, anchorkit::View) {
    let engine = LayoutEngine::new();
    let container = engine.view("container");
    engine
        .set_frame(&container, Rect::new(0.0, 0.0, 320.0, 240.0))
        .unwrap();
    (engine, container)
}

#[test]
fn test_pin_to_center_sized() {
    let (engine, container) = engine_with_container();
    let badge = engine.view("badge");

    let constraints = badge.pin_to_center_sized(&container, 40.0, 20.0).unwrap();
    assert_eq!(constraints.len(), 4);

    let frame = engine.frame(&badge);
    assert_close(frame.x, 140.0);
    assert_close(frame.y, 110.0);
    assert_close(frame.width, 40.0);
    assert_close(frame.height, 20.0);
}

#[test]
fn test_pin_to_center_tracks_container_center() {
    let (engine, container) = engine_with_container();
    let badge = engine.view("badge");
    badge
        .layout(|anchors| {
            anchors
                .width_value(10.0, Relation::Equal)
                .height_value(10.0, Relation::Equal)
        })
        .unwrap();

    badge.pin_to_center(&container).unwrap();

    let frame = engine.frame(&badge);
    assert_close(frame.center_x(), 160.0);
    assert_close(frame.center_y(), 120.0);
}

#[test]
fn test_pin_to_center_anchors_matches_container_size() {
    let (engine, container) = engine_with_container();
    let overlay = engine.view("overlay");

    overlay
        .pin_to_center_anchors(&container, container.width(), container.height())
        .unwrap();

    let frame = engine.frame(&overlay);
    assert_close(frame.x, 0.0);
    assert_close(frame.y, 0.0);
    assert_close(frame.width, 320.0);
    assert_close(frame.height, 240.0);
}

#[test]
fn test_pin_to_top_left_margins() {
    let (engine, container) = engine_with_container();
    let badge = engine.view("badge");

    let constraints = badge.pin_to_top_left(&container, 8.0, 4.0).unwrap();
    assert_eq!(constraints.len(), 2);

    // Only position is constrained; size and opposite edges stay free.
    let frame = engine.frame(&badge);
    assert_close(frame.x, 4.0);
    assert_close(frame.y, 8.0);
    assert_close(frame.width, 0.0);
    assert_close(frame.height, 0.0);
}

#[test]
fn test_pin_to_bottom_right_with_inward_margins() {
    let (engine, container) = engine_with_container();
    let badge = engine.view("badge");
    badge
        .layout(|anchors| {
            anchors
                .width_value(40.0, Relation::Equal)
                .height_value(20.0, Relation::Equal)
        })
        .unwrap();

    // Margins pass through as constants; negative pulls the edges inward.
    badge.pin_to_bottom_right(&container, -8.0, -4.0).unwrap();

    let frame = engine.frame(&badge);
    assert_close(frame.right(), 316.0);
    assert_close(frame.bottom(), 232.0);
    assert_close(frame.x, 276.0);
    assert_close(frame.y, 212.0);
}

#[test]
fn test_pin_to_top_center() {
    let (engine, container) = engine_with_container();
    let badge = engine.view("badge");
    badge
        .layout(|anchors| anchors.width_value(40.0, Relation::Equal))
        .unwrap();

    badge.pin_to_top_center(&container, 5.0).unwrap();

    let frame = engine.frame(&badge);
    assert_close(frame.center_x(), 160.0);
    assert_close(frame.y, 5.0);
}

#[test]
fn test_pin_to_center_left_and_right_are_symmetric() {
    let (engine, container) = engine_with_container();
    let left_badge = engine.view("left_badge");
    let right_badge = engine.view("right_badge");
    for badge in [&left_badge, &right_badge] {
        badge
            .layout(|anchors| {
                anchors
                    .width_value(20.0, Relation::Equal)
                    .height_value(20.0, Relation::Equal)
            })
            .unwrap();
    }

    left_badge.pin_to_center_left(&container, 6.0).unwrap();
    right_badge.pin_to_center_right(&container, -6.0).unwrap();

    let left_frame = engine.frame(&left_badge);
    let right_frame = engine.frame(&right_badge);
    assert_close(left_frame.x, 6.0);
    assert_close(right_frame.right(), 314.0);
    assert_close(left_frame.center_y(), 120.0);
    assert_close(right_frame.center_y(), 120.0);
}

#[test]
fn test_pin_to_center_of_layout_guide() {
    let engine = LayoutEngine::new();
    let content = engine.guide("content");
    let badge = engine.view("badge");
    engine
        .set_frame(&content, Rect::new(20.0, 20.0, 280.0, 200.0))
        .unwrap();

    badge.pin_to_center_sized(&content, 40.0, 20.0).unwrap();

    let frame = engine.frame(&badge);
    assert_close(frame.center_x(), 160.0);
    assert_close(frame.center_y(), 120.0);
}
