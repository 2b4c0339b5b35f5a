// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and keyboard dispatch through a drawn scene.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_event_state::interaction::InteractionEvent::{self, *};
use understory_scene::{
    Element, ElementId, InputBus, Panel, RawInput, RecordingSurface, Scene, SceneConfig,
};
use understory_style::{ElementStyle, StylePatch};

const INSIDE: Point = Point::new(400.0, 300.0);
const OUTSIDE: Point = Point::new(50.0, 50.0);

/// One centered element covering (320, 240)..(480, 360) on an 800×600 canvas.
fn scene_with_button(style: ElementStyle) -> (Scene, ElementId, Rc<RefCell<Vec<InteractionEvent>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut element = Element::new(Panel::new(), style);
    for kind in [Enter, Exit, Move, ActiveStart, Down, ActiveEnd, Up, Click] {
        let log = Rc::clone(&log);
        element = element.on(kind, move |e| log.borrow_mut().push(e.kind));
    }
    let mut scene = Scene::new();
    let id = scene.append_child(element);
    frame(&mut scene);
    (scene, id, log)
}

fn button_style() -> ElementStyle {
    ElementStyle::builder()
        .left(40.0)
        .top(40.0)
        .width(20.0)
        .height(20.0)
        .build()
}

fn frame(scene: &mut Scene) {
    let mut surface = RecordingSurface::new();
    scene.cycle(&mut surface, 16.0);
}

fn count(log: &RefCell<Vec<InteractionEvent>>, kind: InteractionEvent) -> usize {
    log.borrow().iter().filter(|k| **k == kind).count()
}

#[test]
fn press_and_release_inside_clicks_once() {
    let (mut scene, id, log) = scene_with_button(button_style());
    scene.pointer_down(INSIDE);
    let events = scene.pointer_up(INSIDE);
    assert_eq!(
        events.iter().map(|d| d.event).collect::<Vec<_>>(),
        [ActiveEnd, Up, Click]
    );
    assert!(events.iter().all(|d| d.target == id), "single target");
    assert_eq!(*log.borrow(), [ActiveStart, Down, ActiveEnd, Up, Click]);

    scene.pointer_up(INSIDE);
    assert_eq!(count(&log, Click), 1, "a second release does not click again");
}

#[test]
fn dragging_out_before_release_never_clicks() {
    let (mut scene, id, log) = scene_with_button(button_style());
    scene.pointer_down(INSIDE);
    assert!(scene.interaction(id).unwrap().is_active(), "pressed");
    scene.pointer_up(OUTSIDE);
    assert_eq!(count(&log, ActiveEnd), 1, "state still clears");
    assert_eq!(count(&log, Up), 0);
    assert_eq!(count(&log, Click), 0);
    assert!(!scene.interaction(id).unwrap().is_active(), "released");
}

#[test]
fn pressing_outside_never_arms_a_click() {
    let (mut scene, id, log) = scene_with_button(button_style());
    scene.pointer_down(OUTSIDE);
    assert!(!scene.interaction(id).unwrap().is_click_armed(), "not armed");
    scene.pointer_up(INSIDE);
    assert_eq!(*log.borrow(), [Up]);
}

#[test]
fn hover_fires_on_edges_only() {
    let (mut scene, _, log) = scene_with_button(button_style());
    for pt in [OUTSIDE, INSIDE, Point::new(410.0, 310.0), INSIDE, OUTSIDE, OUTSIDE] {
        scene.pointer_move(pt);
    }
    assert_eq!(count(&log, Enter), 1);
    assert_eq!(count(&log, Exit), 1);
    assert_eq!(count(&log, Move), 3);
    assert_eq!(log.borrow().first(), Some(&Enter));
}

#[test]
fn samples_off_the_canvas_are_dropped() {
    let (mut scene, id, log) = scene_with_button(button_style());
    scene.pointer_move(INSIDE);
    assert!(scene.pointer_move(Point::new(-1.0, 300.0)).is_empty(), "left of canvas");
    assert!(scene.pointer_down(Point::new(400.0, 601.0)).is_empty(), "below canvas");
    assert_eq!(scene.pointer(), Some(INSIDE), "last valid sample kept");
    assert!(scene.interaction(id).unwrap().is_hovered(), "still hovered");
    assert_eq!(*log.borrow(), [Enter, Move]);
}

#[test]
fn client_coordinates_are_normalized() {
    let (mut scene, id, _) = scene_with_button(button_style());
    scene.set_canvas_metrics((800.0, 600.0), Point::new(100.0, 50.0), 2.0);
    // (300, 200) client is (400, 300) canvas.
    scene.pointer_move(Point::new(300.0, 200.0));
    assert_eq!(scene.pointer(), Some(INSIDE));
    assert!(scene.is_pointer_inside(id), "hit after normalization");
    // (99, 200) client is left of the canvas.
    assert!(scene.pointer_move(Point::new(99.0, 200.0)).is_empty(), "dropped");
}

#[test]
fn hover_and_active_overlays_leave_the_resting_style_intact() {
    let style = ElementStyle::builder()
        .left(40.0)
        .top(40.0)
        .width(20.0)
        .height(20.0)
        .opacity(1.0)
        .hover(StylePatch::new().opacity(0.5).width(22.0))
        .active(StylePatch::new().rotation(10.0))
        .build();
    let (mut scene, id, _) = scene_with_button(style);
    let resting = scene.style(id).unwrap().clone();

    for _ in 0..3 {
        scene.pointer_move(INSIDE);
        frame(&mut scene);
        scene.pointer_down(INSIDE);
        frame(&mut scene);
        scene.pointer_up(INSIDE);
        frame(&mut scene);
        scene.pointer_move(OUTSIDE);
        frame(&mut scene);
        assert_eq!(scene.style(id), Some(&resting));
    }
}

#[test]
fn hovered_elements_draw_with_the_overlay() {
    let style = ElementStyle::builder()
        .left(40.0)
        .top(40.0)
        .width(20.0)
        .height(20.0)
        .hover(StylePatch::new().opacity(0.25))
        .build();
    let (mut scene, _, _) = scene_with_button(style);
    scene.pointer_move(INSIDE);
    let mut surface = RecordingSurface::new();
    scene.cycle(&mut surface, 16.0);
    assert_eq!(surface.ops()[0].state.alpha, 0.25);
}

#[test]
fn cursor_changes_once_per_transition() {
    let style = ElementStyle::builder()
        .left(40.0)
        .top(40.0)
        .width(20.0)
        .height(20.0)
        .cursor("pointer")
        .active(StylePatch::new().cursor("grabbing"))
        .build();
    let (mut scene, _, _) = scene_with_button(style);
    assert_eq!(scene.take_cursor_change(), None, "standby from the start");

    scene.pointer_move(INSIDE);
    frame(&mut scene);
    frame(&mut scene);
    assert_eq!(scene.take_cursor_change().as_deref(), Some("pointer"));
    assert_eq!(scene.take_cursor_change(), None, "deduplicated");

    scene.pointer_down(INSIDE);
    frame(&mut scene);
    assert_eq!(scene.cursor(), "grabbing", "active wins");

    scene.pointer_up(OUTSIDE);
    frame(&mut scene);
    assert_eq!(scene.cursor(), "pointer", "still hovered until the pointer moves");

    scene.pointer_move(OUTSIDE);
    frame(&mut scene);
    assert_eq!(scene.cursor(), "auto", "reverts to standby");
}

#[test]
fn held_keys_are_unique_and_reach_every_element() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    for _ in 0..2 {
        let seen = Rc::clone(&seen);
        scene.append_child(
            Element::new(Panel::new(), ElementStyle::default())
                .on_key_down(move |e| seen.borrow_mut().push((e.key.to_owned(), e.held.to_vec()))),
        );
    }
    scene.key_down("Shift");
    scene.key_down("a");
    scene.key_down("A");
    assert_eq!(scene.hotkeys().keys(), ["shift", "a"]);
    assert_eq!(seen.borrow().len(), 6, "two elements, three presses");
    assert_eq!(seen.borrow()[5].0, "A", "raw key is passed through");

    scene.key_up("a");
    scene.key_up("a");
    assert_eq!(scene.hotkeys().keys(), ["shift"]);
    scene.key_down("a");
    assert_eq!(scene.hotkeys().last(), Some("a"));
}

#[test]
fn input_flows_through_a_registered_listener() {
    let (mut scene, id, log) = scene_with_button(button_style());
    let mut bus = InputBus::new();
    bus.emit(RawInput::PointerMove(INSIDE));
    assert_eq!(scene.pump(&mut bus), 0, "not registered yet");

    let handle = scene.hook_listeners(&mut bus);
    assert_eq!(scene.hook_listeners(&mut bus), handle, "idempotent");
    bus.emit(RawInput::PointerMove(INSIDE));
    bus.emit(RawInput::PointerDown(INSIDE));
    bus.emit(RawInput::PointerUp(INSIDE));
    bus.emit(RawInput::KeyDown("x".into()));
    assert_eq!(scene.pump(&mut bus), 4);
    assert_eq!(count(&log, Click), 1);
    assert!(scene.hotkeys().contains("x"), "keys too");

    assert!(scene.unhook_listeners(&mut bus), "was registered");
    bus.emit(RawInput::PointerMove(OUTSIDE));
    assert_eq!(scene.pump(&mut bus), 0, "detached");
    assert!(scene.interaction(id).unwrap().is_hovered(), "exit never delivered");
}

#[test]
fn scene_config_defaults() {
    let config = SceneConfig::default();
    assert_eq!(config.standby_cursor, "auto");
    assert_eq!(config.device_pixel_ratio, 1.0);
}
