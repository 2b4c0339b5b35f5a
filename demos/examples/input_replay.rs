// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input replay.
//!
//! Register a scene on an input bus, replay a scripted pointer and keyboard
//! session, and pan the camera with held arrow keys.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example input_replay`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_event_state::interaction::InteractionEvent;
use understory_scene::{Element, InputBus, Panel, RawInput, RecordingSurface, Scene};
use understory_style::{ElementStyle, StylePatch};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let clicks = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&clicks);
    let button = Element::new(
        Panel::new(),
        ElementStyle::builder()
            .left(40.0)
            .top(40.0)
            .width(20.0)
            .height(20.0)
            .cursor("pointer")
            .hover(StylePatch::new().opacity(0.8))
            .active(StylePatch::new().scale(0.95).cursor("grabbing"))
            .build(),
    )
    .on(InteractionEvent::Click, move |e| {
        counter.set(counter.get() + 1);
        info!(position = ?e.position, local = ?e.local, "clicked");
    });

    let mut scene = Scene::new();
    let id = scene.append_child(button);
    let mut bus = InputBus::new();
    scene.hook_listeners(&mut bus);

    let script = [
        RawInput::PointerMove(Point::new(10.0, 10.0)),
        RawInput::PointerMove(Point::new(400.0, 300.0)),
        RawInput::PointerDown(Point::new(400.0, 300.0)),
        RawInput::PointerUp(Point::new(405.0, 302.0)),
        RawInput::PointerDown(Point::new(400.0, 300.0)),
        RawInput::PointerMove(Point::new(900.0, 300.0)),
        RawInput::PointerUp(Point::new(790.0, 300.0)),
        RawInput::KeyDown("ArrowRight".into()),
        RawInput::KeyDown("ArrowDown".into()),
    ];

    let mut surface = RecordingSurface::new();
    for input in script {
        bus.emit(input);
        scene.pump(&mut bus);

        let held = scene.hotkeys();
        let dx = if held.contains("arrowright") { 10.0 } else { 0.0 };
        let dy = if held.contains("arrowdown") { 10.0 } else { 0.0 };
        scene.camera_mut().translate(dx, dy);

        surface.clear();
        scene.cycle(&mut surface, 16.0);
        if let Some(cursor) = scene.take_cursor_change() {
            println!("cursor -> {cursor}");
        }
    }

    println!("clicks: {}", clicks.get());
    println!("camera at {:?}", scene.camera().position());
    println!("hovered: {}", scene.interaction(id).is_some_and(|s| s.is_hovered()));
    scene.unhook_listeners(&mut bus);
}
