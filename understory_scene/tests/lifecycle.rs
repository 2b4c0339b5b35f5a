// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attachment, removal, update hooks and image loading across frames.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_event_state::interaction::InteractionState;
use understory_scene::{
    Bitmap, BitmapLoader, Element, Image, ImageLoadError, ImageState, Panel, RecordingSurface,
    Scene, SurfaceOp,
};
use understory_style::{ElementStyle, Orientation};

#[derive(Clone, Default)]
struct QueueLoader(Rc<RefCell<Vec<String>>>);

impl BitmapLoader for QueueLoader {
    fn load(&mut self, url: &str) {
        self.0.borrow_mut().push(url.to_owned());
    }
}

fn frame(scene: &mut Scene) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    scene.cycle(&mut surface, 16.0);
    surface
}

fn full() -> ElementStyle {
    ElementStyle::builder().width(100.0).height(100.0).build()
}

#[test]
fn loads_start_after_the_frame_that_requested_them() {
    let loader = QueueLoader::default();
    let mut scene = Scene::new();
    scene.set_loader(loader.clone());
    scene.append_child(Element::new(Image::new("hero.png"), full()));

    let surface = frame(&mut scene);
    assert!(surface.ops().is_empty(), "nothing to draw while pending");
    assert_eq!(*loader.0.borrow(), ["hero.png"]);
    assert!(matches!(scene.images().get("hero.png"), Some(ImageState::Pending)), "pending");

    frame(&mut scene);
    assert_eq!(loader.0.borrow().len(), 1, "requested once");

    scene.complete_image("hero.png", Ok(Bitmap::new(2, 2, vec![255; 16]).unwrap()));
    let surface = frame(&mut scene);
    assert!(
        surface.ops().iter().any(|r| matches!(r.op, SurfaceOp::DrawImage(..))),
        "drawn once ready"
    );
}

#[test]
fn completing_a_load_after_removal_is_harmless() {
    let loader = QueueLoader::default();
    let mut scene = Scene::new();
    scene.set_loader(loader.clone());
    let id = scene.append_child(Element::new(Image::new("late.png"), full()));
    frame(&mut scene);

    let detached = scene.remove(id).unwrap();
    assert!(detached.kind::<Image>().is_some(), "kind survives detachment");
    scene.complete_image("late.png", Ok(Bitmap::new(1, 1, vec![0; 4]).unwrap()));
    assert!(scene.images().get("late.png").unwrap().bitmap().is_some(), "cached by url");

    // Re-attaching picks the cached bitmap up without a second load.
    scene.append_child(detached);
    let surface = frame(&mut scene);
    assert_eq!(loader.0.borrow().len(), 1);
    assert!(
        surface.ops().iter().any(|r| matches!(r.op, SurfaceOp::DrawImage(..))),
        "drawn from cache"
    );
}

#[test]
fn failed_loads_can_be_retried() {
    let loader = QueueLoader::default();
    let mut scene = Scene::new();
    scene.set_loader(loader.clone());
    scene.append_child(Element::new(Image::new("flaky.png"), full()));
    frame(&mut scene);
    scene.complete_image(
        "flaky.png",
        Err(ImageLoadError {
            url: "flaky.png".into(),
            reason: "timeout".into(),
        }),
    );
    frame(&mut scene);
    assert_eq!(loader.0.borrow().len(), 1, "failure is not retried implicitly");

    assert!(scene.images_mut().retry("flaky.png"), "failed source");
    frame(&mut scene);
    assert_eq!(*loader.0.borrow(), ["flaky.png", "flaky.png"]);
}

#[test]
fn removal_resets_interaction_state() {
    let mut scene = Scene::new();
    let id = scene.append_child(Element::new(Panel::new(), full()));
    frame(&mut scene);
    scene.pointer_move(Point::new(10.0, 10.0));
    scene.pointer_down(Point::new(10.0, 10.0));
    assert!(scene.interaction(id).unwrap().is_active(), "pressed");

    let element = scene.remove(id).unwrap();
    let id = scene.append_child(element);
    assert_eq!(scene.interaction(id), Some(InteractionState::new()));
    assert!(scene.world_transform(id).is_none(), "not drawn since reattaching");
}

#[test]
fn hooks_travel_with_the_element() {
    let ticks = Rc::new(RefCell::new(Vec::new()));
    let mut element = Element::new(Panel::new(), full());
    for tag in ["first", "second", "third"] {
        let ticks = Rc::clone(&ticks);
        element.hook_update(move |cx| ticks.borrow_mut().push((tag, cx.dt)));
    }
    let mut scene = Scene::new();
    let id = scene.append_child(element);
    frame(&mut scene);
    assert_eq!(
        *ticks.borrow(),
        [("first", 16.0), ("second", 16.0), ("third", 16.0)]
    );

    let element = scene.remove(id).unwrap();
    frame(&mut scene);
    assert_eq!(ticks.borrow().len(), 3, "detached elements do not cycle");

    scene.append_child(element);
    frame(&mut scene);
    assert_eq!(ticks.borrow().len(), 6);
}

#[test]
fn inherit_children_draw_before_absolute_ones() {
    let mut scene = Scene::new();
    let root = scene.append_child(Element::new(Panel::new(), full()));
    let absolute = Element::new(
        Panel::new(),
        ElementStyle::builder()
            .width(10.0)
            .height(10.0)
            .orientation(Orientation::Absolute)
            .build(),
    );
    scene.append_child_to(root, absolute).unwrap();
    scene
        .append_child_to(root, Element::new(Panel::new(), ElementStyle::builder().width(10.0).height(20.0).build()))
        .unwrap();

    let surface = frame(&mut scene);
    let sizes: Vec<_> = surface.filled_rects().map(|(rect, _)| rect.size()).collect();
    // Root, then the inherit child (10% of 800 × 20% of 600, shrunk by 100%),
    // then the absolute child.
    assert_eq!(
        sizes,
        [
            kurbo::Size::new(800.0, 600.0),
            kurbo::Size::new(80.0, 120.0),
            kurbo::Size::new(80.0, 60.0),
        ]
    );
    assert_eq!(scene.children(root).len(), 2);
}
