// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene basics.
//!
//! Build two nested panels, run a few throttled frames against a recording
//! surface, and print what was drawn.
//!
//! Run:
//! - `RUST_LOG=understory_scene=debug cargo run -p understory_demos --example scene_basics`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_scene::{Element, FrameLimiter, Panel, RecordingSurface, Scene, SceneConfig, SurfaceOp};
use understory_style::{ElementStyle, parse_blend, parse_color};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A 4:3 canvas, as a host would size it from its layout.
    let config = SceneConfig::with_canvas_size((1024.0, 768.0));
    let mut scene = Scene::with_config(config.clone());
    let left = scene.aspect_correct(20.0).x;
    let width = scene.aspect_correct(50.0).x;

    let outer = ElementStyle::builder()
        .left(left)
        .top(20.0)
        .width(width)
        .height(50.0)
        .rotation(45.0)
        .build();
    let mut inner = outer.clone();
    inner.rotation = 23.0;
    inner.opacity = 0.95;
    inner.blend = Some(parse_blend("overlay")?);

    let card = Element::new(
        Panel::new()
            .with_background(parse_color("#79A99D")?)
            .with_border(5.0, parse_color("#ffffff")?),
        outer,
    )
    .with_child(Element::new(
        Panel::new().with_background(parse_color("#DB9471")?),
        inner,
    ));
    let card = scene.append_child(card);
    let child = scene.children(card)[0];
    println!("outer box {:?}, inner box {:?}", scene.dimensions(card), scene.dimensions(child));

    // Simulated animation callbacks every 4ms; the limiter lets through about
    // one in three at the default 120 fps ceiling.
    let mut limiter = FrameLimiter::from_config(&config);
    let mut surface = RecordingSurface::new();
    let mut frames = 0;
    for tick in 0..60 {
        let now = f64::from(tick) * 4.0;
        let Some(dt) = limiter.tick(now) else {
            continue;
        };
        surface.clear();
        scene.cycle(&mut surface, dt);
        frames += 1;
    }
    println!("ran {frames} frames");

    for recorded in surface.ops() {
        match &recorded.op {
            SurfaceOp::FillRect(rect, _) => println!(
                "fill {:?} at {:?} alpha {}",
                rect.size(),
                recorded.state.transform * Point::ORIGIN,
                recorded.state.alpha
            ),
            SurfaceOp::StrokeRect(rect, _, stroke) => {
                println!("stroke {:?} width {}", rect.size(), stroke.width);
            }
            other => println!("{other:?}"),
        }
    }
    Ok(())
}
