// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feed Kurbo viewport geometry into a watcher.
//!
//! Hosts that report window sizes as `kurbo::Size` can drive a
//! `ManualWidth<f64>` facility through the `kurbo_adapter` helpers.
//!
//! Run:
//! - `cargo run -p widthwise_demos --example kurbo_viewport`

use kurbo::Size;
use widthwise_scale::Scale;
use widthwise_watch::adapters::kurbo::set_viewport_size;
use widthwise_watch::{ManualWidth, Watcher};

fn main() {
    let scale = Scale::new([("sm", 576.0_f64), ("md", 768.0), ("lg", 992.0)])
        .expect("distinct thresholds");
    let mut manual = ManualWidth::new();
    let mut watcher = Watcher::mount(scale, &mut manual).expect("manual facility never refuses");

    println!("== Window resizes ==");
    for size in [
        Size::new(375.0, 812.0),
        Size::new(768.0, 1024.0),
        Size::new(1280.0, 800.0),
    ] {
        let flips = set_viewport_size(&mut manual, size);
        let _ = watcher.pump(flips);
        println!(
            "  {:>6} x {:<6} -> {}",
            size.width,
            size.height,
            watcher.current().expect("live")
        );
    }
    assert_eq!(watcher.current().expect("live"), &"lg");
}
