// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a watcher through a sequence of viewport widths.
//!
//! This example mounts a watcher on the standard scale, sweeps the width
//! across every breakpoint, and prints each change event, including one seen
//! through a registered observer.
//!
//! Run:
//! - `cargo run -p widthwise_demos --example watch_manual`

use widthwise_scale::Scale;
use widthwise_watch::{Change, ContextObserver, ManualWidth, Watcher};

struct Announcer;

impl ContextObserver<&'static str> for Announcer {
    fn context_changed(&mut self, change: &Change<&'static str>) {
        println!(
            "  observer: {} -> {} ({:?}, revision {})",
            change.previous, change.current, change.what, change.revision
        );
    }
}

fn main() {
    let scale = Scale::standard();
    let mut manual = ManualWidth::new();
    let mut watcher = Watcher::mount(scale, &mut manual).expect("manual facility never refuses");
    let _id = watcher.observe(Box::new(Announcer));

    println!("== Width sweep ==");
    for width in [320_u32, 640, 800, 1024, 1440, 400] {
        match watcher.pump(manual.set_width(width)) {
            Some(change) => println!("width {width}: now {}", change.current),
            None => println!("width {width}: still {}", watcher.current().expect("live")),
        }
    }

    println!("== Teardown ==");
    watcher.teardown(&mut manual);
    println!(
        "live registrations after teardown: {}",
        manual.live_registrations()
    );
    assert_eq!(manual.live_registrations(), 0);
    assert!(watcher.context().is_err());
}
