// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve responsive value tables across the breakpoint scale.
//!
//! Shows the mobile-first cascade: an override covers its own breakpoint and
//! everything wider until a more specific override takes over, while an
//! override defined only for a wider breakpoint never leaks downward.
//!
//! Run:
//! - `cargo run -p widthwise_demos --example responsive_values`

use widthwise_resolve::Responsive;
use widthwise_scale::Scale;

fn main() {
    let scale = Scale::standard();

    // Column count: 1 by default, denser on wider viewports.
    let columns = Responsive::table(1_u32).with("md", 2).with("xl", 4);
    println!("== Columns ==");
    for name in ["xs", "sm", "md", "lg", "xl"] {
        let resolved = columns.resolve_at(&scale, &name).expect("name is on the scale");
        println!("  {name}: {resolved}");
    }
    assert_eq!(columns.resolve_at(&scale, &"lg").expect("on scale"), &2);

    // A wider-only override never applies below its breakpoint.
    let hero = Responsive::table("compact").with("xl", "cinematic");
    println!("== Hero layout ==");
    for name in ["xs", "lg", "xl"] {
        let resolved = hero.resolve_at(&scale, &name).expect("name is on the scale");
        println!("  {name}: {resolved}");
    }
    assert_eq!(hero.resolve_at(&scale, &"lg").expect("on scale"), &"compact");

    // Plain values pass through untouched.
    let gap: Responsive<&str, u32> = 8.into();
    println!("== Gap ==");
    println!("  everywhere: {}", gap.resolve_at(&scale, &"md").expect("scalar"));

    // Overrides for names the scale does not know are dead: legal, ignored.
    let stale = Responsive::table(0_u32).with("tablet", 99);
    if let Responsive::Table(table) = &stale {
        let dead: Vec<_> = table.dead_overrides(&scale).collect();
        println!("== Dead overrides ==");
        println!("  {dead:?}");
        assert_eq!(dead, [&"tablet"]);
    }
}
