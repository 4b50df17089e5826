// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use synthexp::{Synthexp, SynthexpBuilder};
use tracing_subscriber::EnvFilter;

pub fn main() {
    // e.g. `RUST_LOG=synthexp=trace cargo run --example synth`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let se = Synthexp::new(r"[a-z]{3,8}@[a-z]+\.(com|org|net)").unwrap();
    for _ in 0..5 {
        println!("email: {}", se.synth_string(&[]).unwrap());
    }

    let se = SynthexpBuilder::new(r"^(?x) \d{4} - \d{2} - \d{2} $")
        .unicode(false)
        .build()
        .unwrap();
    for _ in 0..5 {
        println!("date: {}", se.synth_string(&[]).unwrap());
    }

    // `^` after emitted chars can never be satisfied
    let se = Synthexp::new(r"a^b").unwrap();
    match se.synth_string(&[]) {
        Ok(s) => println!("unexpected: {}", s),
        Err(e) => println!("a^b: {}", e),
    }
}
