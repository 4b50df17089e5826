// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use synthexp::Synthexp;

pub fn main() {
    let se =
        Synthexp::new(r"#(?<red>[\da-f]{2})(?<green>[\da-f]{2})(?<blue>[\da-f]{2})").unwrap();

    // fix the green channel, generate the others
    let mut captures = vec![None; se.captures_len()];
    if let Some(index) = se.capture_index("green") {
        captures[index - 1] = Some("ff");
    }

    for _ in 0..5 {
        println!("color: {}", se.synth_string(&captures).unwrap());
    }

    // the fixed values are not checked, this one does not match the group
    println!(
        "color: {}",
        se.synth_string(&[Some("red!"), None, None]).unwrap()
    );
}
