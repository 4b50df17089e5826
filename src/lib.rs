// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod compiler;
mod printer;
mod synthesizer;

pub mod alphabet;
pub mod ast;
pub mod charclass;
pub mod error;
pub mod synthexp;

pub use alphabet::Alphabet;
pub use compiler::Dialect;
pub use error::SynthexpError;
pub use synthesizer::{RepeatPolicy, DEFAULT_REPEAT_LIMIT};
pub use synthexp::{Options, Synthexp, SynthexpBuilder};
