// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared demo color palette.

use peniko::Color;

const PALETTE: [(u8, u8, u8); 5] = [
    (0xef, 0x6f, 0x6c),
    (0x46, 0x57, 0x75),
    (0x56, 0xe3, 0x9f),
    (0x59, 0xc9, 0xa5),
    (0x5b, 0x6c, 0x5d),
];

/// Returns the demo color for an item index, cycling through the palette.
pub(crate) fn color_for(index: usize) -> Color {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::from_rgb8(r, g, b)
}
