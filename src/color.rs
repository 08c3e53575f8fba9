/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use crate::{CSI, SGR, SgrCode, sizing::InlineString};

/// Represents a color in RGB (24-bit truecolor) format.
///
/// This is the most precise color representation supported by modern terminals.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Unpacks a `0xRRGGBB` value: red is bits 16-23, green is bits 8-15, blue is
    /// bits 0-7. Bits above 23 are masked off, so every `u32` is a valid input.
    #[must_use]
    pub fn from_hex(value: u32) -> Self {
        let red = ((value >> 16) & 0xFF) as u8;
        let green = ((value >> 8) & 0xFF) as u8;
        let blue = (value & 0xFF) as u8;
        Self { red, green, blue }
    }

    /// Packs the channels back into a `0xRRGGBB` value. Inverse of
    /// [`RgbColor::from_hex`]: `RgbColor::from_hex(x).to_hex() == x & 0xFF_FFFF`.
    #[must_use]
    pub fn to_hex(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

impl From<u32> for RgbColor {
    fn from(value: u32) -> Self { Self::from_hex(value) }
}

impl From<RgbColor> for u32 {
    fn from(color: RgbColor) -> Self { color.to_hex() }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Renders the foreground truecolor sequence `"\x1b[38;2;<r>;<g>;<b>m"` with decimal
/// channel values.
#[must_use]
pub fn ansi_fg_color(fg: RgbColor) -> InlineString {
    let mut acc = InlineString::new();
    acc.push_str(CSI);
    SgrCode::ForegroundRGB(fg.red, fg.green, fg.blue).write_param_to_buf(&mut acc);
    acc.push_str(SGR);
    acc
}

/// Renders the background truecolor sequence `"\x1b[48;2;<r>;<g>;<b>m"` with decimal
/// channel values.
#[must_use]
pub fn ansi_bg_color(bg: RgbColor) -> InlineString {
    let mut acc = InlineString::new();
    acc.push_str(CSI);
    SgrCode::BackgroundRGB(bg.red, bg.green, bg.blue).write_param_to_buf(&mut acc);
    acc.push_str(SGR);
    acc
}

/// Renders the foreground sequence followed by the background sequence. The two are
/// independent SGR groups, so the ordering only affects byte layout, not what the
/// terminal displays.
#[must_use]
pub fn ansi_color(fg: RgbColor, bg: RgbColor) -> InlineString {
    let mut acc = ansi_fg_color(fg);
    acc.push_str(ansi_bg_color(bg).as_str());
    acc
}
