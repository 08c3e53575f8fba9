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

//! The side-effecting half of the crate: every function here renders a sequence with
//! the pure encoders and writes the bytes to an [`OutputDevice`] immediately.
//!
//! Sequential `*_on` calls compose additively only because the receiving terminal
//! accumulates SGR state; nothing here remembers what was emitted. The `*_off`
//! functions write the blanket reset `"\x1b[0m"` unconditionally, they do not undo
//! individual attributes. Write errors are ignored: a broken stream is the stream's
//! failure to surface, not this crate's.

use std::io::Write as _;

use crate::{Emphasis, OutputDevice, RgbColor, SgrCode, ansi_bg_color, ansi_color,
            ansi_emphasis, ansi_fg_color, lock_output_device_as_mut};

/// Writes [`ansi_emphasis`] for `emphasis` to the device.
pub fn emphasis_on(output_device: &OutputDevice, emphasis: Emphasis) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(ansi_emphasis(emphasis).as_bytes());
}

/// ORs the listed attributes into one mask, then delegates to [`emphasis_on`]. The
/// order of `attrs` does not affect the output.
pub fn emphasis_on_all(output_device: &OutputDevice, attrs: &[Emphasis]) {
    let mut mask = Emphasis::empty();
    for attr in attrs {
        mask |= *attr;
    }
    emphasis_on(output_device, mask);
}

/// Writes the reset sequence `"\x1b[0m"`, clearing every SGR attribute the terminal
/// has accumulated, not just emphasis.
pub fn emphasis_off(output_device: &OutputDevice) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = write!(out, "{}", SgrCode::Reset);
}

/// Writes [`ansi_fg_color`] for `fg` to the device.
pub fn fg_color_on(output_device: &OutputDevice, fg: RgbColor) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(ansi_fg_color(fg).as_bytes());
}

/// Writes [`ansi_bg_color`] for `bg` to the device.
pub fn bg_color_on(output_device: &OutputDevice, bg: RgbColor) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(ansi_bg_color(bg).as_bytes());
}

/// Writes [`ansi_color`] for `fg` and `bg` to the device in one call.
pub fn color_on(output_device: &OutputDevice, fg: RgbColor, bg: RgbColor) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(ansi_color(fg, bg).as_bytes());
}

/// Writes the reset sequence `"\x1b[0m"`. Identical to [`emphasis_off`]: the general
/// reset does not distinguish color from everything else.
pub fn color_off(output_device: &OutputDevice) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = write!(out, "{}", SgrCode::Reset);
}
