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

use r3bl_term_style::{Emphasis, OutputDevice, RgbColor, bg_color_on, color_off,
                      color_on, emphasis_off, emphasis_on, emphasis_on_all,
                      fg_color_on};

fn main() {
    let device = OutputDevice::new_stdout();

    // Emphasis via a single mask.
    {
        emphasis_on(&device, Emphasis::BOLD | Emphasis::UNDERLINE);
        println!("Print a bold, underlined line.");
        emphasis_off(&device);
    }

    // Emphasis via a list of attributes; order does not matter.
    {
        emphasis_on_all(&device, &[Emphasis::STRIKETHROUGH, Emphasis::DIM]);
        println!("Dim, struck-through line.");
        emphasis_off(&device);
    }

    // Truecolor foreground and background, separately.
    {
        fg_color_on(&device, RgbColor::from_hex(0x5FD7FF));
        println!("Sky blue text.");
        bg_color_on(&device, RgbColor::from_hex(0x303030));
        println!("Sky blue text on dark grey.");
        color_off(&device);
    }

    // Combined foreground + background in one call.
    {
        color_on(
            &device,
            RgbColor::from_hex(0x7F7FFF),
            RgbColor::from_hex(0xFF7F7F),
        );
        println!("Lavender on salmon.");
        color_off(&device);
    }

    // Conflicting attributes are passed through for the terminal to resolve.
    {
        emphasis_on(&device, Emphasis::BOLD | Emphasis::NO_BOLD);
        println!("Bold and no-bold together; the terminal decides.");
        emphasis_off(&device);
    }
}
