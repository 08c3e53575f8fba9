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

//! # r3bl_term_style
//!
//! This crate turns symbolic style requests, an [`Emphasis`] bitmask or [`RgbColor`]
//! truecolor values, into ANSI SGR escape sequences. The `ansi_*` functions are pure
//! and return the sequence as a string; the `*_on` / `*_off` functions write the
//! bytes to an [`OutputDevice`] immediately.
//!
//! It is encode-only: no capability detection, no 256-color fallback, no parsing of
//! incoming sequences. The receiving terminal is assumed to support SGR and the
//! 24-bit color extension.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_term_style::*;
//!
//! // Build escape sequences as strings.
//! let seq = ansi_emphasis(Emphasis::BOLD | Emphasis::ITALIC);
//! assert_eq!(seq.as_str(), "\x1b[1;3m");
//!
//! let seq = ansi_fg_color(RgbColor::from_hex(0xFF0000));
//! assert_eq!(seq.as_str(), "\x1b[38;2;255;0;0m");
//!
//! // Or write them straight to the terminal.
//! let device = OutputDevice::new_stdout();
//! emphasis_on(&device, Emphasis::BOLD | Emphasis::UNDERLINE);
//! println!("bold and underlined");
//! emphasis_off(&device);
//!
//! color_on(
//!     &device,
//!     RgbColor::from_hex(0x7F7FFF),
//!     RgbColor::from_hex(0xFF7F7F),
//! );
//! println!("lavender on salmon");
//! color_off(&device);
//! ```
//!
//! The terminal itself accumulates SGR state across `*_on` calls; this crate holds
//! none. `emphasis_off` and `color_off` both emit the blanket reset `"\x1b[0m"`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

// Private modules.
mod ansi_escape_codes;
mod color;
mod emphasis;
mod output_device;
mod terminal_output;

// Test support, public so downstream crates can assert on emitted bytes.
pub mod test_fixtures;

// Re-export flat public API.
pub use ansi_escape_codes::*;
pub use color::*;
pub use emphasis::*;
pub use output_device::*;
pub use terminal_output::*;
