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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::SmallVec;
use strum_macros::EnumCount;

/// Control Sequence Introducer. Every sequence this crate emits starts with this.
pub const CSI: &str = "\x1b[";
/// Final byte of an SGR (set graphics mode) sequence.
pub const SGR: &str = "m";

/// One SGR code that this crate can emit.
///
/// The unit variants each map to a single numeric parameter; the RGB variants carry
/// their channel values and expand to the `38;2;r;g;b` / `48;2;r;g;b` parameter
/// families. [`Display`] produces the complete framed sequence for a single code, eg:
/// `SgrCode::Bold` formats as `"\x1b[1m"`. To combine several codes into one sequence,
/// see [`crate::ansi_emphasis`].
#[derive(Copy, Clone, Debug, PartialEq, EnumCount)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    Strikethrough,
    Fraktur,
    NoBold,
    NormalIntensity,
    NoItalic,
    NoUnderline,
    NoInvert,
    Reveal,
    NoStrikethrough,
    Frame,
    Encircle,
    Overline,
    NoFrameOrEncircle,
    NoOverline,
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sizing {
    use super::*;

    /// Upper bound on the number of codes a single render can produce: at most one
    /// per [`SgrCode`] variant.
    pub const MAX_SGR_CODE_COUNT: usize = <SgrCode as strum::EnumCount>::COUNT;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODE_COUNT]>;

    /// Stack allocated string storage for escape sequences. When this gets larger
    /// than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
    /// [`smallvec::SmallVec::spilled`] on the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
}

/// Lookup table for u8 to string conversion to avoid runtime formatting overhead.
/// Pre-computed at compile time for all possible u8 values (0-255).
const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43",
    "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56", "57",
    "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71",
    "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123",
    "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135",
    "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146", "147",
    "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158", "159",
    "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170", "171",
    "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182", "183",
    "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194", "195",
    "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206", "207",
    "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218", "219",
    "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231",
    "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

impl SgrCode {
    /// Appends the bare decimal parameter(s) for this code to `acc`, without the
    /// [`CSI`] / [`SGR`] framing. Used to join several codes with `;` into one
    /// sequence.
    #[rustfmt::skip]
    pub fn write_param_to_buf(&self, acc: &mut sizing::InlineString) {
        match *self {
            SgrCode::Reset             => acc.push_str("0"),
            SgrCode::Bold              => acc.push_str("1"),
            SgrCode::Dim               => acc.push_str("2"),
            SgrCode::Italic            => acc.push_str("3"),
            SgrCode::Underline         => acc.push_str("4"),
            SgrCode::SlowBlink         => acc.push_str("5"),
            SgrCode::RapidBlink        => acc.push_str("6"),
            SgrCode::Invert            => acc.push_str("7"),
            SgrCode::Hidden            => acc.push_str("8"),
            SgrCode::Strikethrough     => acc.push_str("9"),
            SgrCode::Fraktur           => acc.push_str("20"),
            SgrCode::NoBold            => acc.push_str("21"),
            SgrCode::NormalIntensity   => acc.push_str("22"),
            SgrCode::NoItalic          => acc.push_str("23"),
            SgrCode::NoUnderline       => acc.push_str("24"),
            SgrCode::NoInvert          => acc.push_str("25"),
            SgrCode::Reveal            => acc.push_str("28"),
            SgrCode::NoStrikethrough   => acc.push_str("29"),
            SgrCode::Frame             => acc.push_str("51"),
            SgrCode::Encircle          => acc.push_str("52"),
            SgrCode::Overline          => acc.push_str("53"),
            SgrCode::NoFrameOrEncircle => acc.push_str("54"),
            SgrCode::NoOverline        => acc.push_str("55"),
            SgrCode::ForegroundRGB(r, g, b) => {
                acc.push_str("38;2;");
                acc.push_str(U8_STRINGS[r as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[g as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[b as usize]);
            }
            SgrCode::BackgroundRGB(r, g, b) => {
                acc.push_str("48;2;");
                acc.push_str(U8_STRINGS[r as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[g as usize]);
                acc.push(';');
                acc.push_str(U8_STRINGS[b as usize]);
            }
        }
    }
}

impl Display for SgrCode {
    /// SGR: set graphics mode command. Batches all the content into an inline buffer
    /// and makes a single [`Formatter::write_str`] call.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = sizing::InlineString::new();
        acc.push_str(CSI);
        self.write_param_to_buf(&mut acc);
        acc.push_str(SGR);
        f.write_str(acc.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::SgrCode;

    #[test]
    fn bold() {
        let sgr_code = SgrCode::Bold;
        assert_eq!(sgr_code.to_string(), "\x1b[1m");
    }

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn dim() {
        let sgr_code = SgrCode::Dim;
        assert_eq!(sgr_code.to_string(), "\x1b[2m");
    }

    #[test]
    fn italic() {
        let sgr_code = SgrCode::Italic;
        assert_eq!(sgr_code.to_string(), "\x1b[3m");
    }

    #[test]
    fn underline() {
        let sgr_code = SgrCode::Underline;
        assert_eq!(sgr_code.to_string(), "\x1b[4m");
    }

    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::RapidBlink, "\x1b[6m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Hidden, "\x1b[8m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::Fraktur, "\x1b[20m")]
    #[test_case(SgrCode::NoBold, "\x1b[21m")]
    #[test_case(SgrCode::NormalIntensity, "\x1b[22m")]
    #[test_case(SgrCode::NoItalic, "\x1b[23m")]
    #[test_case(SgrCode::NoUnderline, "\x1b[24m")]
    #[test_case(SgrCode::NoInvert, "\x1b[25m")]
    #[test_case(SgrCode::Reveal, "\x1b[28m")]
    #[test_case(SgrCode::NoStrikethrough, "\x1b[29m")]
    #[test_case(SgrCode::Frame, "\x1b[51m")]
    #[test_case(SgrCode::Encircle, "\x1b[52m")]
    #[test_case(SgrCode::Overline, "\x1b[53m")]
    #[test_case(SgrCode::NoFrameOrEncircle, "\x1b[54m")]
    #[test_case(SgrCode::NoOverline, "\x1b[55m")]
    fn single_param_codes(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::BackgroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn param_without_framing() {
        let mut acc = super::sizing::InlineString::new();
        SgrCode::ForegroundRGB(0, 128, 255).write_param_to_buf(&mut acc);
        assert_eq!(acc.as_str(), "38;2;0;128;255");
    }
}
