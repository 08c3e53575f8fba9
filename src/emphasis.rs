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
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use bitflags::bitflags;

use crate::{CSI, SGR, SgrCode,
            sizing::{InlineString, InlineVecSgrCodes}};

bitflags! {
    /// Text emphasis attributes, one bit per SGR code.
    ///
    /// Bits are independent and combine freely with `|`. No pair is mutually
    /// exclusive here: a mask holding both [`Emphasis::BOLD`] and
    /// [`Emphasis::NO_BOLD`] renders both codes and the terminal resolves them.
    /// Undefined high bits are dropped by
    /// [`Emphasis::from_bits_truncate`], never rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Emphasis: u32 {
        const NORMAL            = 1 << 0;
        const BOLD              = 1 << 1;
        const DIM               = 1 << 2;
        const ITALIC            = 1 << 3;
        const UNDERLINE         = 1 << 4;
        const SLOW_BLINK        = 1 << 5;
        const RAPID_BLINK       = 1 << 6;
        const INVERT            = 1 << 7;
        const HIDDEN            = 1 << 8;
        const STRIKETHROUGH     = 1 << 9;
        const FRAKTUR           = 1 << 10;
        const NO_BOLD           = 1 << 11;
        const NORMAL_INTENSITY  = 1 << 12;
        const NO_ITALIC         = 1 << 13;
        const NO_UNDERLINE      = 1 << 14;
        const NO_INVERT         = 1 << 15;
        const REVEAL            = 1 << 16;
        const NO_STRIKETHROUGH  = 1 << 17;
        const FRAME             = 1 << 18;
        const ENCIRCLE          = 1 << 19;
        const OVERLINE          = 1 << 20;
        const NO_FRAME          = 1 << 21;
        /// SGR 54 clears frame and encircle together, so this shares
        /// [`Emphasis::NO_FRAME`]'s bit.
        const NO_ENCIRCLE       = 1 << 21;
        const NO_OVERLINE       = 1 << 22;
    }
}

/// Flag to code mapping in ascending bit order. [`render_emphasis`] walks this table
/// so emission order is fixed by declaration, not by how callers assembled the mask.
#[rustfmt::skip]
const EMPHASIS_CODE_TABLE: [(Emphasis, SgrCode); 23] = [
    (Emphasis::NORMAL,           SgrCode::Reset),
    (Emphasis::BOLD,             SgrCode::Bold),
    (Emphasis::DIM,              SgrCode::Dim),
    (Emphasis::ITALIC,           SgrCode::Italic),
    (Emphasis::UNDERLINE,        SgrCode::Underline),
    (Emphasis::SLOW_BLINK,       SgrCode::SlowBlink),
    (Emphasis::RAPID_BLINK,      SgrCode::RapidBlink),
    (Emphasis::INVERT,           SgrCode::Invert),
    (Emphasis::HIDDEN,           SgrCode::Hidden),
    (Emphasis::STRIKETHROUGH,    SgrCode::Strikethrough),
    (Emphasis::FRAKTUR,          SgrCode::Fraktur),
    (Emphasis::NO_BOLD,          SgrCode::NoBold),
    (Emphasis::NORMAL_INTENSITY, SgrCode::NormalIntensity),
    (Emphasis::NO_ITALIC,        SgrCode::NoItalic),
    (Emphasis::NO_UNDERLINE,     SgrCode::NoUnderline),
    (Emphasis::NO_INVERT,        SgrCode::NoInvert),
    (Emphasis::REVEAL,           SgrCode::Reveal),
    (Emphasis::NO_STRIKETHROUGH, SgrCode::NoStrikethrough),
    (Emphasis::FRAME,            SgrCode::Frame),
    (Emphasis::ENCIRCLE,         SgrCode::Encircle),
    (Emphasis::OVERLINE,         SgrCode::Overline),
    (Emphasis::NO_FRAME,         SgrCode::NoFrameOrEncircle),
    (Emphasis::NO_OVERLINE,      SgrCode::NoOverline),
];

/// Returns the [`SgrCode`]s for every flag set in `emphasis`, in ascending bit order.
/// An empty mask yields an empty vec.
#[must_use]
pub fn render_emphasis(emphasis: Emphasis) -> InlineVecSgrCodes {
    let mut acc = InlineVecSgrCodes::new();
    for (flag, code) in EMPHASIS_CODE_TABLE {
        if emphasis.contains(flag) {
            acc.push(code);
        }
    }
    acc
}

/// Renders `emphasis` as a single SGR sequence with the numeric parameters joined by
/// `;`, eg: `Emphasis::BOLD | Emphasis::ITALIC` becomes `"\x1b[1;3m"`.
///
/// An empty mask produces the empty-parameter sequence `"\x1b[m"`, which terminals
/// treat as a reset.
#[must_use]
pub fn ansi_emphasis(emphasis: Emphasis) -> InlineString {
    let mut acc = InlineString::new();
    acc.push_str(CSI);
    let codes = render_emphasis(emphasis);
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            acc.push(';');
        }
        code.write_param_to_buf(&mut acc);
    }
    acc.push_str(SGR);
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Emphasis, ansi_emphasis, render_emphasis};
    use crate::SgrCode;

    #[test]
    fn empty_mask_renders_no_codes() {
        assert!(render_emphasis(Emphasis::empty()).is_empty());
    }

    #[test]
    fn empty_mask_is_empty_parameter_sequence() {
        assert_eq!(ansi_emphasis(Emphasis::empty()).as_str(), "\x1b[m");
    }

    #[test]
    fn single_flag() {
        assert_eq!(ansi_emphasis(Emphasis::BOLD).as_str(), "\x1b[1m");
    }

    #[test]
    fn normal_is_reset_code() {
        assert_eq!(ansi_emphasis(Emphasis::NORMAL).as_str(), "\x1b[0m");
    }

    #[test]
    fn flags_join_in_bit_order() {
        assert_eq!(
            ansi_emphasis(Emphasis::BOLD | Emphasis::ITALIC).as_str(),
            "\x1b[1;3m"
        );
    }

    #[test]
    fn or_composition_is_commutative() {
        assert_eq!(
            ansi_emphasis(Emphasis::ITALIC | Emphasis::BOLD).as_str(),
            ansi_emphasis(Emphasis::BOLD | Emphasis::ITALIC).as_str()
        );
    }

    /// High bit values still come out after low bit values, regardless of how the
    /// mask was assembled.
    #[test]
    fn bit_order_beats_call_order() {
        assert_eq!(
            ansi_emphasis(Emphasis::OVERLINE | Emphasis::BOLD).as_str(),
            "\x1b[1;53m"
        );
    }

    /// Conflicting combinations pass through unvalidated; the terminal gets both.
    #[test]
    fn conflicting_flags_pass_through() {
        assert_eq!(
            ansi_emphasis(Emphasis::BOLD | Emphasis::NO_BOLD).as_str(),
            "\x1b[1;21m"
        );
    }

    #[test]
    fn no_encircle_aliases_no_frame() {
        assert_eq!(Emphasis::NO_ENCIRCLE, Emphasis::NO_FRAME);
        // One bit, one emitted code.
        assert_eq!(
            ansi_emphasis(Emphasis::NO_FRAME | Emphasis::NO_ENCIRCLE).as_str(),
            "\x1b[54m"
        );
    }

    #[test]
    fn undefined_bits_are_truncated() {
        let mask = Emphasis::from_bits_truncate((1 << 31) | Emphasis::BOLD.bits());
        assert_eq!(mask, Emphasis::BOLD);
    }

    #[test]
    fn every_flag_renders_its_code() {
        let all = Emphasis::all();
        let codes = render_emphasis(all);
        assert_eq!(codes.len(), 23);
        assert_eq!(codes.first(), Some(&SgrCode::Reset));
        assert_eq!(codes.last(), Some(&SgrCode::NoOverline));
    }

    #[test_case(Emphasis::DIM, "\x1b[2m")]
    #[test_case(Emphasis::SLOW_BLINK, "\x1b[5m")]
    #[test_case(Emphasis::RAPID_BLINK, "\x1b[6m")]
    #[test_case(Emphasis::INVERT, "\x1b[7m")]
    #[test_case(Emphasis::HIDDEN, "\x1b[8m")]
    #[test_case(Emphasis::STRIKETHROUGH, "\x1b[9m")]
    #[test_case(Emphasis::FRAKTUR, "\x1b[20m")]
    #[test_case(Emphasis::NORMAL_INTENSITY, "\x1b[22m")]
    #[test_case(Emphasis::NO_ITALIC, "\x1b[23m")]
    #[test_case(Emphasis::NO_UNDERLINE, "\x1b[24m")]
    #[test_case(Emphasis::NO_INVERT, "\x1b[25m")]
    #[test_case(Emphasis::REVEAL, "\x1b[28m")]
    #[test_case(Emphasis::NO_STRIKETHROUGH, "\x1b[29m")]
    #[test_case(Emphasis::FRAME, "\x1b[51m")]
    #[test_case(Emphasis::ENCIRCLE, "\x1b[52m")]
    #[test_case(Emphasis::OVERLINE, "\x1b[53m")]
    #[test_case(Emphasis::NO_OVERLINE, "\x1b[55m")]
    fn each_flag_maps_to_its_sgr_param(flag: Emphasis, expected: &str) {
        assert_eq!(ansi_emphasis(flag).as_str(), expected);
    }
}
