//! Status accent colors, taken from the shell's design palette.

use limbo_core::DictationStatus;

/// An RGB accent color.
pub type Rgb = (u8, u8, u8);

const COLOR_RECORDING: Rgb = (255, 51, 102);
const COLOR_TRANSCRIBING: Rgb = (255, 170, 0);
const COLOR_SUCCESS: Rgb = (0, 255, 159);
const COLOR_IDLE: Rgb = (142, 142, 147);

/// The accent color used for the status ring and glow bar.
pub fn accent(status: &DictationStatus) -> Rgb {
    match status {
        DictationStatus::Idle => COLOR_IDLE,
        DictationStatus::Recording => COLOR_RECORDING,
        DictationStatus::Transcribing => COLOR_TRANSCRIBING,
        DictationStatus::Success { .. } => COLOR_SUCCESS,
        DictationStatus::Error => COLOR_RECORDING,
    }
}
