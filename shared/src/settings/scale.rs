//! Integer slider positions over decimal settings.
//!
//! A position is the stored value times ten, so every setting driven by a
//! slider keeps exactly one decimal digit.

use std::ops::RangeInclusive;

/// A labelled tick drawn under the slider track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderMark {
    pub position: u8,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderScale {
    pub min: u8,
    pub max: u8,
    pub mark: SliderMark,
}

/// Neutral value 1.0 sits at position 10 on both sliders.
const NEUTRAL_MARK: SliderMark = SliderMark {
    position: 10,
    label: "1",
};

pub const TEMPERATURE_SCALE: SliderScale = SliderScale {
    min: 0,
    max: 20,
    mark: NEUTRAL_MARK,
};

pub const FONT_SIZE_SCALE: SliderScale = SliderScale {
    min: 8,
    max: 12,
    mark: NEUTRAL_MARK,
};

impl SliderScale {
    pub fn range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    pub fn clamp(&self, position: u8) -> u8 {
        position.clamp(self.min, self.max)
    }

    /// Slider position for a stored value, rounded to the nearest tenth.
    pub fn position_of(&self, value: f32) -> u8 {
        let scaled = (value * 10.0).round();
        if scaled.is_nan() || scaled <= f32::from(self.min) {
            self.min
        } else if scaled >= f32::from(self.max) {
            self.max
        } else {
            scaled as u8
        }
    }

    /// Stored value for a slider position.
    pub fn value_of(&self, position: u8) -> f32 {
        f32::from(position) / 10.0
    }

    /// Tooltip text for a position: `10` -> "1", `15` -> "1.5", `8` -> "0.8".
    pub fn label(&self, position: u8) -> String {
        let (whole, tenths) = (position / 10, position % 10);
        if tenths == 0 {
            whole.to_string()
        } else {
            format!("{whole}.{tenths}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_round_trip() {
        for v in TEMPERATURE_SCALE.range() {
            let stored = TEMPERATURE_SCALE.value_of(v);
            assert_eq!(stored, v as f32 / 10.0);
            assert_eq!(TEMPERATURE_SCALE.position_of(stored), v);
        }
    }

    #[test]
    fn test_font_size_round_trip() {
        for v in FONT_SIZE_SCALE.range() {
            let stored = FONT_SIZE_SCALE.value_of(v);
            assert_eq!(stored, v as f32 / 10.0);
            assert_eq!(FONT_SIZE_SCALE.position_of(stored), v);
        }
    }

    #[test]
    fn test_position_of_rounds_and_clamps() {
        assert_eq!(TEMPERATURE_SCALE.position_of(0.74), 7);
        assert_eq!(TEMPERATURE_SCALE.position_of(0.76), 8);
        assert_eq!(TEMPERATURE_SCALE.position_of(-1.0), 0);
        assert_eq!(TEMPERATURE_SCALE.position_of(5.0), 20);
        assert_eq!(TEMPERATURE_SCALE.position_of(f32::NAN), 0);
        assert_eq!(FONT_SIZE_SCALE.position_of(0.5), 8);
        assert_eq!(FONT_SIZE_SCALE.position_of(2.0), 12);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TEMPERATURE_SCALE.label(0), "0");
        assert_eq!(TEMPERATURE_SCALE.label(7), "0.7");
        assert_eq!(TEMPERATURE_SCALE.label(10), "1");
        assert_eq!(TEMPERATURE_SCALE.label(15), "1.5");
        assert_eq!(TEMPERATURE_SCALE.label(20), "2");
        assert_eq!(FONT_SIZE_SCALE.label(8), "0.8");
    }

    #[test]
    fn test_neutral_mark() {
        assert_eq!(TEMPERATURE_SCALE.mark.position, 10);
        assert_eq!(FONT_SIZE_SCALE.mark.label, "1");
        assert!(FONT_SIZE_SCALE.range().contains(&FONT_SIZE_SCALE.mark.position));
    }
}
