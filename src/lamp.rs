//! Lamp visual state and blending between states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::interpolate::{interpolate_hue, interpolate_linear};

/// The visual state of a smart lamp.
///
/// Holds the attributes a fade operates on:
/// - Hue: the color angle on the color wheel (0-359 degrees)
/// - Saturation: the intensity of the color (0-100 percent)
/// - Brightness: the light output (0-100 percent)
/// - On: whether the lamp is emitting light at all
///
/// The fields are plain integers and no ranges are enforced on them; the
/// interpolation helpers are total over all integer inputs. Callers that want
/// validated values can use [`Lamp::create`].
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Lamp {
    pub hue: i32,
    pub saturation: i32,
    pub brightness: i32,
    pub on: bool,
}

impl Lamp {
    const MAX_HUE: i32 = 359;
    const MAX_PERCENT: i32 = 100;

    /// Create a lamp state with the given values, unvalidated.
    pub fn new(hue: i32, saturation: i32, brightness: i32, on: bool) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            on,
        }
    }

    /// Create a lamp state with the given values, validated.
    ///
    /// Returns `None` if hue is outside 0-359 or saturation/brightness are
    /// outside 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lamp_fade_rs::Lamp;
    ///
    /// assert!(Lamp::create(0, 100, 100, true).is_some());
    /// assert!(Lamp::create(360, 50, 50, true).is_none()); // Invalid hue
    /// assert!(Lamp::create(180, 101, 50, true).is_none()); // Invalid saturation
    /// ```
    pub fn create(hue: i32, saturation: i32, brightness: i32, on: bool) -> Option<Self> {
        if (0..=Self::MAX_HUE).contains(&hue)
            && (0..=Self::MAX_PERCENT).contains(&saturation)
            && (0..=Self::MAX_PERCENT).contains(&brightness)
        {
            Some(Self::new(hue, saturation, brightness, on))
        } else {
            None
        }
    }

    /// Compute the intermediate state between this lamp and `target` at the
    /// given fractional position.
    ///
    /// Hue follows the shorter arc of the color wheel; saturation and
    /// brightness fade linearly. The blended frame carries the target's `on`
    /// flag, so a fade toward a powered-off state still dims through lit
    /// frames while a fade toward a powered-on state lights up immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use lamp_fade_rs::Lamp;
    ///
    /// let red = Lamp::new(350, 100, 20, true);
    /// let orange = Lamp::new(10, 50, 80, true);
    /// let frame = red.blend(&orange, 0.5);
    /// assert_eq!(frame, Lamp::new(0, 75, 50, true));
    /// ```
    pub fn blend(&self, target: &Lamp, position: f64) -> Lamp {
        Lamp {
            hue: interpolate_hue(self.hue, target.hue, position),
            saturation: interpolate_linear(self.saturation, target.saturation, position),
            brightness: interpolate_linear(self.brightness, target.brightness, position),
            on: target.on,
        }
    }
}

impl FromStr for Lamp {
    type Err = Error;

    /// Parse from a comma-separated string (e.g., "120,100,80"), in the
    /// order hue, saturation, brightness. The lamp is parsed as on.
    fn from_str(s: &str) -> Result<Self, Error> {
        let parts: Vec<i32> = s
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| Error::invalid_lamp_string(s))?;
        if parts.len() == 3 {
            Ok(Self::new(parts[0], parts[1], parts[2], true))
        } else {
            Err(Error::invalid_lamp_string(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_validates_ranges() {
        assert!(Lamp::create(359, 0, 0, false).is_some());
        assert!(Lamp::create(-1, 50, 50, true).is_none());
        assert!(Lamp::create(0, 50, 101, true).is_none());
    }

    #[test]
    fn test_blend_endpoints() {
        let from = Lamp::new(40, 10, 90, true);
        let to = Lamp::new(300, 80, 30, false);

        let start = from.blend(&to, 0.0);
        assert_eq!(start.hue, 40);
        assert_eq!(start.saturation, 10);
        assert_eq!(start.brightness, 90);

        assert_eq!(from.blend(&to, 1.0), to);
    }

    #[test]
    fn test_blend_hue_wraps_across_zero() {
        let from = Lamp::new(350, 100, 100, true);
        let to = Lamp::new(10, 100, 100, true);
        assert_eq!(from.blend(&to, 0.5).hue, 0);
    }

    #[test]
    fn test_blend_carries_target_on_flag() {
        let lit = Lamp::new(0, 0, 100, true);
        let dark = Lamp::new(0, 0, 0, false);
        assert!(!lit.blend(&dark, 0.5).on);
        assert!(dark.blend(&lit, 0.5).on);
    }

    #[test]
    fn test_from_str() {
        let lamp: Lamp = "120,100,80".parse().unwrap();
        assert_eq!(lamp, Lamp::new(120, 100, 80, true));

        assert!("120,100".parse::<Lamp>().is_err());
        assert!("120,100,80,1".parse::<Lamp>().is_err());
        assert!("red,100,80".parse::<Lamp>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let lamp = Lamp::new(120, 100, 80, true);
        let value = serde_json::to_value(&lamp).unwrap();
        assert_eq!(
            value,
            json!({"hue": 120, "saturation": 100, "brightness": 80, "on": true})
        );

        let back: Lamp = serde_json::from_value(value).unwrap();
        assert_eq!(back, lamp);
    }
}
