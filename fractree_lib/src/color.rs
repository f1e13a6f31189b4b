/*
 * Branch colors
 * Every child branch derives its color from its parent by blending toward a
 * fixed hue. Summer blends keep a natural tint, winter blends add a brightness
 * term proportional to the remaining depth which whitens the tree near its
 * trunk.
 */
use crate::state::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BARK: Rgb = Rgb::new(155, 100, 60);
    pub const MINT: Rgb = Rgb::new(164, 236, 213);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB`.
    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | (self.b as u32)
    }

    pub fn from_u32(value: u32) -> Rgb {
        Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Rgb {
        Rgb::new(rgb[0], rgb[1], rgb[2])
    }
}

// truncate toward zero, then clamp
fn channel(value: f64) -> u8 {
    let value = value.trunc();
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

fn blend(parent: Rgb, hue: Rgb, keep: f64, mix: f64, boost: f64) -> Rgb {
    let mixed = |p: u8, h: u8| channel(keep * p as f64 + mix * h as f64 + boost);

    Rgb::new(
        mixed(parent.r, hue.r),
        mixed(parent.g, hue.g),
        mixed(parent.b, hue.b),
    )
}

fn winter_boost(depth: i32) -> f64 {
    0.04 * depth as f64 * 255.0
}

/// Color derivation strategy for a given season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    season: Season,
}

impl ColorScheme {
    pub fn new(season: Season) -> ColorScheme {
        ColorScheme { season }
    }

    pub fn left(&self, parent: Rgb, depth: i32) -> Rgb {
        self.side(parent, Rgb::GREEN, depth)
    }

    pub fn right(&self, parent: Rgb, depth: i32) -> Rgb {
        self.side(parent, Rgb::YELLOW, depth)
    }

    pub fn center(&self, parent: Rgb, depth: i32) -> Rgb {
        match self.season {
            Season::Summer => blend(parent, Rgb::GREEN, 0.8, 0.2, 0.0),
            Season::Winter => blend(parent, Rgb::WHITE, 0.8, 0.1, winter_boost(depth)),
        }
    }

    fn side(&self, parent: Rgb, hue: Rgb, depth: i32) -> Rgb {
        match self.season {
            Season::Summer => blend(parent, hue, 0.9, 0.1, 0.0),
            Season::Winter => blend(parent, hue, 0.8, 0.1, winter_boost(depth)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        assert_eq!(0x9B643C, Rgb::BARK.to_u32());
        assert_eq!(Rgb::BARK, Rgb::from_u32(0x9B643C));
        assert_eq!(Rgb::MINT, Rgb::from([164, 236, 213]));
    }

    #[test]
    fn test_channel_truncates_then_clamps() {
        assert_eq!(139, channel(139.9));
        assert_eq!(0, channel(-12.5));
        assert_eq!(255, channel(300.0));
        assert_eq!(0, channel(f64::NAN));
    }

    #[test]
    fn test_summer_blends() {
        let scheme = ColorScheme::new(Season::Summer);
        // 0.9 * 155 = 139.5, 0.9 * 100 + 25.5 = 115.5, 0.9 * 60 = 54
        assert_eq!(Rgb::new(139, 115, 54), scheme.left(Rgb::BARK, 5));
        // 0.9 * 155 + 25.5 = 165, 0.9 * 100 + 25.5 = 115.5
        assert_eq!(Rgb::new(165, 115, 54), scheme.right(Rgb::BARK, 5));
        // 0.8 * 155 = 124, 0.8 * 100 + 51 = 131, 0.8 * 60 = 48
        assert_eq!(Rgb::new(124, 131, 48), scheme.center(Rgb::BARK, 5));
    }

    #[test]
    fn test_summer_ignores_depth() {
        let scheme = ColorScheme::new(Season::Summer);
        assert_eq!(scheme.left(Rgb::BARK, 1), scheme.left(Rgb::BARK, 10));
        assert_eq!(scheme.center(Rgb::BARK, 1), scheme.center(Rgb::BARK, 10));
    }

    #[test]
    fn test_winter_blends() {
        let scheme = ColorScheme::new(Season::Winter);
        // boost at depth 1 is 10.2
        // 0.8 * 155 + 10.2 = 134.2, 0.8 * 100 + 25.5 + 10.2 = 115.7, 0.8 * 60 + 10.2 = 58.2
        assert_eq!(Rgb::new(134, 115, 58), scheme.left(Rgb::BARK, 1));
        // 0.8 * 155 + 25.5 + 10.2 = 159.7
        assert_eq!(Rgb::new(159, 115, 58), scheme.right(Rgb::BARK, 1));
        // white adds 25.5 on every channel
        assert_eq!(Rgb::new(159, 115, 83), scheme.center(Rgb::BARK, 1));
    }

    #[test]
    fn test_winter_saturates() {
        let scheme = ColorScheme::new(Season::Winter);
        assert_eq!(Rgb::WHITE, scheme.center(Rgb::BARK, 30));
        assert_eq!(Rgb::WHITE, scheme.left(Rgb::WHITE, 10));
    }

    #[test]
    fn test_blends_stay_between_parent_and_hue() {
        let parents = [
            Rgb::new(0, 0, 0),
            Rgb::BARK,
            Rgb::WHITE,
            Rgb::new(255, 0, 128),
            Rgb::new(3, 250, 77),
        ];
        let within = |value: u8, a: u8, b: u8| value >= a.min(b) && value <= a.max(b);
        let summer = ColorScheme::new(Season::Summer);
        let winter = ColorScheme::new(Season::Winter);

        for parent in parents {
            for depth in -2..40 {
                for (child, hue) in [
                    (summer.left(parent, depth), Rgb::GREEN),
                    (summer.center(parent, depth), Rgb::GREEN),
                    (summer.right(parent, depth), Rgb::YELLOW),
                ] {
                    assert!(within(child.r, parent.r, hue.r), "{:?} from {:?}", child, parent);
                    assert!(within(child.g, parent.g, hue.g), "{:?} from {:?}", child, parent);
                    assert!(within(child.b, parent.b, hue.b), "{:?} from {:?}", child, parent);
                }
                if depth >= 0 {
                    let child = winter.left(parent, depth);
                    assert!(child.r >= channel(0.8 * parent.r as f64));
                    assert!(child.b >= channel(0.8 * parent.b as f64));
                }
            }
        }
    }
}
