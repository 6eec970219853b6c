//! Ten-step color ramps for bucket coloring.

/// Sequential green ramp, light to dark (ColorBrewer Greens).
const GREENS: [&str; 10] = [
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b", "#00290f",
];

/// Diverging red-yellow-green ramp (ColorBrewer RdYlGn).
const RD_YL_GN: [&str; 10] = [
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#d9ef8b", "#a6d96a", "#66bd63",
    "#1a9850", "#006837",
];

/// A named ten-color ramp mapping bucket indices to fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Sequential greens, for magnitude-like values.
    #[default]
    Greens,
    /// Diverging red-to-green, for signed values such as daily changes.
    RdYlGn,
}

impl Palette {
    /// Returns the ramp's colors, bucket 0 first.
    pub fn colors(self) -> &'static [&'static str; 10] {
        match self {
            Palette::Greens => &GREENS,
            Palette::RdYlGn => &RD_YL_GN,
        }
    }

    /// Returns the fill color for a bucket index, clamped to the ramp.
    pub fn color(self, bucket: usize) -> &'static str {
        self.colors()[bucket.min(9)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_colors_each() {
        assert_eq!(Palette::Greens.colors().len(), 10);
        assert_eq!(Palette::RdYlGn.colors().len(), 10);
    }

    #[test]
    fn bucket_lookup() {
        assert_eq!(Palette::Greens.color(0), "#f7fcf5");
        assert_eq!(Palette::RdYlGn.color(9), "#006837");
    }

    #[test]
    fn out_of_range_clamps_to_darkest() {
        assert_eq!(Palette::Greens.color(99), Palette::Greens.color(9));
    }

    #[test]
    fn all_entries_are_hex_colors() {
        for palette in [Palette::Greens, Palette::RdYlGn] {
            for color in palette.colors() {
                assert!(color.starts_with('#') && color.len() == 7, "bad: {color}");
            }
        }
    }
}
