//! Background themes
//!
//! The simulation only exposes a theme index; this maps it to a palette.

/// Sky gradient and parallax layer colors (RGBA)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub sky_top: [f32; 4],
    pub sky_bottom: [f32; 4],
    pub far_layer: [f32; 4],
    pub near_layer: [f32; 4],
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "meadow",
        sky_top: [0.49, 0.83, 0.99, 1.0],
        sky_bottom: [0.05, 0.65, 0.91, 1.0],
        far_layer: [0.13, 0.77, 0.37, 0.3],
        near_layer: [0.09, 0.64, 0.29, 0.3],
    },
    Theme {
        name: "dusk",
        sky_top: [0.51, 0.55, 0.97, 1.0],
        sky_bottom: [0.22, 0.19, 0.64, 1.0],
        far_layer: [0.22, 0.25, 0.32, 0.3],
        near_layer: [0.12, 0.16, 0.22, 0.3],
    },
    Theme {
        name: "desert",
        sky_top: [0.99, 0.83, 0.30, 1.0],
        sky_bottom: [0.94, 0.27, 0.27, 1.0],
        far_layer: [0.76, 0.25, 0.05, 0.3],
        near_layer: [0.60, 0.20, 0.07, 0.3],
    },
    Theme {
        name: "night",
        sky_top: [0.22, 0.25, 0.32, 1.0],
        sky_bottom: [0.07, 0.09, 0.15, 1.0],
        far_layer: [0.42, 0.13, 0.66, 0.2],
        near_layer: [0.35, 0.11, 0.53, 0.2],
    },
];

/// Palette for a theme index (cycles)
pub fn theme_for(index: u32) -> &'static Theme {
    &THEMES[index as usize % THEMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_cycle() {
        assert_eq!(theme_for(0).name, "meadow");
        assert_eq!(theme_for(3).name, "night");
        assert_eq!(theme_for(4).name, "meadow");
        assert_eq!(theme_for(6).name, "desert");
    }
}
