//! Colours: [`Color`] and the role palette.

use gridstar_core::Role;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const GREY: Color = Color::from_rgb(128, 128, 128);

pub const STATUS_FG: Color = Color::from_rgb(200, 200, 200);
pub const STATUS_BG: Color = Color::from_rgb(30, 30, 50);

/// Fill colour of a cell with the given role.
pub const fn role_color(role: Role) -> Color {
    match role {
        Role::Empty => WHITE,
        Role::Start => ORANGE,
        Role::Goal => TURQUOISE,
        Role::Barrier => BLACK,
        Role::Frontier => GREEN,
        Role::Visited => RED,
        Role::Path => PURPLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_components() {
        let c = Color::from_rgb(64, 224, 208);
        assert_eq!((c.r(), c.g(), c.b()), (64, 224, 208));
        assert_eq!(c, TURQUOISE);
    }

    #[test]
    fn roles_have_distinct_colors() {
        let roles = [
            Role::Empty,
            Role::Start,
            Role::Goal,
            Role::Barrier,
            Role::Frontier,
            Role::Visited,
            Role::Path,
        ];
        for (i, a) in roles.iter().enumerate() {
            for b in &roles[i + 1..] {
                assert_ne!(role_color(*a), role_color(*b), "{a:?} vs {b:?}");
            }
        }
    }
}
