use ratatui::style::Color;

use crate::config::ThemeKind;
use crate::game::Side;

/// Colors for one look of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub board: Color,
    pub hole: Color,
    pub text: Color,
    pub accent: Color,
    first: Color,
    second: Color,
}

const RED: Color = Color::Rgb(220, 50, 47);
const YELLOW: Color = Color::Rgb(241, 196, 15);

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(240, 240, 240),
            board: Color::Rgb(33, 97, 171),
            hole: Color::Rgb(220, 220, 220),
            text: Color::Rgb(30, 30, 30),
            accent: Color::Rgb(0, 120, 140),
            first: RED,
            second: YELLOW,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(22, 27, 34),
            board: Color::Rgb(32, 78, 141),
            hole: Color::Rgb(200, 200, 200),
            text: Color::Rgb(230, 230, 230),
            accent: Color::Cyan,
            first: RED,
            second: YELLOW,
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Disc color for a side
    pub fn disc(&self, side: Side) -> Color {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_colors_are_shared_across_themes() {
        for side in Side::BOTH {
            assert_eq!(Theme::light().disc(side), Theme::dark().disc(side));
        }
        assert_ne!(Theme::light().disc(Side::First), Theme::light().disc(Side::Second));
    }

    #[test]
    fn kinds_map_to_palettes() {
        assert_eq!(Theme::for_kind(ThemeKind::Dark), Theme::dark());
        assert_ne!(Theme::light().background, Theme::dark().background);
    }
}
