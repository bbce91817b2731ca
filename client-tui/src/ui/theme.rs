use chess::{Piece, PieceColor, PieceKind};
use ratatui::style::Color;

/// Which palette a [`Theme`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("light") => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GlyphSet {
    /// Outline glyphs for White, filled glyphs for Black (♔ / ♚).
    #[default]
    Unicode,
    /// Filled glyphs for both sides; color alone tells them apart.
    Solid,
    /// FEN letters: uppercase White, lowercase Black.
    Letters,
}

#[rustfmt::skip]
const OUTLINE: [&str; 6] = ["♙", "♘", "♗", "♖", "♕", "♔"];
#[rustfmt::skip]
const FILLED: [&str; 6] = ["♟", "♞", "♝", "♜", "♛", "♚"];
#[rustfmt::skip]
const UPPER: [&str; 6] = ["P", "N", "B", "R", "Q", "K"];
#[rustfmt::skip]
const LOWER: [&str; 6] = ["p", "n", "b", "r", "q", "k"];

fn glyph_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => 0,
        PieceKind::Knight => 1,
        PieceKind::Bishop => 2,
        PieceKind::Rook => 3,
        PieceKind::Queen => 4,
        PieceKind::King => 5,
    }
}

impl GlyphSet {
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
            Some("solid") => Self::Solid,
            Some("letters") => Self::Letters,
            _ => Self::Unicode,
        }
    }

    pub fn glyph(self, piece: Piece) -> &'static str {
        let table = match (self, piece.color) {
            (Self::Unicode, PieceColor::White) => &OUTLINE,
            (Self::Unicode, PieceColor::Black) | (Self::Solid, _) => &FILLED,
            (Self::Letters, PieceColor::White) => &UPPER,
            (Self::Letters, PieceColor::Black) => &LOWER,
        };
        table[glyph_index(piece.kind)]
    }

    pub fn next(self) -> Self {
        match self {
            Self::Unicode => Self::Solid,
            Self::Solid => Self::Letters,
            Self::Letters => Self::Unicode,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unicode => "Unicode",
            Self::Solid => "Solid",
            Self::Letters => "Letters",
        }
    }
}

/// All colors used by the TUI, grouped by purpose, plus the glyph set.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    pub variant: ThemeVariant,
    pub glyphs: GlyphSet,

    // ── Board ──────────────────────────────────────────────────────
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub board_border: Color,
    pub board_label: Color,

    // ── Overlays (light-square variant, dark-square variant) ──────
    pub overlay_selected: (Color, Color),
    pub overlay_legal_move: (Color, Color),
    pub overlay_last_move: (Color, Color),
    pub overlay_drop_legal: (Color, Color),
    pub overlay_drop_illegal: (Color, Color),

    // ── Panel chrome ──────────────────────────────────────────────
    pub panel_border: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub info: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Theme {
    /// Designed for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            glyphs: GlyphSet::default(),

            light_square: Color::Rgb(240, 217, 181),
            dark_square: Color::Rgb(181, 136, 99),
            // Explicit RGB: terminals remap the ANSI White/Black slots.
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(0, 0, 0),
            board_border: Color::Cyan,
            board_label: Color::Yellow,

            overlay_selected: (Color::LightYellow, Color::Yellow),
            overlay_legal_move: (Color::LightBlue, Color::Blue),
            overlay_last_move: (Color::Rgb(205, 210, 106), Color::Rgb(170, 162, 58)),
            overlay_drop_legal: (Color::LightGreen, Color::Green),
            overlay_drop_illegal: (Color::LightRed, Color::Red),

            panel_border: Color::Cyan,

            positive: Color::Green,
            warning: Color::Yellow,
            negative: Color::Red,
            info: Color::Cyan,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Designed for terminals with a light background. Darker board squares
    /// so white pieces keep their contrast.
    pub fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            glyphs: GlyphSet::default(),

            light_square: Color::Rgb(210, 180, 140),
            dark_square: Color::Rgb(150, 110, 70),
            white_piece: Color::Rgb(255, 255, 255),
            black_piece: Color::Rgb(30, 30, 30),
            board_border: Color::Rgb(60, 60, 60),
            board_label: Color::Rgb(100, 80, 50),

            overlay_selected: (Color::Rgb(220, 200, 80), Color::Rgb(180, 160, 40)),
            overlay_legal_move: (Color::Rgb(100, 160, 220), Color::Rgb(60, 120, 180)),
            overlay_last_move: (Color::Rgb(200, 200, 120), Color::Rgb(160, 160, 80)),
            overlay_drop_legal: (Color::Rgb(80, 180, 80), Color::Rgb(40, 140, 40)),
            overlay_drop_illegal: (Color::Rgb(220, 80, 80), Color::Rgb(180, 40, 40)),

            panel_border: Color::Rgb(60, 120, 140),

            positive: Color::Rgb(30, 140, 30),
            warning: Color::Rgb(180, 140, 0),
            negative: Color::Rgb(200, 40, 40),
            info: Color::Rgb(30, 120, 150),
            muted: Color::Rgb(150, 150, 150),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(100, 100, 100),
        }
    }

    pub fn new(variant: ThemeVariant, glyphs: GlyphSet) -> Self {
        let mut theme = match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        };
        theme.glyphs = glyphs;
        theme
    }

    /// Toggle between dark and light palettes, keeping the glyph set.
    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        };
        *self = Self::new(next, self.glyphs);
    }

    pub fn cycle_glyphs(&mut self) {
        self.glyphs = self.glyphs.next();
    }

    pub fn is_dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }

    /// Human-readable name of the current theme variant.
    pub fn name(&self) -> &'static str {
        if self.is_dark() {
            "Dark"
        } else {
            "Light"
        }
    }

    pub fn glyph(&self, piece: Piece) -> &'static str {
        self.glyphs.glyph(piece)
    }

    pub fn piece_fg(&self, color: PieceColor) -> Color {
        match color {
            PieceColor::White => self.white_piece,
            PieceColor::Black => self.black_piece,
        }
    }

    /// Background for a square, with an optional overlay on top.
    pub fn square_bg(&self, is_light_square: bool, overlay: Option<OverlayKind>) -> Color {
        match overlay {
            Some(kind) => self.resolve_overlay(kind, is_light_square),
            None if is_light_square => self.light_square,
            None => self.dark_square,
        }
    }

    /// Resolve an overlay color pair for a given square.
    pub fn resolve_overlay(&self, overlay: OverlayKind, is_light_square: bool) -> Color {
        let (light, dark) = match overlay {
            OverlayKind::Selected => self.overlay_selected,
            OverlayKind::LegalMove => self.overlay_legal_move,
            OverlayKind::LastMove => self.overlay_last_move,
            OverlayKind::DropLegal => self.overlay_drop_legal,
            OverlayKind::DropIllegal => self.overlay_drop_illegal,
        };
        if is_light_square {
            light
        } else {
            dark
        }
    }
}

/// Square decorations, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    DropLegal,
    DropIllegal,
    Selected,
    LegalMove,
    LastMove,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_is_dark() {
        let theme = Theme::dark();
        assert!(theme.is_dark());
        assert_eq!(theme.name(), "Dark");
    }

    #[test]
    fn light_theme_is_not_dark() {
        let theme = Theme::light();
        assert!(!theme.is_dark());
        assert_eq!(theme.name(), "Light");
    }

    #[test]
    fn toggle_switches_variant_and_keeps_glyphs() {
        let mut theme = Theme::new(ThemeVariant::Dark, GlyphSet::Letters);
        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(theme.glyphs, GlyphSet::Letters);

        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn preference_falls_back_to_defaults() {
        assert_eq!(ThemeVariant::from_preference(Some("light")), ThemeVariant::Light);
        assert_eq!(ThemeVariant::from_preference(Some("LIGHT")), ThemeVariant::Light);
        assert_eq!(ThemeVariant::from_preference(Some("bogus")), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::from_preference(None), ThemeVariant::Dark);

        assert_eq!(GlyphSet::from_preference(Some("letters")), GlyphSet::Letters);
        assert_eq!(GlyphSet::from_preference(Some("solid")), GlyphSet::Solid);
        assert_eq!(GlyphSet::from_preference(None), GlyphSet::Unicode);
    }

    #[test]
    fn glyph_lookup_by_kind_color_and_set() {
        let white_king = Piece::new(PieceKind::King, PieceColor::White);
        let black_pawn = Piece::new(PieceKind::Pawn, PieceColor::Black);

        assert_eq!(GlyphSet::Unicode.glyph(white_king), "♔");
        assert_eq!(GlyphSet::Unicode.glyph(black_pawn), "♟");
        assert_eq!(GlyphSet::Solid.glyph(white_king), "♚");
        assert_eq!(GlyphSet::Letters.glyph(white_king), "K");
        assert_eq!(GlyphSet::Letters.glyph(black_pawn), "p");
    }

    #[test]
    fn glyph_sets_cycle() {
        let mut set = GlyphSet::Unicode;
        for _ in 0..3 {
            set = set.next();
        }
        assert_eq!(set, GlyphSet::Unicode);
    }

    #[test]
    fn overlays_override_square_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.square_bg(true, None), theme.light_square);
        assert_eq!(theme.square_bg(false, None), theme.dark_square);
        assert_eq!(
            theme.square_bg(true, Some(OverlayKind::Selected)),
            theme.overlay_selected.0
        );
        assert_eq!(
            theme.square_bg(false, Some(OverlayKind::DropIllegal)),
            theme.overlay_drop_illegal.1
        );
    }
}
