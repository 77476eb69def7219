//! Color themes and glyphs for the TJD-Toolkit TUI.
//!
//! Dark uses the Kanagawa Wave palette, light uses Kanagawa Lotus, and system
//! leaves foreground/background to the terminal and only uses named ANSI colors.

use ratatui::style::{Color, Modifier, Style};

use tjd_types::ThemeMode;
use tjd_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod wave {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Kanagawa Lotus color palette constants.
mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite4
    pub const BG_HIGHLIGHT: Color = Color::Rgb(228, 214, 142); // lotusWhite5
    pub const BG_BORDER: Color = Color::Rgb(160, 157, 131); // lotusGray2

    pub const TEXT_PRIMARY: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_SECONDARY: Color = Color::Rgb(67, 67, 108); // lotusInk2
    pub const TEXT_MUTED: Color = Color::Rgb(138, 137, 128); // lotusGray3

    pub const PRIMARY: Color = Color::Rgb(98, 76, 131); // lotusViolet4
    pub const BLUE: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const AQUA: Color = Color::Rgb(89, 123, 117); // lotusAqua
    pub const GREEN: Color = Color::Rgb(111, 137, 78); // lotusGreen
    pub const YELLOW: Color = Color::Rgb(119, 113, 63); // lotusYellow
    pub const ORANGE: Color = Color::Rgb(204, 109, 0); // lotusOrange
    pub const RED: Color = Color::Rgb(200, 64, 83); // lotusRed
}

/// Light to dark red, one shade per wrong answer.
const MISS_SHADES: [Color; 5] = [
    Color::Rgb(255, 205, 210),
    Color::Rgb(229, 115, 115),
    Color::Rgb(244, 67, 54),
    Color::Rgb(211, 47, 47),
    Color::Rgb(183, 28, 28),
];

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub blue: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub peach: Color,
    pub miss_shades: [Color; 5],
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG_DARK,
            bg_panel: wave::BG_PANEL,
            bg_highlight: wave::BG_HIGHLIGHT,
            bg_border: wave::BG_BORDER,
            text_primary: wave::TEXT_PRIMARY,
            text_secondary: wave::TEXT_SECONDARY,
            text_muted: wave::TEXT_MUTED,
            primary: wave::PRIMARY,
            accent: wave::CYAN,
            blue: wave::BLUE,
            success: wave::GREEN,
            warning: wave::YELLOW,
            error: wave::RED,
            peach: wave::ORANGE,
            miss_shades: MISS_SHADES,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            bg_highlight: lotus::BG_HIGHLIGHT,
            bg_border: lotus::BG_BORDER,
            text_primary: lotus::TEXT_PRIMARY,
            text_secondary: lotus::TEXT_SECONDARY,
            text_muted: lotus::TEXT_MUTED,
            primary: lotus::PRIMARY,
            accent: lotus::AQUA,
            blue: lotus::BLUE,
            success: lotus::GREEN,
            warning: lotus::YELLOW,
            error: lotus::RED,
            peach: lotus::ORANGE,
            miss_shades: MISS_SHADES,
        }
    }

    /// Terminal defaults for text and background, named colors for accents.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            bg: Color::Reset,
            bg_panel: Color::Reset,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            text_muted: Color::DarkGray,
            primary: Color::Magenta,
            accent: Color::Cyan,
            blue: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            peach: Color::LightRed,
            miss_shades: [
                Color::LightRed,
                Color::LightRed,
                Color::Red,
                Color::Red,
                Color::Red,
            ],
        }
    }

    /// Color for the `index`-th wrong answer (0-based).
    #[must_use]
    pub fn miss_shade(&self, index: usize) -> Color {
        self.miss_shades[index.min(self.miss_shades.len() - 1)]
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    match options.theme {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
        ThemeMode::System => Palette::terminal(),
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub tool: &'static str,
    pub coming_soon: &'static str,
    pub selected: &'static str,
    pub back: &'static str,
    pub home: &'static str,
    pub construction: &'static str,
    pub miss: &'static str,
    pub correct: &'static str,
    pub best: &'static str,
    pub new_best: &'static str,
    pub game_over: &'static str,
    pub stats: &'static str,
    pub bullet: &'static str,
    pub cursor: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            tool: "[*]",
            coming_soon: "[ ]",
            selected: ">",
            back: "<-",
            home: "<<",
            construction: "!!",
            miss: "x",
            correct: "+",
            best: "#",
            new_best: "*",
            game_over: "==",
            stats: "--",
            bullet: "*",
            cursor: "_",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            tool: "⧗",
            coming_soon: "⧖",
            selected: "▸",
            back: "←",
            home: "⌂",
            construction: "⚠",
            miss: "✗",
            correct: "✓",
            best: "♛",
            new_best: "★",
            game_over: "◆",
            stats: "≡",
            bullet: "•",
            cursor: "▏",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn card_border(palette: &Palette, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.bg_border)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
