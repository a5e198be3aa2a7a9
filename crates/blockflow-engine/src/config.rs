use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default row width budget, in characters of box width.
pub const DEFAULT_LINE_WIDTH: usize = 100;
/// Default columns of offset per nesting level.
pub const DEFAULT_INDENT_UNIT: usize = 4;

/// One color a box can be drawn in.
///
/// Each variant knows its terminal escape code and its markup color, so every
/// formatter agrees on what "the color for depth 3" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    BrightBlue,
    BrightGreen,
    BrightYellow,
    BrightRed,
    BrightMagenta,
    BrightCyan,
    Yellow,
    Cyan,
    LightGray,
    DarkGray,
    RedBackground,
    GreenBackground,
    YellowBackground,
    BlueBackground,
}

impl PaletteColor {
    /// SGR parameter, e.g. `94` for bright blue.
    pub fn ansi_code(self) -> u8 {
        match self {
            PaletteColor::BrightBlue => 94,
            PaletteColor::BrightGreen => 92,
            PaletteColor::BrightYellow => 93,
            PaletteColor::BrightRed => 91,
            PaletteColor::BrightMagenta => 95,
            PaletteColor::BrightCyan => 96,
            PaletteColor::Yellow => 33,
            PaletteColor::Cyan => 36,
            PaletteColor::LightGray => 37,
            PaletteColor::DarkGray => 90,
            PaletteColor::RedBackground => 41,
            PaletteColor::GreenBackground => 42,
            PaletteColor::YellowBackground => 43,
            PaletteColor::BlueBackground => 44,
        }
    }

    pub fn html_hex(self) -> &'static str {
        match self {
            PaletteColor::BrightBlue => "#1E90FF",
            PaletteColor::BrightGreen => "#32CD32",
            PaletteColor::BrightYellow => "#FFD700",
            PaletteColor::BrightRed => "#FF4500",
            PaletteColor::BrightMagenta => "#8A2BE2",
            PaletteColor::BrightCyan => "#00CED1",
            PaletteColor::Yellow => "#FFA500",
            PaletteColor::Cyan => "#20B2AA",
            PaletteColor::LightGray => "#D3D3D3",
            PaletteColor::DarkGray => "#A9A9A9",
            PaletteColor::RedBackground => "#B22222",
            PaletteColor::GreenBackground => "#228B22",
            PaletteColor::YellowBackground => "#B8860B",
            PaletteColor::BlueBackground => "#4169E1",
        }
    }

    /// Background variants fill the box instead of coloring its text.
    pub fn is_background(self) -> bool {
        matches!(
            self,
            PaletteColor::RedBackground
                | PaletteColor::GreenBackground
                | PaletteColor::YellowBackground
                | PaletteColor::BlueBackground
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Ordered, non-empty list of depth colors; depth `d` uses entry `d % len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteColor>", into = "Vec<PaletteColor>")]
pub struct Palette(Vec<PaletteColor>);

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self(colors))
    }

    pub fn color_for_depth(&self, depth: usize) -> PaletteColor {
        self.0[depth % self.0.len()]
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        use PaletteColor::*;
        Self(vec![
            BrightBlue,
            BrightGreen,
            BrightYellow,
            BrightRed,
            BrightMagenta,
            BrightCyan,
            Yellow,
            Cyan,
            LightGray,
            RedBackground,
            GreenBackground,
            YellowBackground,
            BlueBackground,
        ])
    }
}

impl TryFrom<Vec<PaletteColor>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<PaletteColor>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<PaletteColor> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// `+---+` and `|`.
    #[default]
    Ascii,
    /// Box-drawing characters.
    Unicode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Terminal escape codes.
    #[default]
    Ansi,
    /// Boxes only, no color.
    Plain,
    /// A `<pre>` block of styled spans.
    Html,
}

/// Everything a render call needs besides the source itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Budget for the summed widths of the boxes in one row.
    pub line_width: usize,
    /// Offset columns per nesting level.
    pub indent_unit: usize,
    pub palette: Palette,
    pub border: BorderStyle,
    pub output: OutputFormat,
    /// Fixed color for comment boxes; `None` colors them by depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_color: Option<PaletteColor>,
    /// Append `Line N` to the first content line of each box.
    pub show_line_numbers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            indent_unit: DEFAULT_INDENT_UNIT,
            palette: Palette::default(),
            border: BorderStyle::default(),
            output: OutputFormat::default(),
            comment_color: None,
            show_line_numbers: false,
        }
    }
}

impl RenderConfig {
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::Empty));
    }

    #[test]
    fn palette_cycles_by_depth() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 13);
        assert_eq!(palette.color_for_depth(0), PaletteColor::BrightBlue);
        assert_eq!(palette.color_for_depth(13), PaletteColor::BrightBlue);
        assert_eq!(palette.color_for_depth(14), PaletteColor::BrightGreen);
    }

    #[test]
    fn default_palette_codes() {
        let codes: Vec<u8> = Palette::default()
            .colors()
            .iter()
            .map(|c| c.ansi_code())
            .collect();
        assert_eq!(
            codes,
            vec![94, 92, 93, 91, 95, 96, 33, 36, 37, 41, 42, 43, 44]
        );
    }

    #[test]
    fn background_variants() {
        assert!(PaletteColor::BlueBackground.is_background());
        assert!(!PaletteColor::BrightBlue.is_background());
    }
}
