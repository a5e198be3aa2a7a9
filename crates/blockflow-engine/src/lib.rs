pub mod config;
pub mod language;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use config::{BorderStyle, OutputFormat, Palette, PaletteColor, PaletteError, RenderConfig};
pub use language::{Language, LanguageError};
pub use parsing::{
    blocks::{Anomaly, AnomalyKind, Category, Node, ParsedFlow},
    parse_flow, parse_source,
};
pub use render::{
    Canvas, DrawnLine, build_canvas, format_canvas, group_sections, layout, render,
};
