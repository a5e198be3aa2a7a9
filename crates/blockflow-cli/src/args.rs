use std::path::PathBuf;

use blockflow_engine::{BorderStyle, OutputFormat, RenderConfig};
use clap::{ArgGroup, Parser};

/// What the command line asked for.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "blockflow",
    version,
    about = "Draw a C or Python source file as nested boxes"
)]
#[command(group(ArgGroup::new("format").args(["ansi", "plain", "html"])))]
#[command(group(ArgGroup::new("style").args(["ascii", "unicode"])))]
pub struct CliArgs {
    /// Source file (.c, .h or .py)
    pub path: PathBuf,

    /// Color with terminal escape codes
    #[arg(long)]
    pub ansi: bool,

    /// Boxes only, no color
    #[arg(long)]
    pub plain: bool,

    /// A <pre> block of styled spans
    #[arg(long)]
    pub html: bool,

    /// Draw borders with +, - and |
    #[arg(long)]
    pub ascii: bool,

    /// Draw borders with box-drawing characters
    #[arg(long)]
    pub unicode: bool,

    /// Append the source line number to each box
    #[arg(long)]
    pub numbers: bool,

    /// Browse the result in a scrollable terminal view
    #[arg(long)]
    pub view: bool,
}

impl CliArgs {
    pub fn output(&self) -> Option<OutputFormat> {
        if self.ansi {
            Some(OutputFormat::Ansi)
        } else if self.plain {
            Some(OutputFormat::Plain)
        } else if self.html {
            Some(OutputFormat::Html)
        } else {
            None
        }
    }

    pub fn border(&self) -> Option<BorderStyle> {
        if self.ascii {
            Some(BorderStyle::Ascii)
        } else if self.unicode {
            Some(BorderStyle::Unicode)
        } else {
            None
        }
    }

    /// Command-line flags win over the config file.
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(output) = self.output() {
            config.output = output;
        }
        if let Some(border) = self.border() {
            config.border = border;
        }
        if self.numbers {
            config.show_line_numbers = true;
        }
        config
    }
}
