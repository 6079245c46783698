use crate::core::types::MenuCommand;
use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};
use strum::IntoEnumIterator;

/// Screen-level helpers: the startup banner, command help and prompts.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}G R A D E B O O K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Student grade register{STYLE_RESET}");
        writeln!(out, "╭{}╮", "─".repeat(INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(&title, INNER_WIDTH))?;
        writeln!(out, "│{}│", self.center_in_box(&subtitle, INNER_WIDTH))?;
        writeln!(out, "╰{}╯", "─".repeat(INNER_WIDTH))
    }

    pub fn write_help<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Supported commands:")?;
        for cmd in MenuCommand::iter() {
            writeln!(out, "  {:<8} - {}", cmd.as_ref(), cmd.help())?;
        }
        Ok(())
    }

    /// Writes `prompt` without a newline and flushes so it shows before input is read.
    pub fn write_prompt<W: Write + ?Sized>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        write!(out, "{prompt}")?;
        out.flush()
    }

    pub(crate) fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
