use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEPARATOR: &str = " | ";

/// Renders a titled, `|`-separated table framed by dashed rules.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let col_widths = self.compute_col_widths(headers, rows);
        if col_widths.is_empty() {
            return 0;
        }
        col_widths.iter().sum::<usize>() + (col_widths.len() - 1) * COLUMN_SEPARATOR.len()
    }

    /// Writes the table, or `empty_message` framed by the banner when there are no rows.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: &str,
        out: &mut W,
    ) -> io::Result<()> {
        if rows.is_empty() {
            let width = self
                .util
                .visible_width(title)
                .max(self.util.visible_width(empty_message));
            self.render_banner(title, width, out)?;
            writeln!(out, "{empty_message}")?;
            return self.write_rule(out, width);
        }

        let col_widths = self.compute_col_widths(headers, rows);
        let width = self
            .compute_table_width(headers, rows)
            .max(self.util.visible_width(title));

        self.render_banner(title, width, out)?;
        writeln!(out, "{}", self.build_line(headers, &col_widths))?;
        self.write_rule(out, width)?;
        for row in rows {
            writeln!(out, "{}", self.build_line(row, &col_widths))?;
        }
        self.write_rule(out, width)
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let width = width.max(self.util.visible_width(title));
        self.write_rule(out, width)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.write_rule(out, width)
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut col_widths: Vec<usize> =
            headers.iter().map(|h| self.util.visible_width(h)).collect();
        for row in rows {
            for (width, cell) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    /// The last column is left unpadded so lines carry no trailing spaces.
    fn build_line<T: AsRef<str>>(&self, cells: &[T], col_widths: &[usize]) -> String {
        let last = col_widths.len().saturating_sub(1);
        cells
            .iter()
            .zip(col_widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == last {
                    cell.as_ref().to_string()
                } else {
                    self.util.pad_visible(cell.as_ref(), *width)
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }
}
