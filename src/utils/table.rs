//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns, so emoji and arrows line up.

use crate::utils::formatting::{display_width, pad_right};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    indent: usize,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            indent: 0,
        }
    }

    pub fn indent(mut self, n: usize) -> Self {
        self.indent = n;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Plain text (cells must not carry escape codes).
    pub fn render(&self) -> String {
        let widths = self.widths();
        let pad = " ".repeat(self.indent);
        let mut out = String::new();

        let line = |cells: &[String]| -> String {
            let joined = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{pad}{}\n", joined.trim_end())
        };

        out.push_str(&line(&self.headers));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out
    }
}
