//! Terminal output helpers.
//!
//! A small box-drawing table used by `ek modules` and `ek info`. Columns
//! size to their widest cell, clamped to the terminal width.

use std::cmp;

use colored::*;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        let widths = self.column_widths();

        let line = |left: &str, mid: &str, right: &str| {
            let mut s = String::from(left);
            for (i, w) in widths.iter().enumerate() {
                s.push_str(&"─".repeat(w + 2));
                s.push_str(if i + 1 < widths.len() { mid } else { right });
            }
            s
        };

        println!("{}", line("┌", "┬", "┐"));
        print!("│");
        for (header, width) in self.headers.iter().zip(&widths) {
            // Pad before styling; ANSI codes would throw off format widths.
            let padding = width.saturating_sub(header.chars().count());
            print!(" {}{} │", header.bold(), " ".repeat(padding));
        }
        println!();
        println!("{}", line("├", "┼", "┤"));
        for row in &self.rows {
            print!("│");
            for (cell, width) in row.iter().zip(&widths) {
                let clipped = console::truncate_str(cell, *width, "...");
                let padding = width.saturating_sub(clipped.chars().count());
                print!(" {}{} │", clipped, " ".repeat(padding));
            }
            println!();
        }
        println!("{}", line("└", "┴", "┘"));
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], cell.chars().count());
            }
        }

        // Shrink the widest column until the table fits the terminal.
        let (_, term_width) = console::Term::stdout().size();
        let overhead = 1 + 3 * widths.len();
        let max_content = (term_width as usize).saturating_sub(overhead);
        while widths.iter().sum::<usize>() > max_content {
            let Some(widest) = widths.iter_mut().max() else {
                break;
            };
            if *widest <= 8 {
                break;
            }
            *widest -= 1;
        }
        widths
    }
}
