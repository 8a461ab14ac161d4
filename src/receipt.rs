//! Receipt
//!
//! Terminal rendering of an [`Advice`]: one table of cards per plan followed
//! by the payment breakdown, the two plans placed side by side.

use std::{fmt::Write, io};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{advice::Advice, plans::Plan, summary::Summary};

/// Spaces between the Plan A and Plan B columns.
const COLUMN_GAP: usize = 4;

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,

    /// YAML serialisation error
    #[error("Failed to serialise advice: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Printable view of an [`Advice`].
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    advice: &'a Advice,
    catalogue_name: Option<&'a str>,
    color: bool,
}

impl<'a> Receipt<'a> {
    /// Create a receipt for the given advice, with ANSI colours enabled.
    pub fn new(advice: &'a Advice) -> Self {
        Self {
            advice,
            catalogue_name: None,
            color: true,
        }
    }

    /// Show the catalogue name in the heading.
    #[must_use]
    pub fn with_catalogue_name(mut self, name: Option<&'a str>) -> Self {
        self.catalogue_name = name;
        self
    }

    /// Enable or disable ANSI colours.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Writes the receipt as side-by-side tables.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let left = self.render_plan("Plan A: cards + cash", Some(&self.advice.plan_a));
        let right = self.render_plan("Plan B: cards only", self.advice.plan_b.as_ref());

        writeln!(out, "\n{}\n", self.heading()).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, "{}", join_columns(&left, &right, COLUMN_GAP)).map_err(|_err| ReceiptError::IO)
    }

    /// Writes the advice as a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if serialisation or writing fails.
    pub fn write_yaml(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let yaml = serde_norway::to_string(self.advice)?;

        writeln!(out, "---\n{}", yaml.trim_end()).map_err(|_err| ReceiptError::IO)
    }

    fn heading(&self) -> String {
        let price = format!("{}", baht(self.advice.price.baht()));
        let price = self.paint(&price, "\x1b[1m");

        match self.catalogue_name {
            Some(name) => format!(" Price: {price}   Cards: {name}"),
            None => format!(" Price: {price}"),
        }
    }

    fn render_plan(&self, title: &str, summary: Option<&Summary>) -> String {
        let mut block = format!(" {}\n", self.paint(title, "\x1b[1m"));

        let Some(summary) = summary else {
            block.push_str(&self.paint(" No suitable card combination", "\x1b[33m"));
            block.push('\n');

            return block;
        };

        block.push_str(&self.card_table(summary.plan()));
        block.push('\n');

        for line in self.summary_lines(summary) {
            block.push_str(&line);
            block.push('\n');
        }

        block
    }

    fn card_table(&self, plan: &Plan) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Card", "Value", "Rate", "Qty", "Paid", "Redeemed"]);

        for line in plan.iter() {
            builder.push_record([
                format!("{}", baht(line.denomination.purchase_price())),
                format!("{}", baht(line.denomination.face_value())),
                format!("{:.2}%", percent_points_from_fractional_percentage(line.denomination.discount_rate())),
                format!("× {}", line.count),
                format!("{}", baht(line.card_price())),
                format!("{}", baht(line.face_value())),
            ]);
        }

        if plan.is_empty() {
            builder.push_record(["No cards", "", "", "", "", ""]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(0..6), Alignment::right());
        table.modify(Columns::first(), Alignment::left());

        if self.color {
            table.modify(Rows::first(), Color::BOLD);
            table.modify(Columns::new(2..3), color_dark_grey());

            colorize_borders(&table.to_string())
        } else {
            table.to_string()
        }
    }

    fn summary_lines(&self, summary: &Summary) -> Vec<String> {
        let discount = summary.discount_amount();
        let savings_color = if discount < 0 { "\x1b[31m" } else { "\x1b[32m" };

        let mut rows = vec![
            (" Card value:".to_string(), format!("{}", baht(summary.total_face_value()))),
            (" Payment 1 (cards):".to_string(), format!("{}", baht(summary.card_price_subtotal()))),
            (" Payment 2 (cash):".to_string(), format!("{}", baht(summary.cash_shortfall()))),
            (
                self.paint(" Total:", "\x1b[1m"),
                self.paint(&format!("{}", baht(summary.total_to_pay())), "\x1b[1m"),
            ),
            (
                " Savings:".to_string(),
                self.paint(
                    &format!("({:.2}%) {}", summary.discount_percent(), signed_baht(discount)),
                    savings_color,
                ),
            ),
        ];

        if let Some(rate) = summary.card_discount_percent() {
            rows.insert(1, (" Card discount:".to_string(), format!("{rate:.2}%")));
        }

        if let Some(leftover) = summary.leftover() {
            rows.push((" Leftover on card:".to_string(), format!("{}", baht(leftover))));
        }

        let label_width = rows.iter().map(|(label, _)| visible_width(label)).max().unwrap_or(0);
        let value_width = rows.iter().map(|(_, value)| visible_width(value)).max().unwrap_or(0);

        let mut lines: Vec<String> = rows
            .iter()
            .map(|(label, value)| summary_line(label, value, label_width, value_width))
            .collect();

        if summary.is_overpayment() {
            let notice = format!(
                " Customer pays {} over the price for {} of stored value",
                signed_baht(discount.saturating_neg()),
                baht(summary.leftover().unwrap_or(0)),
            );

            lines.push(self.paint(&notice, "\x1b[31m"));
        }

        lines
    }

    fn paint(&self, text: &str, ansi: &str) -> String {
        if self.color {
            format!("{ansi}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

/// Whole baht as THB money for display.
fn baht(amount: u64) -> Money<'static, Currency> {
    signed_baht(i64::try_from(amount).unwrap_or(i64::MAX))
}

fn signed_baht(amount: i64) -> Money<'static, Currency> {
    Money::from_minor(amount.saturating_mul(100), iso::THB)
}

/// Converts a fractional percentage to percent points for display.
fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Places two multi-line blocks next to each other, padding the left block to
/// its widest visible line.
fn join_columns(left: &str, right: &str, gap: usize) -> String {
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let left_width = left_lines.iter().map(|line| visible_width(line)).max().unwrap_or(0);

    let mut out = String::with_capacity(left.len() + right.len() + 64);

    for row in 0..left_lines.len().max(right_lines.len()) {
        let left_line = left_lines.get(row).copied().unwrap_or("");
        let right_line = right_lines.get(row).copied().unwrap_or("");

        if right_line.is_empty() {
            _ = writeln!(out, "{}", left_line.trim_end());
        } else {
            let pad = left_width.saturating_sub(visible_width(left_line)) + gap;

            _ = writeln!(out, "{left_line}{}{right_line}", " ".repeat(pad));
        }
    }

    out
}

/// Wraps runs of UTF-8 box-drawing characters in ANSI dark-grey escape codes.
///
/// Box-drawing characters occupy the Unicode range U+2500..U+257F. This function
/// scans each character, grouping consecutive border characters and emitting a
/// single grey escape sequence around each run, leaving cell content untouched.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

/// Returns the visible (non-ANSI) width of a string.
fn visible_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut in_escape = false;

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

/// Formats a summary line with a right-aligned label and a fixed-width value column.
fn summary_line(label: &str, value: &str, label_col_width: usize, value_col_width: usize) -> String {
    let label_pad = label_col_width.saturating_sub(visible_width(label));
    let value_pad = value_col_width.saturating_sub(visible_width(value));

    format!(
        "{:>label_pad$}{label}  {}{value}",
        "",
        " ".repeat(value_pad)
    )
}

/// ANSI dark grey foreground.
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}
