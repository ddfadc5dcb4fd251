//! Category Breakdown
//!
//! Expense totals per category, largest first, each with a stable color slot.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use super::filter::filter_by_window;
use crate::display::report::{format_bar, format_percentage};
use crate::error::SpendlensResult;
use crate::models::{Money, TimeWindow, Transaction};

/// Degrees between consecutive palette hues
const HUE_STEP: u32 = 45;

/// Name of the row that folds categories cut by [`CategoryBreakdownReport::keep_top`]
pub const REMAINDER_LABEL: &str = "(other)";

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Category label
    pub name: String,
    /// Summed expense amount
    pub value: Money,
    /// Position of the category in first-encountered order
    pub color_index: usize,
}

impl CategoryTotal {
    /// Palette hue in degrees for this category
    pub fn hue(&self) -> u32 {
        hue_for_index(self.color_index)
    }

    /// CSS color string for charting front ends
    pub fn hsl(&self) -> String {
        format!("hsl({}, 70%, 50%)", self.hue())
    }
}

/// Hue rotation palette: each ordinal is `HUE_STEP` degrees from the last
pub fn hue_for_index(index: usize) -> u32 {
    ((index as u64 * HUE_STEP as u64) % 360) as u32
}

/// Group expenses by category
///
/// Categories keep the index of their first appearance as `color_index`. The
/// result is sorted by value, largest first; the sort is stable, so ties stay
/// in first-encountered order.
pub fn category_breakdown<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        match index.get(txn.category.as_str()) {
            Some(&slot) => totals[slot].value += txn.amount,
            None => {
                let slot = totals.len();
                index.insert(txn.category.as_str(), slot);
                totals.push(CategoryTotal {
                    name: txn.category.clone(),
                    value: txn.amount,
                    color_index: slot,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.value.cmp(&a.value));
    totals
}

/// Category breakdown for one time window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownReport {
    pub window: TimeWindow,
    pub reference_date: NaiveDate,
    pub categories: Vec<CategoryTotal>,
    pub total_expenses: Money,
}

impl CategoryBreakdownReport {
    /// Generate the breakdown for `window` anchored at `reference`
    pub fn generate(transactions: &[Transaction], window: TimeWindow, reference: NaiveDate) -> Self {
        let filtered = filter_by_window(transactions, window, reference);
        let categories = category_breakdown(filtered.iter().copied());
        let total_expenses = categories.iter().map(|c| c.value).sum();

        tracing::debug!(
            %window,
            %reference,
            categories = categories.len(),
            "generated category breakdown"
        );

        Self {
            window,
            reference_date: reference,
            categories,
            total_expenses,
        }
    }

    /// Share of total expenses for a category, in percent
    pub fn share(&self, category: &CategoryTotal) -> f64 {
        if self.total_expenses.is_zero() {
            0.0
        } else {
            category.value.cents() as f64 / self.total_expenses.cents() as f64 * 100.0
        }
    }

    /// Keep the `limit` largest categories and fold the rest into one
    /// [`REMAINDER_LABEL`] row, so the rows still add up to `total_expenses`
    pub fn keep_top(&mut self, limit: usize) {
        if self.categories.len() <= limit {
            return;
        }

        let rest = self.categories.split_off(limit);
        let value = rest.iter().map(|c| c.value).sum();
        let color_index = rest[0].color_index;
        self.categories.push(CategoryTotal {
            name: REMAINDER_LABEL.to_string(),
            value,
            color_index,
        });
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending by Category: {} (as of {})\n",
            self.window.label(),
            self.reference_date
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expense data for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>12} {:>8}  {}\n",
            "Category", "Amount", "%", "Share"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        let max = self.categories[0].value.cents() as f64;
        for category in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>12} {:>8}  {}\n",
                category.name,
                category.value,
                format_percentage(self.share(category)),
                format_bar(category.value.cents() as f64, max, 20)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>12}\n", "TOTAL", self.total_expenses));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Category", "Amount", "Percentage", "Color"])?;
        for category in &self.categories {
            csv.write_record([
                category.name.clone(),
                category.value.format_plain(),
                format!("{:.2}", self.share(category)),
                category.hsl(),
            ])?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            self.total_expenses.format_plain(),
            "100.00".to_string(),
            String::new(),
        ])?;
        csv.flush()?;

        Ok(())
    }
}
