//! Insight Formatter Module
//! Fixed-template caption sentences accompanying each chart payload.

use crate::stats::{GroupTotal, MonthTotal, OutlierBounds};

/// Format with thousands separators and two decimals, e.g. `1,234.50`.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac}")
}

/// US-dollar rendering, e.g. `$5,320.00`.
pub fn format_usd(value: f64) -> String {
    format!("${}", format_number(value))
}

pub fn top_dimension(dimension: &str, top: &GroupTotal) -> String {
    format!(
        "Insight: The highest {dimension} in sales is {} with total sales of {}.",
        top.label,
        format_usd(top.total as f64)
    )
}

pub fn average_amount(mean: f64) -> String {
    format!(
        "The average sales amount is {}, with most transactions falling around this value. \
         This indicates a consistent sales pattern.",
        format_usd(mean)
    )
}

pub fn average_boxes(mean: f64) -> String {
    format!(
        "The average number of boxes shipped is {}, with most shipments concentrated around \
         this value, suggesting stable demand.",
        format_number(mean)
    )
}

pub fn top_country(top: &GroupTotal) -> String {
    format!(
        "Insight: The country with the highest sales is {} with total sales of {}. \
         This indicates a strong market presence and customer demand in this region.",
        top.label,
        format_usd(top.total as f64)
    )
}

pub fn top_product(top: &GroupTotal) -> String {
    format!(
        "Insight: The best-selling product is {} with total sales reaching {}. \
         This suggests high customer preference and possible opportunities for further \
         marketing of this product.",
        top.label,
        format_usd(top.total as f64)
    )
}

pub fn top_salesperson(top: &GroupTotal) -> String {
    format!(
        "Insight: The top-performing salesperson is {}, generating total sales of {}. \
         Recognizing top performers can help in setting training strategies for other \
         team members.",
        top.label,
        format_usd(top.total as f64)
    )
}

pub fn peak_month(peak: &MonthTotal) -> String {
    format!(
        "Insight: The highest monthly sales occurred in month {}, indicating seasonal \
         trends that can be leveraged for better inventory and marketing planning.",
        peak.month
    )
}

/// Outlier caption for a box plot. `None` bounds mean the column had no
/// numeric values at all (the empty-result sentinel).
pub fn outliers(column: &str, bounds: Option<&OutlierBounds>) -> String {
    match bounds {
        Some(bounds) if bounds.outliers > 0 => format!(
            "Insight: Column '{column}' has {} outliers. These extreme values might be due \
             to errors in data entry, special promotions, or unexpected demand spikes.",
            bounds.outliers
        ),
        Some(_) => format!(
            "Insight: Column '{column}' has no significant outliers, indicating a \
             relatively normal distribution."
        ),
        None => format!("Insight: Column '{column}' has no numeric values to analyze."),
    }
}
