//! Rendering of pricing results as tables or JSON
//!
//! Every renderer returns a `String`; printing is left to the caller so the
//! output can be tested without capturing stdout.

use std::fmt::Write as _;

use serde::Serialize;

use opus_core::types::{OptionParameters, OptionStyle, OptionType};
use opus_pricing::facade::{ModelComparison, ModelKind};
use opus_pricing::PricingResult;

use crate::config::OutputFormat;
use crate::Result;

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 18;

/// JSON shape of `opus price`
#[derive(Debug, Serialize)]
pub struct PriceReport {
    /// Model used
    pub model: ModelKind,
    /// Exercise style
    pub style: OptionStyle,
    /// Call or put
    pub option_type: OptionType,
    /// Inputs
    pub params: OptionParameters,
    /// Price, Greeks and, for Monte Carlo, the standard error
    pub result: PricingResult,
}

/// One row of `opus compare` in JSON form
#[derive(Debug, Serialize)]
pub struct ComparisonEntry {
    /// Model used
    pub model: ModelKind,
    /// Successful result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PricingResult>,
    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// JSON shape of `opus compare`
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    /// Call or put; style is always European
    pub option_type: OptionType,
    /// Inputs
    pub params: OptionParameters,
    /// One entry per model
    pub models: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    /// Collects facade output into a serialisable report.
    pub fn new(
        params: OptionParameters,
        option_type: OptionType,
        comparisons: &[ModelComparison],
    ) -> Self {
        let models = comparisons
            .iter()
            .map(|c| match &c.result {
                Ok(result) => ComparisonEntry {
                    model: c.model,
                    result: Some(*result),
                    error: None,
                },
                Err(e) => ComparisonEntry {
                    model: c.model,
                    result: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        Self {
            option_type,
            params,
            models,
        }
    }
}

fn border(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, w) in cells.iter().zip(widths) {
        let _ = write!(line, " {:<width$} │", cell, width = w);
    }
    line
}

fn table(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐', &widths));
    out.push('\n');
    out.push_str(&row(header, &widths));
    out.push('\n');
    out.push_str(&border('├', '┼', '┤', &widths));
    out.push('\n');
    for r in rows {
        out.push_str(&row(r, &widths));
        out.push('\n');
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out.push('\n');
    out
}

fn num(value: f64) -> String {
    format!("{:.6}", value)
}

const MEASURES: [&str; 7] = ["Price", "Std error", "Delta", "Gamma", "Theta", "Vega", "Rho"];

fn measure(result: &PricingResult, name: &str) -> Option<f64> {
    let greeks = result.greeks();
    match name {
        "Price" => Some(result.price()),
        "Std error" => result.std_error(),
        "Delta" => Some(greeks.delta),
        "Gamma" => Some(greeks.gamma),
        "Theta" => Some(greeks.theta),
        "Vega" => Some(greeks.vega),
        "Rho" => Some(greeks.rho),
        _ => None,
    }
}

/// Renders the outcome of `opus price`.
pub fn render_price(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let p = &report.params;
            let mut out = format!(
                "{} {} {} (S={}, K={}, T={}, r={}, σ={})\n",
                report.style,
                report.option_type,
                report.model,
                p.spot(),
                p.strike(),
                p.expiry(),
                p.rate(),
                p.volatility()
            );

            let result = &report.result;
            let mut rows: Vec<Vec<String>> = MEASURES
                .iter()
                .filter_map(|&name| measure(result, name).map(|v| vec![name.to_string(), num(v)]))
                .collect();
            if let Some(ci) = result.confidence_95() {
                rows.insert(2, vec!["95% CI".to_string(), format!("±{}", num(ci))]);
            }
            if let Some(seed) = result.seed() {
                rows.push(vec!["Seed".to_string(), seed.to_string()]);
            }

            out.push_str(&table(
                &[
                    format!("{:<w$}", "Measure", w = LABEL_WIDTH),
                    format!("{:<w$}", "Value", w = VALUE_WIDTH),
                ],
                &rows,
            ));
            Ok(out)
        }
    }
}

/// Renders the outcome of `opus compare`.
pub fn render_comparison(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut header = vec![format!("{:<w$}", "Measure", w = LABEL_WIDTH)];
            header.extend(report.models.iter().map(|m| m.model.to_string()));

            let rows: Vec<Vec<String>> = MEASURES
                .iter()
                .map(|&name| {
                    let mut r = vec![name.to_string()];
                    r.extend(report.models.iter().map(|entry| {
                        match (&entry.result, &entry.error) {
                            (Some(result), _) => measure(result, name)
                                .map(num)
                                .unwrap_or_else(|| "-".to_string()),
                            (None, Some(_)) => "error".to_string(),
                            (None, None) => "-".to_string(),
                        }
                    }));
                    r
                })
                .collect();

            let p = &report.params;
            let mut out = format!(
                "European {} (S={}, K={}, T={}, r={}, σ={})\n",
                report.option_type,
                p.spot(),
                p.strike(),
                p.expiry(),
                p.rate(),
                p.volatility()
            );
            out.push_str(&table(&header, &rows));
            for entry in &report.models {
                if let Some(seed) = entry.result.and_then(|r| r.seed()) {
                    let _ = writeln!(out, "{} seed: {}", entry.model, seed);
                }
                if let Some(e) = &entry.error {
                    let _ = writeln!(out, "{}: {}", entry.model, e);
                }
            }
            Ok(out)
        }
    }
}
