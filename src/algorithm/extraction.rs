//! Reading extraction from report lines
//!
//! A report line such as `Hemoglobin 9.0 g/dL` carries a label made of letters and
//! spaces, a numeric value and an optional unit word. Lines are split into raw pairs,
//! values are parsed, labels are resolved, and one reading is kept per parameter.

use std::sync::LazyLock;

use regex::Regex;

use super::resolver::resolve;
use crate::catalog::ReferenceCatalogs;
use crate::models::ParameterReading;

static REPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z\s]+)\s+([\d.]+)\s*(\w+)?").expect("report line pattern compiles")
});

/// A label/value pair before parsing and resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading {
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
}

/// Find the first label/value pair in a line of report text
#[must_use]
pub fn parse_report_line(line: &str) -> Option<RawReading> {
    let captures = REPORT_LINE.captures(line)?;
    let label = captures.get(1)?.as_str().trim();
    if label.is_empty() {
        return None;
    }
    Some(RawReading {
        label: label.to_string(),
        value: captures.get(2)?.as_str().to_string(),
        unit: captures.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Parse a raw value as a finite real
#[must_use]
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse and resolve raw pairs into readings
///
/// Pairs with an unparseable value or an unknown label are dropped. When several pairs
/// resolve to the same parameter the last value wins, at the position of the first.
pub fn extract_readings<I, L, V>(catalogs: &ReferenceCatalogs, pairs: I) -> Vec<ParameterReading>
where
    I: IntoIterator<Item = (L, V)>,
    L: AsRef<str>,
    V: AsRef<str>,
{
    let mut readings: Vec<ParameterReading> = Vec::new();
    for (label, value) in pairs {
        let (label, value) = (label.as_ref(), value.as_ref());
        let Some(value) = parse_value(value) else {
            log::warn!("Dropping reading '{label}': unparseable value '{value}'");
            continue;
        };
        let Some(parameter) = resolve(catalogs, label) else {
            log::warn!("Dropping reading '{label}': unknown parameter");
            continue;
        };

        match readings.iter_mut().find(|r| r.parameter == parameter.name) {
            Some(existing) => existing.value = value,
            None => readings.push(ParameterReading::new(&parameter.name, value)),
        }
    }
    readings
}

/// Extract readings from lines of report text
pub fn extract_from_lines<'l, I>(catalogs: &ReferenceCatalogs, lines: I) -> Vec<ParameterReading>
where
    I: IntoIterator<Item = &'l str>,
{
    let pairs = lines
        .into_iter()
        .filter_map(parse_report_line)
        .map(|raw| (raw.label, raw.value));
    extract_readings(catalogs, pairs)
}
