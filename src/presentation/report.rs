// src/presentation/report.rs
use std::io::Write;

use serde::Serialize;
use silk_data_range_domain::{Inventory, SearchDirection};
use silk_data_range_shared_kernel::{CalendarDate, ClassName, PresentationError, Result, TypeName};

use crate::options::OutputFormat;

pub const REPORT_HEADER: &str = "CLASS|TYPE|FROM > TO ('None' indicates no data found)";

const MISSING: &str = "None";

/// Writes the inventory in `format`, one partition per line/element in (class, type) order.
pub fn render_report(inventory: &Inventory, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(inventory, out),
        OutputFormat::Json => render_json(inventory, out),
    }
}

fn render_table(inventory: &Inventory, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    for (key, result) in inventory {
        let [from, to] = SearchDirection::ALL.map(|direction| show(result.get(direction)));
        writeln!(out, "{key}|{from} > {to}")?;
    }
    out.flush()?;
    Ok(())
}

fn show(date: Option<&CalendarDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    partitions: Vec<JsonPartition<'a>>,
}

#[derive(Serialize)]
struct JsonPartition<'a> {
    class: &'a ClassName,
    #[serde(rename = "type")]
    type_name: &'a TypeName,
    from: Option<&'a CalendarDate>,
    to: Option<&'a CalendarDate>,
}

fn render_json(inventory: &Inventory, out: &mut impl Write) -> Result<()> {
    let report = JsonReport {
        partitions: inventory
            .iter()
            .map(|(key, result)| JsonPartition {
                class: &key.class,
                type_name: &key.type_name,
                from: result.get(SearchDirection::Oldest),
                to: result.get(SearchDirection::Newest),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report).map_err(|e| PresentationError::RenderFailed(e.to_string()))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
