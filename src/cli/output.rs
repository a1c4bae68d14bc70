use crate::cli::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use ipnetwork::IpNetwork;
use log::error;
use nblists::Value;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/// Render a list value without JSON quoting for strings.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        value => value.to_string(),
    }
}

/*--------------------------------------------------------------------------------------
  Values List
--------------------------------------------------------------------------------------*/

pub fn values_list(values: &[Value]) {
    for value in values {
        println!("{}", display_value(value));
    }
}

/*--------------------------------------------------------------------------------------
  Values JSON
--------------------------------------------------------------------------------------*/

pub fn values_json(values: &[Value]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(values)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Values Table
--------------------------------------------------------------------------------------*/

pub fn values_table(terms: &[String], values: &[Value]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![Cell::new("Value")
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)]);

    for value in values {
        table.add_row(vec![Cell::new(display_value(value)).add_attribute(Attribute::Bold)]);
    }

    println!("{table}");

    // Print summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(values.len()), Cell::new("Values")]);
    summary_table.add_row(vec![Cell::new(terms.len()), Cell::new("Endpoints")]);

    let summary_numbers_column = summary_table
        .column_mut(0)
        .expect("The first column exists");
    summary_numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Values In Netmask Format
--------------------------------------------------------------------------------------*/

/// Parse list values as IP networks; values that are not IP addresses or prefixes are logged and
/// skipped.
pub fn parse_networks(values: &[Value]) -> Vec<IpNetwork> {
    values
        .iter()
        .filter_map(|value| {
            display_value(value).parse().ok().or_else(|| {
                error!("Invalid IP prefix: {}", value);
                None
            })
        })
        .collect()
}

pub fn values_in_netmask_format(values: &[Value]) {
    for network in parse_networks(values) {
        println!("{} {}", network.network(), network.mask());
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
