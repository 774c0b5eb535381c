//! List command - print the facility and severity tables
//!
//! Rows are `name value`, ascending by value.

use anyhow::Result;
use loggen_protocol::{FACILITY_TABLE_VERSION, list_facilities, list_severities};

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = format!("Facilities (table v{}):\n", FACILITY_TABLE_VERSION);
    for (name, value) in list_facilities() {
        out.push_str(&format!("  {:<10} {:>2}\n", name, value));
    }

    out.push_str("\nSeverities:\n");
    for (name, value) in list_severities() {
        out.push_str(&format!("  {:<10} {:>2}\n", name, value));
    }
    out
}
