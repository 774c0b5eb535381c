//! Pri command - priority lookups
//!
//! ```bash
//! loggen pri local0.info   # 134
//! loggen pri 134           # local0.info
//! ```

use anyhow::Result;
use clap::Args;
use loggen_protocol::translate;

#[derive(Args, Debug)]
pub struct PriArgs {
    /// `facility.severity` to encode, or an integer to decode
    value: String,
}

pub fn run(args: PriArgs) -> Result<()> {
    println!("{}", translate(&args.value)?);
    Ok(())
}
