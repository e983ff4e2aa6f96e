//! JSON output for one-shot commands
//!
//! - Output: single JSON object via stdout
//! - Query pages carry `data` and `metadata` side by side, as over HTTP
//! - UTF-8 only

use std::io::{self, Write};

use serde::Serialize;

use crate::pipeline::QueryPage;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    let stdout = io::stdout();
    write_response_to(&mut stdout.lock(), data)
}

pub fn write_response_to<W: Write, T: Serialize>(out: &mut W, data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "success": true,
        "data": data,
    });
    write_line(out, &response)
}

/// Write a query page to stdout
pub fn write_page(page: &QueryPage) -> CliResult<()> {
    let stdout = io::stdout();
    write_page_to(&mut stdout.lock(), page)
}

pub fn write_page_to<W: Write>(out: &mut W, page: &QueryPage) -> CliResult<()> {
    let response = serde_json::json!({
        "success": true,
        "data": page.records,
        "metadata": page.metadata,
    });
    write_line(out, &response)
}

fn write_line<W: Write>(out: &mut W, response: &serde_json::Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
