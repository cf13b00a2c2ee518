use std::io::Write;

use serde::Serialize;
use sleet::{SnowflakeId, SnowflakeParts};

#[derive(Serialize)]
struct ParsedRecord<'a> {
    #[serde(with = "sleet::as_native_snow")]
    id: SnowflakeId,
    #[serde(flatten)]
    parts: &'a SnowflakeParts,
}

/// Writes each decoded ID as a block of `key: value` lines, blocks separated
/// by a blank line.
pub fn write_parts_text<W: Write>(
    out: &mut W,
    parsed: &[(SnowflakeId, SnowflakeParts)],
) -> std::io::Result<()> {
    for (i, (id, parts)) in parsed.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "id: {id}")?;
        writeln!(out, "datetime: {}", parts.datetime.as_deref().unwrap_or("-"))?;
        writeln!(out, "timestamp: {}", parts.timestamp)?;
        writeln!(out, "epoch: {}", parts.epoch)?;
        writeln!(out, "datacenter_id: {}", parts.datacenter_id)?;
        writeln!(out, "worker_id: {}", parts.worker_id)?;
        writeln!(out, "sequence: {}", parts.sequence)?;
        writeln!(out, "binary: {}", parts.binary)?;
        writeln!(out, "binary_length: {}", parts.binary_length)?;
        writeln!(out, "binary_timestamp: {}", parts.binary_timestamp)?;
        writeln!(out, "binary_datacenter_id: {}", parts.binary_datacenter_id)?;
        writeln!(out, "binary_worker_id: {}", parts.binary_worker_id)?;
        writeln!(out, "binary_sequence: {}", parts.binary_sequence)?;
    }
    Ok(())
}

/// Writes all decoded IDs as one pretty-printed JSON array.
pub fn write_parts_json<W: Write>(
    out: &mut W,
    parsed: &[(SnowflakeId, SnowflakeParts)],
) -> anyhow::Result<()> {
    let records: Vec<_> = parsed
        .iter()
        .map(|(id, parts)| ParsedRecord { id: *id, parts })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
