//! Human-readable startup and status output
//!
//! Everything is written to a [`core::fmt::Write`], so the same code serves a
//! USB serial port, a log buffer or a test string.

use core::fmt::{self, Write};

use crate::chromaticity::chromaticity;
use crate::config::FixtureConfig;
use crate::controller::LightingState;
use crate::duty_table::DutyCycleTable;
use crate::keypress::KEYPRESS_HELP;

/// Chromaticity and illumination of both LEDs
pub fn write_led_summary<W: Write>(out: &mut W, config: &FixtureConfig) -> fmt::Result {
    let cold = chromaticity(config.cold.temperature).map_err(|_| fmt::Error)?;
    let warm = chromaticity(config.warm.temperature).map_err(|_| fmt::Error)?;
    writeln!(
        out,
        "Cold {}00 K (xc,yc) = ({:.6},{:.6})",
        cold.temperature, cold.x, cold.y
    )?;
    writeln!(
        out,
        "Warm {}00 K (xw,yw) = ({:.6},{:.6})",
        warm.temperature, warm.x, warm.y
    )?;
    writeln!(
        out,
        "Max illumination ratio (cold,warm) ({:.2}, {:.2})",
        config.cold.max_illumination, config.warm.max_illumination
    )
}

/// Dump the duty table as tag-delimited records
///
/// Entries with both duties at zero are skipped.
pub fn write_duty_table<W: Write>(out: &mut W, table: &DutyCycleTable) -> fmt::Result {
    out.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?><tbl>")?;
    for (temperature, duty) in table.iter().filter(|(_, duty)| !duty.is_off()) {
        write!(
            out,
            "<r K=\"{}\"><c>{}</c><w>{}</w></r>",
            u32::from(temperature) * 100,
            duty.cold,
            duty.warm
        )?;
    }
    out.write_str("</tbl>\n")
}

/// One status line for the current setting
pub fn write_status<W: Write>(out: &mut W, state: LightingState) -> fmt::Result {
    writeln!(
        out,
        "(color,brightness) ({},{})",
        state.color,
        state.intensity.raw()
    )?;
    if state.intensity.is_off() {
        writeln!(out, "LEDs off")?;
    }
    Ok(())
}

/// The keypress command list
pub fn write_help<W: Write>(out: &mut W) -> fmt::Result {
    for line in KEYPRESS_HELP {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
