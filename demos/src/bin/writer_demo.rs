// SPDX-License-Identifier: Apache-2.0

// Example demonstrating the explicit-context writer in all three modes

use picowrite::{Format, JsonWriter, WriteError};

fn write_status<const N: usize>(writer: &mut JsonWriter<'_, N>) -> Result<(), WriteError> {
    writer.open_object()?;
    writer.write_key("device")?;
    writer.write_string("thermostat-2")?;
    writer.write_key("temperature")?;
    writer.write_int(21)?;
    writer.write_key("alarms")?;
    writer.open_array()?;
    writer.write_string("low-battery")?;
    writer.close()?;
    writer.write_key("calibrated")?;
    writer.write_bool(true)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<(), WriteError> {
    for format in [Format::Compact, Format::Normal, Format::Pretty(2)] {
        let mut buf = [0u8; 256];
        let mut writer = JsonWriter::with_format(&mut buf, format);
        write_status(&mut writer)?;
        let len = writer.finish()?;
        println!("--- {:?} ({} bytes) ---", format, len);
        println!("{}", String::from_utf8_lossy(&buf[..len]));
    }
    Ok(())
}
