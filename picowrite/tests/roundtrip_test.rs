// SPDX-License-Identifier: Apache-2.0

// Round-trip conformance: documents produced by the writer must parse
// back to the value tree described by the operation sequence.

use picowrite::{Format, JsonWriter, WriteError};
use serde_json::{json, Value};

fn parse(writer: &JsonWriter<'_>) -> Value {
    serde_json::from_slice(writer.as_bytes()).expect("writer output must be valid JSON")
}

#[test]
fn test_mixed_document_roundtrip() {
    let mut buf = [0u8; 256];
    let mut writer = JsonWriter::new(&mut buf);
    writer.open_object().unwrap();
    writer.write_key("id").unwrap();
    writer.write_int(981).unwrap();
    writer.write_key("name").unwrap();
    writer.write_string("sensor-4").unwrap();
    writer.write_key("online").unwrap();
    writer.write_bool(true).unwrap();
    writer.write_key("last_error").unwrap();
    writer.write_null().unwrap();
    writer.write_key("readings").unwrap();
    writer.open_array().unwrap();
    writer.write_int(-3).unwrap();
    writer.write_int(0).unwrap();
    writer.write_int(17).unwrap();
    writer.close().unwrap();
    writer.write_key("meta").unwrap();
    writer.open_object().unwrap();
    writer.write_key("fw").unwrap();
    writer.write_string("1.4.2").unwrap();
    writer.close().unwrap();
    writer.close().unwrap();

    assert_eq!(
        parse(&writer),
        json!({
            "id": 981,
            "name": "sensor-4",
            "online": true,
            "last_error": null,
            "readings": [-3, 0, 17],
            "meta": { "fw": "1.4.2" }
        })
    );
}

#[test]
fn test_all_modes_parse_to_same_value() {
    let expected = json!([1, {"k": "v"}, false, null]);
    for format in [Format::Compact, Format::Normal, Format::Pretty(2), Format::Pretty(4)] {
        let mut buf = [0u8; 256];
        let mut writer = JsonWriter::with_format(&mut buf, format);
        writer.open_array().unwrap();
        writer.write_int(1).unwrap();
        writer.open_object().unwrap();
        writer.write_key("k").unwrap();
        writer.write_string("v").unwrap();
        writer.close().unwrap();
        writer.write_bool(false).unwrap();
        writer.write_null().unwrap();
        writer.close().unwrap();
        assert_eq!(parse(&writer), expected, "format {:?}", format);
    }
}

#[test]
fn test_pre_escaped_string_roundtrip() {
    // The writer copies payloads verbatim; a caller-escaped payload
    // parses back to the unescaped text.
    let mut buf = [0u8; 64];
    let mut writer = JsonWriter::new(&mut buf);
    writer.write_string(r#"tab\there \"q\""#).unwrap();
    assert_eq!(parse(&writer), json!("tab\there \"q\""));
}

#[test]
fn test_int_extremes_roundtrip() {
    let mut buf = [0u8; 128];
    let mut writer = JsonWriter::new(&mut buf);
    writer.open_array().unwrap();
    writer.write_int(i64::MIN).unwrap();
    writer.write_int(-1).unwrap();
    writer.write_int(0).unwrap();
    writer.write_int(i64::MAX).unwrap();
    writer.close().unwrap();
    assert_eq!(parse(&writer), json!([i64::MIN, -1, 0, i64::MAX]));
}

fn write_nested_arrays(depth: usize, buf: &mut [u8]) -> Result<usize, WriteError> {
    let mut writer = JsonWriter::new(buf);
    for _ in 0..depth {
        writer.open_array()?;
    }
    writer.write_int(1)?;
    for _ in 0..depth {
        writer.close()?;
    }
    writer.finish()
}

macro_rules! generate_depth_tests {
    ($($depth:expr),*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_nested_depth_ $depth>]() {
                    let mut buf = [0u8; 256];
                    let len = write_nested_arrays($depth, &mut buf)
                        .expect("within the depth limit");
                    let value: Value = serde_json::from_slice(&buf[..len]).unwrap();
                    // Walk back down to the innermost value
                    let mut current = &value;
                    for _ in 0..$depth {
                        current = &current[0];
                    }
                    assert_eq!(current, &json!(1));
                }
            }
        )*
    };
}

// Default capacity 32 leaves room for 31 nested containers above the root
generate_depth_tests!(1, 2, 4, 8, 16, 31);

#[test]
fn test_depth_just_past_limit() {
    let mut buf = [0u8; 256];
    assert_eq!(
        write_nested_arrays(32, &mut buf),
        Err(WriteError::NestingTooDeep)
    );
}
