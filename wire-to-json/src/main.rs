use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use amqp_wire::read::Decoder;
use amqp_wire::ser::to_field_value;
use amqp_wire::types::{Endianness, FieldValue};
use amqp_wire::write::Encoder;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

const KINDS: [&str; 6] = ["field", "table", "array", "properties", "content-header", "frame"];

fn cli() -> Command {
    Command::new("AMQP wire -> json converter")
        .version("0.1.0")
        .about("Decode AMQP 0-9-1 wire data to json, or encode json into a field table")
        .arg(
            Arg::new("INPUT")
                .help("File to read")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .help("What the input contains")
                .value_parser(KINDS)
                .default_value("table"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .help("Byte offset to start decoding at")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("little-endian")
                .long("little-endian")
                .help("Use little-endian byte order for numbers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("encode")
                .long("encode")
                .short('e')
                .help("Read json and write the encoded field value or table to stdout")
                .action(ArgAction::SetTrue),
        )
}

fn decode(
    data: &[u8],
    kind: &str,
    offset: usize,
    decoder: Decoder,
) -> Result<serde_json::Value, String> {
    let e = |e: amqp_wire::errors::Error<'_>| e.to_string();
    let json = match kind {
        "field" => serde_json::to_value(decoder.decode_field(data, offset).map_err(e)?.0),
        "table" => serde_json::to_value(decoder.decode_table(data, offset).map_err(e)?.0),
        "array" => serde_json::to_value(decoder.decode_array(data, offset).map_err(e)?.0),
        "properties" => serde_json::to_value(decoder.decode_properties(data, offset).map_err(e)?.0),
        "content-header" => {
            serde_json::to_value(decoder.decode_content_header(data, offset).map_err(e)?.0)
        }
        "frame" => {
            let (frame, _) = decoder.read_frame(data, offset).map_err(e)?;
            Ok(serde_json::json!({
                "header": frame.header,
                "payload": frame.payload,
            }))
        }
        other => return Err(format!("Unknown kind {}", other)),
    };
    json.map_err(|e| e.to_string())
}

fn encode(data: &[u8], encoder: Encoder) -> Result<Vec<u8>, String> {
    let json: serde_json::Value = serde_json::from_slice(data).map_err(|e| e.to_string())?;
    let value = to_field_value(&json).map_err(|e| e.to_string())?;
    let bytes = match &value {
        FieldValue::FieldTable(table) => encoder.table_to_bytes(table),
        other => encoder.field_to_bytes(other),
    };
    bytes.map_err(|e| e.to_string())
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let path = matches
        .get_one::<PathBuf>("INPUT")
        .ok_or_else(|| "No input given".to_string())?;
    let data = fs::read(path).map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;

    let endian = if matches.get_flag("little-endian") {
        Endianness::Little
    } else {
        Endianness::Big
    };

    if matches.get_flag("encode") {
        let bytes = encode(&data, Encoder::new(endian))?;
        return std::io::stdout().write_all(&bytes).map_err(|e| e.to_string());
    }

    let kind = matches.get_one::<String>("kind").map(String::as_str).unwrap_or("table");
    let offset = matches.get_one::<usize>("offset").copied().unwrap_or(0);
    let json = decode(&data, kind, offset, Decoder::new(endian))?;
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(&cli().get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_decode_table() {
        let data = [0, 0, 0, 7, 1, b'a', b'I', 0, 0, 0, 1];
        let json = decode(&data, "table", 0, Decoder::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"entries": [{"name": "a", "value": {"LongInt": 1}}]})
        );
    }

    #[test]
    fn test_encode_json() {
        let bytes = encode(br#"{"a": 1}"#, Encoder::default()).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 7, 1, b'a', b'I', 0, 0, 0, 1]);
    }

    #[test]
    fn test_decode_frame() {
        let data = [8, 0, 0, 0, 0, 0, 0, 206];
        let json = decode(&data, "frame", 0, Decoder::default()).unwrap();
        assert_eq!(json["header"]["frame_type"], "Heartbeat");
    }
}
