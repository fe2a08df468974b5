//! Host structures embedding optional scalars, driven through each codec the
//! way an enclosing object codec would drive them.

use isset::{Bool, BufferCodec, Error, Float64, Int, Settable, Text, TokenCodec, Uint16};
use isset_json_token::{Kind, Token, TokenError, TokenReader, TokenWriter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq)]
struct Server {
    host: Text,
    port: Uint16,
    debug: Bool,
    ratio: Float64,
    retries: Int,
}

impl Server {
    fn fields(&self) -> [(&'static str, &dyn Field); 5] {
        let fields: [(&'static str, &dyn Field); 5] = [
            ("host", &self.host),
            ("port", &self.port),
            ("debug", &self.debug),
            ("ratio", &self.ratio),
            ("retries", &self.retries),
        ];
        fields
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Field> {
        let field: &mut dyn Field = match name {
            "host" => &mut self.host,
            "port" => &mut self.port,
            "debug" => &mut self.debug,
            "ratio" => &mut self.ratio,
            "retries" => &mut self.retries,
            _ => return None,
        };
        Some(field)
    }
}

trait Field: BufferCodec + TokenCodec {
    fn present(&self) -> bool;
}

impl<T: isset::Scalar> Field for Settable<T> {
    fn present(&self) -> bool {
        self.is_set()
    }
}

/// Object encoder over the buffer codec: empty output omits the key.
fn encode_buffered(server: &Server) -> Result<String, Error> {
    let mut out = String::from("{");
    for (name, field) in server.fields() {
        let bytes = field.encode_json()?;
        if bytes.is_empty() {
            continue;
        }
        if out.len() > 1 {
            out.push(',');
        }
        out.push_str(&serde_json::to_string(name)?);
        out.push(':');
        out.push_str(std::str::from_utf8(&bytes).expect("utf8"));
    }
    out.push('}');
    Ok(out)
}

/// Object decoder over the buffer codec: only present keys are visited.
fn decode_buffered(input: &str) -> Result<Server, Error> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;
    let mut server = Server::default();
    for (key, value) in raw {
        if let Some(field) = server.field_mut(&key) {
            field.decode_json(serde_json::to_string(&value)?.as_bytes())?;
        }
    }
    Ok(server)
}

/// Object encoder over the token codec: unset fields are never visited.
fn encode_streamed(server: &Server) -> Result<Vec<u8>, Error> {
    let mut writer = TokenWriter::new();
    writer.begin_object()?;
    for (name, field) in server.fields() {
        if !field.present() {
            continue;
        }
        writer.write_token(&Token::str(name))?;
        field.encode_tokens(&mut writer)?;
    }
    writer.end_object()?;
    Ok(writer.into_bytes())
}

fn decode_streamed(input: &[u8]) -> Result<Server, Error> {
    let mut reader = TokenReader::new(input);
    let mut server = Server::default();
    if reader.read_token()? != Token::BeginObject {
        return Err(TokenError::InvalidCharacter { ch: '?', offset: 0 }.into());
    }
    while reader.peek_kind()? != Kind::EndObject {
        let name = reader.read_token()?;
        let name = name.as_str().unwrap_or_default().to_owned();
        match server.field_mut(&name) {
            Some(field) => field.decode_tokens(&mut reader)?,
            None => reader.skip_value()?,
        }
    }
    reader.read_token()?;
    Ok(server)
}

fn sample() -> Server {
    Server {
        host: Text::default().set("db.local".to_owned()),
        port: Uint16::default().set(0),
        debug: Bool::default().set(false),
        ratio: Float64::default(),
        retries: Int::default().set(-1),
    }
}

#[test]
fn buffered_encode_omits_unset_fields() {
    assert_eq!(
        encode_buffered(&sample()).unwrap(),
        r#"{"host":"db.local","port":0,"debug":false,"retries":-1}"#
    );
    assert_eq!(encode_buffered(&Server::default()).unwrap(), "{}");
}

#[test]
fn buffered_round_trip() {
    let encoded = encode_buffered(&sample()).unwrap();
    assert_eq!(decode_buffered(&encoded).unwrap(), sample());
}

#[test]
fn buffered_absent_and_null_converge() {
    let absent = decode_buffered(r#"{"port": 80}"#).unwrap();
    let null = decode_buffered(r#"{"port": 80, "host": null, "debug": null}"#).unwrap();
    assert_eq!(absent, null);
    assert!(!null.host.is_set());
    assert!(!null.debug.is_set());
    assert_eq!(null.port.value(), 80);
}

#[test]
fn buffered_type_errors_surface() {
    let err = decode_buffered(r#"{"port": 70000}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    let err = decode_buffered(r#"{"debug": "yes"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn streamed_encode_skips_unset_fields() {
    assert_eq!(
        encode_streamed(&sample()).unwrap(),
        br#"{"host":"db.local","port":0,"debug":false,"retries":-1}"#
    );
    assert_eq!(encode_streamed(&Server::default()).unwrap(), b"{}");
}

#[test]
fn streamed_round_trip() {
    let encoded = encode_streamed(&sample()).unwrap();
    assert_eq!(decode_streamed(&encoded).unwrap(), sample());
}

#[test]
fn streamed_decode_handles_null_unknown_and_absent() {
    let server = decode_streamed(
        br#"{"extra": {"nested": [1, 2]}, "ratio": 0.25, "host": null, "debug": true}"#,
    )
    .unwrap();
    assert_eq!(server.ratio.value(), 0.25);
    assert!(!server.host.is_set());
    assert!(server.debug.value());
    assert!(!server.port.is_set());
    assert!(!server.retries.is_set());
}

#[test]
fn streamed_kind_mismatch_names_the_token() {
    let err = decode_streamed(br#"{"port": "80"}"#).unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON integer or null, got string");

    let err = decode_streamed(br#"{"retries": 1.5}"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedKind { found: Kind::Float, .. }));
}

#[test]
fn streamed_syntax_errors_surface_as_stream_errors() {
    let err = decode_streamed(br#"{"port": 80"#).unwrap_err();
    assert!(matches!(err, Error::Stream(TokenError::UnexpectedEof(_))));
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Derived {
    #[serde(skip_serializing_if = "Settable::is_unset")]
    name: Text,
    #[serde(skip_serializing_if = "Settable::is_unset")]
    workers: Uint16,
    #[serde(skip_serializing_if = "Settable::is_unset")]
    tls: Bool,
}

#[test]
fn derived_missing_keys_are_unset() {
    let d: Derived = serde_json::from_str(r#"{"workers": 0}"#).unwrap();
    assert!(!d.name.is_set());
    assert!(d.workers.is_set());
    assert_eq!(d.workers.value(), 0);
    assert!(!d.tls.is_set());
}

#[test]
fn derived_null_is_unset() {
    let d: Derived = serde_json::from_str(r#"{"name": null, "tls": false}"#).unwrap();
    assert!(!d.name.is_set());
    assert!(d.tls.is_set());
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"tls":false}"#);
}

#[test]
fn derived_round_trip() {
    let d = Derived {
        name: Text::from("w\"1".to_owned()),
        workers: Uint16::from(8),
        tls: Bool::default(),
    };
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"name":"w\"1","workers":8}"#);
    assert_eq!(serde_json::from_str::<Derived>(&json).unwrap(), d);
}
