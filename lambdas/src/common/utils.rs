use lambda_http::Response;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, Serializer};
use std::io;

use crate::common::config::{Config, REPLY_MARKER_HEADER};
use crate::common::errors::Error;

/// Compact JSON formatter that also escapes `<`, `>`, `&`, U+2028 and U+2029
/// so the body is safe to embed in HTML.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        CompactFormatter.write_string_fragment(writer, &fragment[start..])
    }
}

pub fn to_html_safe_json<T: Serialize>(value: &T) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

pub fn json_response(status: u16, body: String, config: &Config) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header(REPLY_MARKER_HEADER, config.reply_marker.as_str())
        .body(body)?;

    Ok(response)
}
