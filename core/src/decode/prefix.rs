use serde_json::Deserializer;

use crate::record::LogRecord;

/// Result of decoding the front of a byte slice.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Consumed {
    pub records: Vec<LogRecord>,
    /// Length of the decoded prefix, separators included.
    pub consumed: usize,
}

/// Decodes as many complete units (JSON arrays of records) as the front of
/// `input` holds.
///
/// Whitespace between units is consumed along with them. Decoding stops at
/// the first unit that is incomplete or invalid; neither case is an error
/// here since more bytes may still arrive.
pub fn try_consume_prefix(input: &[u8]) -> Consumed {
    let mut out = Consumed::default();

    loop {
        out.consumed += leading_whitespace(&input[out.consumed..]);
        let rest = &input[out.consumed..];
        if rest.is_empty() {
            break;
        }

        let mut units = Deserializer::from_slice(rest).into_iter::<Vec<LogRecord>>();
        match units.next() {
            Some(Ok(unit)) => {
                let len = units.byte_offset();
                tracing::trace!(
                    target: "applog.decode",
                    records = unit.len(),
                    bytes = len,
                    "unit decoded"
                );
                out.consumed += len;
                out.records.extend(unit);
            }
            Some(Err(err)) => {
                if err.is_eof() {
                    tracing::trace!(target: "applog.decode", pending = rest.len(), "unit incomplete");
                } else {
                    tracing::trace!(
                        target: "applog.decode",
                        pending = rest.len(),
                        error = %err,
                        "unit not decodable yet"
                    );
                }
                break;
            }
            None => break,
        }
    }

    out
}

fn leading_whitespace(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count()
}
