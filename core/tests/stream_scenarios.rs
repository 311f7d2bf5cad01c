mod common;

use applog_core::api::{
    run_stream, MemorySource, ReaderSource, RecordFormatter, StreamOutcome, Zone,
};
use common::{encode_unit, render_all, sample_records, utc_formatter};
use pretty_assertions::assert_eq;

async fn run_with(mut source: MemorySource, formatter: &RecordFormatter) -> (StreamOutcome, String) {
    let mut out = Vec::new();
    let outcome = run_stream(&mut source, &mut out, formatter).await.unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn two_records_single_chunk() {
    let records = sample_records();
    let (outcome, out) = run_with(
        MemorySource::new(vec![encode_unit(&records)]),
        &utc_formatter(),
    )
    .await;

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[tsuru]:"));
    assert!(!lines[0].contains("]["));
    assert!(lines[1].contains("[app][abcdef]:"));
    assert_eq!(outcome.records, 2);
}

#[tokio::test]
async fn record_then_unparseable_tail() {
    let records = &sample_records()[..1];
    let mut body = encode_unit(records);
    body.extend_from_slice(b"\nunparseable data");

    let (outcome, out) = run_with(MemorySource::new(vec![body]), &utc_formatter()).await;
    let expected = format!("{}Error: unparseable data", render_all(records));
    assert_eq!(out, expected);
    assert!(outcome.has_diagnostic());
}

#[tokio::test]
async fn three_unaligned_chunks_match_one_chunk() {
    let records = sample_records();
    let body = encode_unit(&records);
    let (_, whole) = run_with(MemorySource::new(vec![body.clone()]), &utc_formatter()).await;
    let (outcome, split) = run_with(
        MemorySource::split_at(&body, &[3, body.len() / 2 + 1]),
        &utc_formatter(),
    )
    .await;

    assert_eq!(outcome.chunks, 3);
    assert_eq!(split, whole);
    assert_eq!(split, render_all(&records));
}

#[tokio::test]
async fn follow_style_stream_of_many_units() {
    let records = sample_records();
    let mut chunks = Vec::new();
    for r in &records {
        let mut unit = encode_unit(std::slice::from_ref(r));
        unit.push(b'\n');
        chunks.push(unit);
    }

    let (outcome, out) = run_with(MemorySource::new(chunks), &utc_formatter()).await;
    assert_eq!(out, render_all(&records));
    assert!(!outcome.has_diagnostic());
}

#[tokio::test]
async fn colored_output_keeps_messages_plain() {
    let records = sample_records();
    let formatter = RecordFormatter::new(Zone::utc(), true);
    let (_, out) = run_with(MemorySource::new(vec![encode_unit(&records)]), &formatter).await;

    let plain = utc_formatter();
    for (line, rec) in out.lines().zip(&records) {
        assert!(line.contains(&plain.prefix(rec)));
        assert!(line.ends_with(&format!(" {}", rec.message)));
    }
}

#[tokio::test]
async fn empty_body_ends_silently_and_successfully() {
    let mut source = ReaderSource::new(&b""[..]);
    let mut out = Vec::new();
    let outcome = run_stream(&mut source, &mut out, &utc_formatter())
        .await
        .unwrap();

    assert!(out.is_empty());
    assert_eq!(outcome, StreamOutcome::no_content());
}
