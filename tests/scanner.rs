mod common;

use common::{three_traces, write_segy, Trace};
use segyscan::scan::Coord;
use segyscan::segy::SegyReader;
use segyscan::{Domain, ScanOptions, Scanner, SegyScanError};

fn quiet_options() -> ScanOptions {
    ScanOptions {
        write_maps: false,
        ..ScanOptions::default()
    }
}

#[test]
fn run_collects_every_decodable_file() {
    let dir = tempfile::tempdir().unwrap();
    write_segy(dir.path(), "a.sgy", 4000, 1000, &three_traces());
    write_segy(dir.path(), "b.sgy", 0, 1000, &three_traces());
    write_segy(dir.path(), "c.segy", 2000, 10, &three_traces()[1..]);

    let out = dir.path().join("out");
    let options = ScanOptions {
        output_dir: Some(out.clone()),
        ..quiet_options()
    };
    let outcome = Scanner::new(options).run(dir.path()).unwrap();

    assert_eq!(outcome.output_dir, out);
    assert_eq!(outcome.aggregator.labels().collect::<Vec<_>>(), ["a", "c"]);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(outcome.skipped[0].path.ends_with("b.sgy"));
    assert!(outcome.skipped[0].reason.contains("sample interval"));

    let a = outcome.aggregator.file("a").unwrap();
    assert_eq!(a.summary.num_traces, 3);
    assert_eq!(a.summary.sample_interval_ms, 4);
    assert_eq!(a.summary.max_time_ms, 3996);
    assert_eq!(a.sources.len(), 2);
    assert_eq!(a.receivers.len(), 2);
    assert_eq!(a.cdps.len(), 2);

    let first = a.sources.iter().next().unwrap();
    assert_eq!((first.ffid, first.x, first.y), (1, 100, 200));
}

#[test]
fn cdp_tables_are_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let bin = Trace {
        cdp: 7,
        cdp_x: 1,
        cdp_y: 1,
        ..Trace::default()
    };
    let a = write_segy(dir.path(), "a.sgy", 1000, 2, &[bin]);
    let b = write_segy(dir.path(), "b.sgy", 1000, 2, &[bin, bin]);

    let (aggregator, skipped) = Scanner::default().scan_files(&[a, b]).unwrap();
    assert!(skipped.is_empty());
    for label in ["a", "b"] {
        let scan = aggregator.file(label).unwrap();
        assert_eq!(scan.cdps.len(), 1);
        assert!(scan.cdps.get(Coord { x: 1, y: 1 }).is_some());
    }
}

#[test]
fn trailing_partial_trace_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_segy(dir.path(), "a.sgy", 1000, 10, &three_traces());
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend(std::iter::repeat(0xFF).take(100));
    std::fs::write(&path, bytes).unwrap();

    let reader = SegyReader::open(&path).unwrap();
    assert_eq!(reader.num_traces(), 3);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scanner::new(quiet_options())
        .run(&dir.path().join("missing"))
        .unwrap_err();
    assert!(matches!(err, SegyScanError::PathNotFound { .. }));
}

#[test]
fn only_selected_domains_are_written() {
    let dir = tempfile::tempdir().unwrap();
    write_segy(dir.path(), "a.sgy", 1000, 2, &three_traces());

    let options = quiet_options().with_domains([Domain::Cdp]);
    let outcome = Scanner::new(options).run(dir.path()).unwrap();

    let tables = outcome.output_dir.join("tables");
    assert!(tables.join("a_cdp.txt").exists());
    assert!(!tables.join("a_sou.txt").exists());
    assert!(!tables.join("a_rec.txt").exists());
}
