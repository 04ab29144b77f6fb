use crate::helpers::adapters::CountingAdapter;
use crate::helpers::fixtures::{tracked_schema, Tracked};
use anyhow::Result;
use itertools::iproduct;
use std::io::Cursor;
use strata_engine::{decode, encode_to_vec};

const PRE: Tracked = Tracked {
    head: 10,
    counted: 20,
    tail: 30,
};

/// Writes `PRE` at `written`, then reads it back at `reading`, counting adapter calls.
fn write_then_read(
    since: u32,
    until: Option<u32>,
    written: u32,
    reading: u32,
) -> Result<(Tracked, usize, usize)> {
    CountingAdapter::reset();
    let buf = encode_to_vec(&PRE, &tracked_schema(written, since, until)?)?;
    let writes = CountingAdapter::writes();

    let mut post = Tracked::default();
    let mut r = Cursor::new(&buf);
    decode(&mut post, &tracked_schema(reading, since, until)?, &mut r)?;
    assert_eq!(buf.len() as u64, r.position());

    Ok((post, writes, CountingAdapter::reads()))
}

#[test]
fn newer_reader_keeps_fields_still_wanted() -> Result<()> {
    for (since, written, reading) in iproduct!(1..5u32, 1..6u32, 1..8u32) {
        if !(since <= written && written <= reading) {
            continue;
        }
        let (post, _, reads) = write_then_read(since, None, written, reading)?;
        assert_eq!(PRE, post, "since {} {} -> {}", since, written, reading);
        assert_eq!(1, reads);
    }
    Ok(())
}

#[test]
fn field_unknown_to_writer_is_left_alone() -> Result<()> {
    for (since, written, reading) in iproduct!(2..6u32, 1..6u32, 1..8u32) {
        if written >= since {
            continue;
        }
        let (post, writes, reads) = write_then_read(since, None, written, reading)?;
        assert_eq!(0, writes);
        assert_eq!(0, reads);
        assert_eq!(-1, post.counted);
        assert_eq!((PRE.head, PRE.tail), (post.head, post.tail));
    }
    Ok(())
}

#[test]
fn field_retired_by_reader_is_consumed() -> Result<()> {
    for (until, written, reading) in iproduct!(2..6u32, 1..6u32, 1..8u32) {
        if !(written < until && reading >= until) {
            continue;
        }
        let (post, writes, reads) = write_then_read(1, Some(until), written, reading)?;
        assert_eq!(1, writes);
        assert_eq!(1, reads);
        assert_eq!(-1, post.counted);
        assert_eq!((PRE.head, PRE.tail), (post.head, post.tail));
    }
    Ok(())
}

#[test]
fn every_window_stays_aligned() -> Result<()> {
    let untils = (1..6u32).map(Some).chain([None]);
    for (since, until, written, reading) in iproduct!(1..6u32, untils, 1..6u32, 1..6u32) {
        if until.map_or(false, |u| since > u) {
            continue;
        }
        let (post, writes, reads) = write_then_read(since, until, written, reading)?;

        let emitted = since <= written && until.map_or(true, |u| written < u);
        let wanted = until.map_or(true, |u| reading < u);
        let ctx = format!(
            "since {} until {:?} written {} reading {}",
            since, until, written, reading
        );

        assert_eq!(usize::from(emitted), writes, "{}", ctx);
        assert_eq!(usize::from(emitted), reads, "{}", ctx);
        let expected_counted = if emitted && wanted { PRE.counted } else { -1 };
        assert_eq!(expected_counted, post.counted, "{}", ctx);
        assert_eq!((PRE.head, PRE.tail), (post.head, post.tail), "{}", ctx);
    }
    Ok(())
}
