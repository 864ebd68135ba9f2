//! End-to-end reads over an in-memory gather.
//!
//! The fixture mirrors a small node file: three channels (components 2, 3,
//! 4) with two contiguous one-second traces each, sampled at 500 Hz.

use rg16_rs::{
    FileHeader, MemorySource, ReadOptions, Rg16Error, SensorType, Stream, TraceHeader, UtcTime,
    read, read_rg16,
};

const RATE: f64 = 500.0;
const NPTS: usize = 500;
/// 2017-02-01T00:00:00Z in microseconds.
const T0_MICROS: i64 = 1_485_907_200_000_000;

fn three_chans_six_traces() -> MemorySource {
    let mut source = MemorySource::new(FileHeader::rg16(1));
    for segment in 0..2i64 {
        for component in 2..=4u8 {
            let data = (0..NPTS)
                .map(|i| (segment as usize * NPTS + i) as f32 * f32::from(component))
                .collect();
            source.push(
                TraceHeader::new()
                    .with_receiver(1, 101, 1)
                    .with_channel(component - 1, component)
                    .with_sensor_type(SensorType::Geophone)
                    .with_unit_serial(4242)
                    .with_start_time(UtcTime::from_micros(T0_MICROS + segment * 1_000_000))
                    .with_sampling_rate(RATE),
                data,
            );
        }
    }
    source
}

fn t(offset_secs: f64) -> UtcTime {
    UtcTime::from_micros(T0_MICROS).add_seconds(offset_secs)
}

fn components(stream: &Stream) -> Vec<char> {
    stream
        .iter()
        .filter_map(|tr| tr.id().component())
        .collect()
}

#[test]
fn generic_and_direct_reads_agree() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let source = three_chans_six_traces();
    for opts in [
        ReadOptions::new(),
        ReadOptions::new().with_merge(true),
        ReadOptions::new().with_standard_orientation(true),
        ReadOptions::new().with_window(t(0.5), t(1.5)),
    ] {
        let detected = read(&mut source.clone(), None, &opts).unwrap();
        let named = read(&mut source.clone(), Some("rg16"), &opts).unwrap();
        let direct = read_rg16(&mut source.clone(), &opts).unwrap();
        assert_eq!(detected, direct);
        assert_eq!(named, direct);
    }
}

#[test]
fn unmerged_read_keeps_every_trace() {
    let stream = read_rg16(&mut three_chans_six_traces(), &ReadOptions::new()).unwrap();
    assert_eq!(stream.len(), 6);
    assert_eq!(stream.traces()[0].id().as_str(), "1.101.1.DP2");
    assert_eq!(stream.traces()[0].stats.starttime.to_string(), "2017-02-01T00:00:00.000000Z");
    assert_eq!(stream.traces()[0].stats.endtime(), t(0.998));
    assert!(stream.iter().all(|tr| tr.stats.npts == NPTS));
}

#[test]
fn merge_never_adds_traces() {
    let plain = read_rg16(&mut three_chans_six_traces(), &ReadOptions::new()).unwrap();
    let merged = read_rg16(
        &mut three_chans_six_traces(),
        &ReadOptions::new().with_merge(true),
    )
    .unwrap();

    assert!(merged.len() <= plain.len());
    assert_eq!(merged.len(), 3);
    for trace in &merged {
        assert_eq!(trace.stats.npts, 2 * NPTS);
        assert_eq!(trace.stats.endtime(), t(1.998));
    }
    let z = merged.select("1.101.1.DP2").next().unwrap();
    let expected: Vec<f32> = (0..2 * NPTS).map(|i| i as f32 * 2.0).collect();
    assert_eq!(z.data, expected);
}

#[test]
fn standard_orientation_uses_zne() {
    let stream = read_rg16(
        &mut three_chans_six_traces(),
        &ReadOptions::new().with_standard_orientation(true),
    )
    .unwrap();
    assert_eq!(stream.len(), 6);
    assert!(components(&stream).iter().all(|c| matches!(c, 'Z' | 'N' | 'E')));

    let raw = read_rg16(&mut three_chans_six_traces(), &ReadOptions::new()).unwrap();
    for (oriented, raw) in stream.iter().zip(raw.iter()) {
        if oriented.id().component() == Some('Z') {
            assert_eq!(raw.id().component(), Some('2'));
            assert!(oriented.data.iter().zip(&raw.data).all(|(a, b)| *a == -*b));
        } else {
            assert_eq!(oriented.data, raw.data);
        }
    }
}

#[test]
fn standard_orientation_rejects_unknown_component() {
    let mut source = MemorySource::new(FileHeader::rg16(1)).with_trace(
        TraceHeader::new().with_channel(1, 1).with_sampling_rate(RATE),
        vec![0.0],
    );
    let err = read_rg16(&mut source, &ReadOptions::new().with_standard_orientation(true))
        .unwrap_err();
    assert!(matches!(err, Rg16Error::UnknownComponent(1)));
}

#[test]
fn time_window_reads_only_what_it_needs() {
    let mut source = three_chans_six_traces();
    let opts = ReadOptions::new().with_window(t(1.0), t(1.5));
    let stream = read_rg16(&mut source, &opts).unwrap();

    assert_eq!(stream.len(), 3);
    for trace in &stream {
        assert_eq!(trace.stats.starttime, t(1.0));
        assert_eq!(trace.stats.endtime(), t(1.5));
        assert_eq!(trace.stats.npts, 251);
    }
    assert_eq!(source.samples_read(), 3 * 251);
}

#[test]
fn window_then_merge_spans_the_boundary() {
    let opts = ReadOptions::new()
        .with_window(t(0.9), t(1.1))
        .with_merge(true)
        .with_standard_orientation(true);
    let stream = read_rg16(&mut three_chans_six_traces(), &opts).unwrap();

    assert_eq!(stream.len(), 3);
    let ids: Vec<_> = stream.iter().map(|tr| tr.id().to_string()).collect();
    assert_eq!(ids, ["1.101.1.DPE", "1.101.1.DPN", "1.101.1.DPZ"]);
    for trace in &stream {
        assert_eq!(trace.stats.starttime, t(0.9));
        assert_eq!(trace.stats.npts, 101);
    }
}

#[test]
fn window_outside_file_is_empty() {
    let opts = ReadOptions::new().with_window(t(10.0), t(20.0));
    let mut source = three_chans_six_traces();
    let stream = read_rg16(&mut source, &opts).unwrap();
    assert!(stream.is_empty());
    assert_eq!(source.samples_read(), 0);
}

#[test]
fn details_carry_header_fields() {
    let stream = read_rg16(
        &mut three_chans_six_traces(),
        &ReadOptions::new().with_details(true),
    )
    .unwrap();
    let details = stream.traces()[4].stats.rg16.as_ref().unwrap();
    assert_eq!(details.trace_number, 5);
    assert_eq!(details.component, 3);
    assert_eq!(details.channel_set, 2);
    assert_eq!(details.unit_serial, 4242);
    assert_eq!(details.sensor_type, SensorType::Geophone);
}

#[test]
fn options_from_config() {
    let opts: ReadOptions = serde_json::from_str(
        r#"{"merge": true, "starttime": "2017-02-01T00:00:01Z", "endtime": "2017-02-01T00:00:01.5Z"}"#,
    )
    .unwrap();
    let stream = read_rg16(&mut three_chans_six_traces(), &opts).unwrap();
    assert_eq!(stream.len(), 3);
    assert!(stream.iter().all(|tr| tr.stats.npts == 251));
}

#[test]
fn merged_traces_keep_first_segment_details() {
    let opts = ReadOptions::new().with_merge(true).with_details(true);
    let stream = read_rg16(&mut three_chans_six_traces(), &opts).unwrap();

    assert_eq!(stream.len(), 3);
    let numbers: Vec<_> = stream
        .iter()
        .map(|tr| tr.stats.rg16.as_ref().unwrap().trace_number)
        .collect();
    assert_eq!(numbers, [1, 2, 3]);
    for trace in &stream {
        let details = trace.stats.rg16.as_ref().unwrap();
        assert_eq!(trace.id().component(), char::from_digit(u32::from(details.component), 10));
    }
}

#[test]
fn multi_digit_component_is_rejected() {
    let mut source = MemorySource::new(FileHeader::rg16(1)).with_trace(
        TraceHeader::new().with_channel(1, 35).with_sampling_rate(RATE),
        vec![1.0],
    );
    let err = read_rg16(&mut source, &ReadOptions::new()).unwrap_err();
    assert!(matches!(err, Rg16Error::InvalidComponent(35)));
}
