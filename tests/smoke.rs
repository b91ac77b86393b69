use gazeselect_core::FrameTick;
use gazeselect_testkit::{EventRecord, JsonlSink};

#[test]
fn event_stream_can_be_written() {
    let mut sink = JsonlSink::create(std::env::temp_dir().join("gazeselect-eventlog.jsonl"))
        .expect("can create temp log");
    let record = EventRecord {
        tick: FrameTick::ZERO.advance(1),
        time: 0.5,
        kind: "SmokeTest",
        handle: 1,
    };
    sink.write(&record).expect("can write event");
    sink.flush().expect("can flush");
}
