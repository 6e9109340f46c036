//! End-to-end integration tests

use std::path::Path;

use crate::error::ExtractError;
use crate::output::{generate_output_path, OutputNames};
use crate::pipeline::extract_to_path;
use crate::tests::fixtures::{TestTrack, ASS_HEADER};
use crate::types::SubtitleTrack;

fn run(track: &TestTrack, path: &Path) -> crate::error::Result<usize> {
    let mut source = track.source();
    extract_to_path(&mut source, track.stream, track.codec_id, track.header, path)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn dialogue_lines(script: &str) -> Vec<&str> {
    script
        .split("\r\n")
        .filter(|l| l.starts_with("Dialogue:"))
        .collect()
}

fn assert_crlf_only(script: &str) {
    let stripped = script.replace("\r\n", "");
    assert!(!stripped.contains('\n'), "bare LF in output");
    assert!(!stripped.contains('\r'), "bare CR in output");
    assert!(script.ends_with("\r\n"));
}

#[test]
fn test_ass_passthrough_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.eng.ass");

    let events = run(&TestTrack::ass(), &out).unwrap();
    assert_eq!(events, 4);

    let script = read(&out);
    assert_crlf_only(&script);
    assert!(script.starts_with(ASS_HEADER));
    assert!(script.contains("\r\n\r\n[Events]\r\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\r\n"));
    assert_eq!(
        dialogue_lines(&script),
        vec![
            "Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,First",
            "Dialogue: 1,0:00:01.00,0:00:03.00,Sign,Narrator,5,5,5,,Second, with comma",
            "Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Third",
            "Dialogue: 0,0:00:10.00,0:00:12.00,Default,,0,0,0,,Later line",
        ]
    );
}

#[test]
fn test_ssa_converted_and_gap_filled() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.jpn.ass");

    run(&TestTrack::ssa(), &out).unwrap();
    let script = read(&out);
    assert_crlf_only(&script);

    assert!(script.contains("ScriptType: v4.00+\r\n"));
    assert!(script.contains("[V4+ Styles]\r\n"));
    assert!(!script.contains("[V4 Styles]"));
    assert!(script.contains(
        "Style: Default,Tahoma,24,16777215,65535,65535,-2147483640,-1,0,0,0,100,100,0,0,1,1,2,2,30,30,10,0\r\n"
    ));
    assert!(script.contains(
        "Style: Top,Tahoma,24,16777215,65535,65535,-2147483640,-1,0,0,0,100,100,0,0,1,1,2,8,30,30,10,0\r\n"
    ));
    assert_eq!(script.matches("[Events]").count(), 1);
    assert_eq!(script.matches("Format: Layer, Start").count(), 1);
    assert!(script.ends_with(
        "[Events]\r\n\
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\r\n\
Dialogue: 0,0:00:02.00,0:00:04.00,Default,,0000,0000,0000,,Hello\r\n\
Dialogue: 0,0:00:04.00,0:00:09.00,Top,,0000,0000,0000,,World\r\n"
    ));
}

#[test]
fn test_srt_synthesized_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.und.ass");

    run(&TestTrack::srt(), &out).unwrap();
    let script = read(&out);
    assert_crlf_only(&script);

    assert!(script.starts_with("[Script Info]\r\n"));
    assert!(script.contains("Style: Default,Microsoft YaHei,"));
    assert_eq!(
        dialogue_lines(&script),
        vec![
            "Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,{\\i1}First{\\i0} line\\Nsecond line",
            "Dialogue: 0,0:00:05.00,0:00:07.00,Default,,0,0,0,,Second {\\b1}cue{\\b0}",
            "Dialogue: 0,0:00:08.00,0:00:13.00,Default,,0,0,0,,{\\c&H0080FF&}orange{\\c}",
        ]
    );
}

#[test]
fn test_image_track_rejected_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.eng.ass");

    let err = run(&TestTrack::pgs(), &out).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedCodec(ref id) if id == "S_HDMV/PGS"));
    assert!(!out.exists());
}

#[test]
fn test_read_failure_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.eng.ass");
    let track = TestTrack::ass();

    let mut source = track.source().fail_after(3);
    let err = extract_to_path(&mut source, track.stream, track.codec_id, track.header, &out)
        .unwrap_err();

    assert!(matches!(err, ExtractError::PacketRead(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_output_replaced_whole() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("movie.eng.ass");
    std::fs::write(&out, "stale contents that are much longer than nothing").unwrap();

    run(&TestTrack::srt(), &out).unwrap();
    let script = read(&out);
    assert!(script.starts_with("[Script Info]\r\n"));
    assert!(!script.contains("stale"));
}

#[test]
fn test_batch_naming_across_tracks() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("Show S01E01.mkv");
    let mut names = OutputNames::new();

    let fixtures = [TestTrack::ass(), TestTrack::ssa()];
    let mut written = Vec::new();
    for (i, fixture) in fixtures.iter().enumerate() {
        let track = SubtitleTrack {
            stream_index: fixture.stream,
            index: i + 1,
            language: "eng".to_string(),
            language_name: "English".to_string(),
            format_type: fixture.name.to_uppercase(),
            codec_id: fixture.codec_id.to_string(),
            name: if i == 0 { String::new() } else { "Signs & Songs".to_string() },
            is_default: i == 0,
            is_forced: false,
            is_text: true,
            is_extractable: true,
        };
        let path = generate_output_path(&video, &track, &mut names);
        run(fixture, &path).unwrap();
        written.push(path);
    }

    assert_eq!(written[0], dir.path().join("Show S01E01.eng.ass"));
    assert_eq!(written[1], dir.path().join("Show S01E01.eng.Signs _ Songs.ass"));
    assert!(written.iter().all(|p| p.exists()));
}
