//! 展示文件名测试：两位序号补零规则与非法字符清理。

use crate::catalog::structs::LessonMeta;
use crate::lesson::{lesson_filename, sanitize_filename};

fn lesson(index: u32, title: &str) -> LessonMeta {
    LessonMeta {
        index,
        title: title.to_string(),
        source_base: "https://media.example/x".to_string(),
    }
}

#[test]
fn pads_index_below_ten() {
    // 0 基序号 2 → 展示序号 3，补零到两位
    let name = lesson_filename(&lesson(2, "Intro to X"), "mp4");
    assert_eq!(name, "03.Intro to X.mp4");
}

#[test]
fn no_padding_from_ten_upwards() {
    let name = lesson_filename(&lesson(11, "Intro to X"), "mp4");
    assert_eq!(name, "12.Intro to X.mp4");
}

#[test]
fn sanitizes_illegal_title_characters() {
    let name = lesson_filename(&lesson(0, "What is <Rust>? A/B"), "webm");
    assert_eq!(name, "01.What is Rust AB.webm");
}

#[test]
fn sanitize_keeps_spaces_and_inner_dots() {
    assert_eq!(sanitize_filename("03.Intro to X.mp4"), "03.Intro to X.mp4");
}

#[test]
fn sanitize_strips_illegal_characters() {
    assert_eq!(
        sanitize_filename(r#"a/b\c?d<e>f:g*h|i"j.txt"#),
        "abcdefghij.txt"
    );
}

#[test]
fn sanitize_trims_leading_trailing_dots_and_spaces() {
    assert_eq!(sanitize_filename("  ..file.txt.. "), "file.txt");
}

#[test]
fn sanitize_caps_length_on_char_boundary() {
    let long = "课".repeat(200); // 600 字节
    let out = sanitize_filename(&long);
    assert!(out.len() <= 255);
    assert!(out.chars().all(|c| c == '课'));
}
