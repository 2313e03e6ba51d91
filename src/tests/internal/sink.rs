//! 存储汇测试：本地目录只建一次、远端流式上传与拒绝。

use wiremock::matchers::{body_bytes, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::sink::{LocalFileSink, RemoteBlobSink, SinkError, StorageSink};

#[tokio::test]
async fn local_sink_creates_dir_once_across_items() {
    let base = tempfile::tempdir().unwrap();
    let course_dir = base.path().join("test-course");
    let sink = LocalFileSink::new(&course_dir);

    // 连续写两个条目，目录只应创建一次且不报错
    for name in ["01.a.webm", "02.b.webm"] {
        let mut stream = sink.open(name).await.expect("open 应成功");
        stream.write(b"data").await.unwrap();
        stream.finish().await.unwrap();
    }

    assert!(course_dir.is_dir());
    assert!(course_dir.join("01.a.webm").is_file());
    assert!(course_dir.join("02.b.webm").is_file());
}

#[tokio::test]
async fn local_sink_overwrites_partial_file_on_rerun() {
    let base = tempfile::tempdir().unwrap();
    let sink = LocalFileSink::new(base.path());

    let mut first = sink.open("01.a.webm").await.unwrap();
    first.write(b"partial-then-interrupted").await.unwrap();
    first.finish().await.unwrap();

    let mut second = sink.open("01.a.webm").await.unwrap();
    second.write(b"clean").await.unwrap();
    second.finish().await.unwrap();

    let saved = std::fs::read(base.path().join("01.a.webm")).unwrap();
    assert_eq!(saved, b"clean");
}

#[tokio::test]
async fn remote_sink_streams_body_to_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blobs"))
        .and(query_param("filename", "01.Intro.webm"))
        .and(query_param("parent", "folder-42"))
        .and(body_bytes(b"hello blob".to_vec()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sink = RemoteBlobSink::new(
        reqwest::Client::new(),
        &format!("{}/blobs", server.uri()),
        Some("folder-42".to_string()),
    )
    .unwrap();

    let mut stream = sink.open("01.Intro.webm").await.unwrap();
    stream.write(b"hello ").await.unwrap();
    stream.write(b"blob").await.unwrap();
    stream.finish().await.expect("上传应被接受");
}

#[tokio::test]
async fn remote_sink_surfaces_rejected_upload() {
    let server = MockServer::start().await;

    // 远端配额耗尽
    Mock::given(method("POST"))
        .and(path("/blobs"))
        .respond_with(ResponseTemplate::new(507))
        .mount(&server)
        .await;

    let sink = RemoteBlobSink::new(
        reqwest::Client::new(),
        &format!("{}/blobs", server.uri()),
        None,
    )
    .unwrap();

    let mut stream = sink.open("01.Intro.webm").await.unwrap();
    stream.write(b"data").await.unwrap();
    let err = stream.finish().await.unwrap_err();

    match err {
        SinkError::UploadRejected(status) => assert_eq!(status.as_u16(), 507),
        other => panic!("预期 UploadRejected，得到 {other:?}"),
    }
}
