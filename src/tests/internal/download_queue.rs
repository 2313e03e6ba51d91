//! 下载队列测试：skip 的夹取与幂等、pop 的顺序保持。

use std::collections::HashMap;

use crate::catalog::structs::{CourseCatalog, DownloadQueue, LessonMeta};

fn catalog_with_hashes(hashes: &[&str]) -> CourseCatalog {
    let lesson_data = hashes
        .iter()
        .enumerate()
        .map(|(ix, id)| {
            (
                id.to_string(),
                LessonMeta {
                    index: ix as u32,
                    title: format!("Lesson {ix}"),
                    source_base: format!("https://media.example/{id}"),
                },
            )
        })
        .collect::<HashMap<_, _>>();

    CourseCatalog {
        slug: "test-course".to_string(),
        title: "Test Course".to_string(),
        lesson_data,
        lesson_hashes: hashes.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn queue_order_matches_lesson_hashes() {
    let catalog = catalog_with_hashes(&["h1", "h2", "h3"]);
    let mut queue = DownloadQueue::from_catalog(&catalog);

    assert_eq!(queue.pop().as_deref(), Some("h1"));
    assert_eq!(queue.pop().as_deref(), Some("h2"));
    assert_eq!(queue.pop().as_deref(), Some("h3"));
    assert_eq!(queue.pop(), None);
}

#[test]
fn skip_removes_exactly_n_leading_entries() {
    let catalog = catalog_with_hashes(&["h1", "h2", "h3", "h4"]);
    let mut queue = DownloadQueue::from_catalog(&catalog);

    queue.skip(2);

    assert_eq!(queue.len(), 2);
    // 剩余条目保持相对顺序
    assert_eq!(queue.pop().as_deref(), Some("h3"));
    assert_eq!(queue.pop().as_deref(), Some("h4"));
}

#[test]
fn skip_clamps_when_n_exceeds_length() {
    let catalog = catalog_with_hashes(&["h1", "h2"]);
    let mut queue = DownloadQueue::from_catalog(&catalog);

    queue.skip(99);
    assert!(queue.is_empty());

    // 对空队列重复 skip 幂等
    queue.skip(99);
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

#[test]
fn skip_zero_is_noop() {
    let catalog = catalog_with_hashes(&["h1", "h2"]);
    let mut queue = DownloadQueue::from_catalog(&catalog);

    queue.skip(0);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop().as_deref(), Some("h1"));
}
