use decimator::content::{self, CHAR_PREVIEW_PLACEHOLDER, CHAR_TICK_INTERVAL, LINE_PREVIEW_WIDTH};
use decimator::{ContentMode, DecimateError, ProgressReporter, SilentReporter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

/// Helper to write a document of `count` distinct numbered lines.
fn make_numbered_doc(dir: &Path, count: usize) -> PathBuf {
    let path = dir.join("doc.txt");
    let body: String = (0..count).map(|i| format!("line {:04}\n", i)).collect();
    fs::write(&path, body).unwrap();
    path
}

/// True when `needle` is a subsequence of `haystack` (order preserved).
fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|want| it.any(|have| have == want))
}

/// Reporter that records tick count and the last (completed, total) pair.
struct CountingReporter {
    ticks: AtomicUsize,
    last: Mutex<Option<(usize, usize)>>,
}

impl CountingReporter {
    fn new() -> Self {
        Self {
            ticks: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }
}

impl ProgressReporter for CountingReporter {
    fn tick(&self, completed: usize, total: usize) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        *self.last.lock().unwrap() = Some((completed, total));
    }
}

#[test]
fn test_lines_hundred_lines_strength_30() {
    let dir = TempDir::new().unwrap();
    let doc = make_numbered_doc(dir.path(), 100);
    let original: Vec<String> = fs::read_to_string(&doc)
        .unwrap()
        .split_inclusive('\n')
        .map(str::to_string)
        .collect();

    let stats = content::execute(&doc, 30, ContentMode::Lines, &SilentReporter).unwrap();
    assert_eq!(stats.removed, 30);
    assert_eq!(stats.kept, 70);

    let kept: Vec<String> = fs::read_to_string(&doc)
        .unwrap()
        .split_inclusive('\n')
        .map(str::to_string)
        .collect();
    assert_eq!(kept.len(), 70);

    // survivors keep their original relative order
    assert!(is_subsequence(&kept, &original));

    // lines are distinct here, so kept + removed partitions the original
    let removed: Vec<&String> = original.iter().filter(|l| !kept.contains(l)).collect();
    assert_eq!(removed.len(), 30);
}

#[test]
fn test_lines_strength_zero_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "keep me\nand me\n").unwrap();

    let stats = content::execute(&doc, 0, ContentMode::Lines, &SilentReporter).unwrap();
    assert_eq!(stats.removed, 0);
    assert_eq!(stats.kept, 2);
    assert_eq!(fs::read_to_string(&doc).unwrap(), "keep me\nand me\n");
}

#[test]
fn test_empty_document_is_noop() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("empty.txt");
    fs::write(&doc, "").unwrap();

    for mode in [ContentMode::Lines, ContentMode::Chars] {
        let stats = content::execute(&doc, 90, mode, &SilentReporter).unwrap();
        assert_eq!(stats.removed, 0);
        assert_eq!(stats.kept, 0);
    }
    assert_eq!(fs::read_to_string(&doc).unwrap(), "");
}

#[test]
fn test_lines_crlf_terminators_survive() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("crlf.txt");
    fs::write(&doc, "one\r\ntwo\r\nthree\r\nfour\r\n").unwrap();

    let stats = content::execute(&doc, 50, ContentMode::Lines, &SilentReporter).unwrap();
    assert_eq!(stats.removed, 2);
    assert_eq!(stats.kept, 2);

    let rewritten = fs::read_to_string(&doc).unwrap();
    let kept: Vec<&str> = rewritten.split_inclusive('\n').collect();
    assert_eq!(kept.len(), 2);
    for line in kept {
        assert!(line.ends_with("\r\n"), "terminator lost on {:?}", line);
    }
}

#[test]
fn test_chars_mode_keeps_subsequence() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("chars.txt");
    let body: String = (0..1000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    fs::write(&doc, &body).unwrap();

    let stats = content::execute(&doc, 40, ContentMode::Chars, &SilentReporter).unwrap();
    assert_eq!(stats.removed, 400);
    assert_eq!(stats.kept, 600);

    let kept: Vec<char> = fs::read_to_string(&doc).unwrap().chars().collect();
    let original: Vec<char> = body.chars().collect();
    assert_eq!(kept.len(), 600);
    assert!(is_subsequence(&kept, &original));
}

#[test]
fn test_plan_lines_preview_cap_and_order() {
    let dir = TempDir::new().unwrap();
    let doc = make_numbered_doc(dir.path(), 60);

    let plan = content::plan(&doc, 50, ContentMode::Lines).unwrap();
    assert_eq!(plan.total, 60);
    assert_eq!(plan.to_remove, 30);
    assert_eq!(plan.targets_preview.len(), 10);

    // entries are stripped lines, listed in ascending original order
    let indices: Vec<usize> = plan
        .targets_preview
        .iter()
        .map(|entry| {
            entry
                .strip_prefix("line ")
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("unexpected preview entry {:?}", entry))
        })
        .collect();
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_plan_lines_preview_below_cap() {
    let dir = TempDir::new().unwrap();
    let doc = make_numbered_doc(dir.path(), 10);

    let plan = content::plan(&doc, 30, ContentMode::Lines).unwrap();
    assert_eq!(plan.to_remove, 3);
    assert_eq!(plan.targets_preview.len(), 3);
}

#[test]
fn test_plan_lines_preview_truncates_long_lines() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("long.txt");
    fs::write(&doc, format!("{}\n", "x".repeat(300))).unwrap();

    let plan = content::plan(&doc, 100, ContentMode::Lines).unwrap();
    assert_eq!(plan.targets_preview.len(), 1);
    assert_eq!(plan.targets_preview[0].chars().count(), LINE_PREVIEW_WIDTH);
}

#[test]
fn test_plan_chars_placeholder_preview() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "abcdefghij").unwrap();

    let plan = content::plan(&doc, 50, ContentMode::Chars).unwrap();
    assert_eq!(plan.total, 10);
    assert_eq!(plan.to_remove, 5);
    assert_eq!(plan.targets_preview, vec![CHAR_PREVIEW_PLACEHOLDER.to_string()]);
}

#[test]
fn test_permissive_decode_never_errors() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("binary.txt");
    fs::write(&doc, b"ok line\n\xff\xfe broken\nlast\n").unwrap();

    let plan = content::plan(&doc, 50, ContentMode::Lines).unwrap();
    assert_eq!(plan.total, 3);

    // execution rewrites with replacement characters instead of failing
    let stats = content::execute(&doc, 100, ContentMode::Lines, &SilentReporter).unwrap();
    assert_eq!(stats.removed, 3);
    assert_eq!(fs::read_to_string(&doc).unwrap(), "");
}

#[test]
fn test_reporter_ticks_once_per_line() {
    let dir = TempDir::new().unwrap();
    let doc = make_numbered_doc(dir.path(), 50);

    let reporter = CountingReporter::new();
    content::execute(&doc, 10, ContentMode::Lines, &reporter).unwrap();

    assert_eq!(reporter.ticks.load(Ordering::Relaxed), 50);
    assert_eq!(*reporter.last.lock().unwrap(), Some((50, 50)));
}

#[test]
fn test_reporter_throttled_in_chars_mode() {
    let dir = TempDir::new().unwrap();
    let doc = dir.path().join("doc.txt");
    fs::write(&doc, "y".repeat(5000)).unwrap();

    let reporter = CountingReporter::new();
    content::execute(&doc, 10, ContentMode::Chars, &reporter).unwrap();

    // ticks fire at indices 0, 2000 and 4000 only
    assert_eq!(CHAR_TICK_INTERVAL, 2000);
    assert_eq!(reporter.ticks.load(Ordering::Relaxed), 3);
    assert_eq!(*reporter.last.lock().unwrap(), Some((4001, 5000)));
}

#[test]
fn test_repeated_plans_agree_on_counts_only() {
    let dir = TempDir::new().unwrap();
    let doc = make_numbered_doc(dir.path(), 40);

    let first = content::plan(&doc, 25, ContentMode::Lines).unwrap();
    for _ in 0..5 {
        let next = content::plan(&doc, 25, ContentMode::Lines).unwrap();
        assert_eq!(next.total, first.total);
        assert_eq!(next.to_remove, first.to_remove);
    }
}

#[test]
fn test_missing_document_propagates() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.txt");

    let plan = content::plan(&missing, 50, ContentMode::Lines);
    assert!(matches!(plan, Err(DecimateError::NotFound(_))));

    let exec = content::execute(&missing, 50, ContentMode::Chars, &SilentReporter);
    assert!(matches!(exec, Err(DecimateError::NotFound(_))));
}
