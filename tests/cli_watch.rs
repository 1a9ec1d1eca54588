//! Integration tests for `skeleton watch`
//!
//! The watcher runs as a child process emitting NDJSON. Lines are read on a
//! background thread so assertions can wait on specific events with a timeout.

mod common;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process::Child;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use common::TestSite;
use serde_json::Value;

const TIMEOUT: Duration = Duration::from_secs(10);

struct Watcher {
    child: Child,
    events: Receiver<Value>,
    seen: Vec<Value>,
}

impl Watcher {
    fn start(site: &TestSite) -> Self {
        let mut child = site.spawn(&["--json", "watch", "--interval", "50"]);
        let stdout = child.stdout.take().expect("stdout is piped");
        let (tx, events) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if let Ok(value) = serde_json::from_str::<Value>(&line) {
                    if tx.send(value).is_err() {
                        break;
                    }
                }
            }
        });
        Self {
            child,
            events,
            seen: Vec::new(),
        }
    }

    /// Wait for the `n`th occurrence of `event` (counting everything seen so far)
    fn wait_for(&mut self, event: &str, n: usize) -> &[Value] {
        let deadline = Instant::now() + TIMEOUT;
        while self.count(event) < n {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(value) => self.seen.push(value),
                Err(_) => panic!(
                    "timed out waiting for {} x{}; seen: {:?}",
                    event, n, self.seen
                ),
            }
        }
        &self.seen
    }

    fn count(&self, event: &str) -> usize {
        self.seen.iter().filter(|e| e["event"] == event).count()
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Push a file's mtime into the future so the change is seen regardless of
/// filesystem timestamp granularity
fn bump(site: &TestSite, relative: &str, content: &str) {
    site.write(relative, content);
    let file = File::options()
        .write(true)
        .open(site.path(relative))
        .unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(5))
        .unwrap();
}

#[test]
fn test_watch_compiles_then_recompiles_on_change() {
    let site = TestSite::new();
    site.write("index.html", "<main>@require('partials.body')</main>")
        .write("partials/body.html", "v1");

    let mut watcher = Watcher::start(&site);
    watcher.wait_for("polling", 1);
    assert_eq!(watcher.count("write_successful"), 1);
    assert_eq!(site.read("compiled.html"), "<main>v1</main>");

    bump(&site, "partials/body.html", "v2");
    watcher.wait_for("write_successful", 2);

    assert_eq!(site.read("compiled.html"), "<main>v2</main>");
    let modified: Vec<_> = watcher
        .seen
        .iter()
        .filter(|e| e["event"] == "file_modified")
        .collect();
    assert_eq!(modified.len(), 1);
    assert!(modified[0]["filename"]
        .as_str()
        .unwrap()
        .ends_with("body.html"));
}

#[test]
fn test_watch_does_not_watch_its_output() {
    let site = TestSite::new();
    site.write("index.html", "static");

    let mut watcher = Watcher::start(&site);
    let seen = watcher.wait_for("polling", 1);

    let watched: Vec<&str> = seen
        .iter()
        .filter(|e| e["event"] == "watching")
        .filter_map(|e| e["filename"].as_str())
        .collect();
    assert_eq!(watched.len(), 1, "watching: {:?}", watched);
    assert!(watched[0].ends_with("index.html"));

    // Writing the output on every pass must not trigger another pass
    thread::sleep(Duration::from_millis(300));
    while let Ok(value) = watcher.events.try_recv() {
        watcher.seen.push(value);
    }
    assert_eq!(watcher.count("write_successful"), 1);
    assert_eq!(watcher.count("file_modified"), 0);
}

#[test]
fn test_watch_reports_discovered_directories() {
    let site = TestSite::new();
    site.write("index.html", "@require('a.b.c')")
        .write("a/b/c.html", "deep");

    let mut watcher = Watcher::start(&site);
    let seen = watcher.wait_for("polling", 1);

    let directories = seen
        .iter()
        .filter(|e| e["event"] == "directory_found")
        .count();
    assert_eq!(directories, 3);
    assert_eq!(site.read("compiled.html"), "deep");
}
