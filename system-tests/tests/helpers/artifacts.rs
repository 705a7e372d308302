// system-tests/tests/helpers/artifacts.rs
// ============================================================================
// Module: Test Artifacts
// Description: Artifact helpers for system-tests.
// Purpose: Create per-test run roots and write deterministic summaries.
// Dependencies: system-tests, serde, serde_jcs
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde_jcs;
use system_tests::config::SystemTestConfig;

use super::api_client::PostsClient;
use super::api_client::TranscriptEntry;

#[derive(Debug, Serialize)]
struct TestSummary {
    test_name: String,
    status: String,
    started_at_ms: u128,
    ended_at_ms: u128,
    duration_ms: u128,
    notes: Vec<String>,
    artifacts: Vec<String>,
}

fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

fn default_run_root(test_name: &str) -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/system-tests").join(format!("run_{stamp}")).join(test_name)
}

/// Artifact manager for a single system-test.
#[derive(Debug, Clone)]
pub struct TestArtifacts {
    root: PathBuf,
}

impl TestArtifacts {
    /// Creates the artifact root for a test.
    pub fn new(test_name: &str) -> io::Result<Self> {
        let config = SystemTestConfig::load().map_err(io::Error::other)?;
        let root = config.run_root.unwrap_or_else(|| default_run_root(test_name));
        Self::at_root(root)
    }

    /// Creates an artifact manager rooted at an explicit directory.
    pub fn at_root(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Returns the root directory for the test artifacts.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        let bytes = serde_jcs::to_vec(value).map_err(|err| io::Error::other(err.to_string()))?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Writes a text artifact with UTF-8 encoding.
    pub fn write_text(&self, name: &str, value: &str) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        Ok(path)
    }

    /// Writes the client transcript for the test.
    pub fn write_transcript(&self, entries: &[TranscriptEntry]) -> io::Result<PathBuf> {
        self.write_json("transcript.json", &entries)
    }
}

/// Helper that writes summaries even when a test panics.
///
/// When a client is attached, its transcript is dumped at finalization on
/// every path, pass and fail alike, including the `Drop` finalizer.
pub struct TestReporter {
    artifacts: TestArtifacts,
    test_name: String,
    started_at_ms: u128,
    client: Option<PostsClient>,
    finalized: bool,
}

impl TestReporter {
    /// Creates a reporter for the named test.
    pub fn new(test_name: &str) -> io::Result<Self> {
        Ok(Self::with_artifacts(test_name, TestArtifacts::new(test_name)?))
    }

    /// Creates a reporter over an existing artifact manager.
    pub fn with_artifacts(test_name: &str, artifacts: TestArtifacts) -> Self {
        Self {
            artifacts,
            test_name: test_name.to_string(),
            started_at_ms: now_millis(),
            client: None,
            finalized: false,
        }
    }

    /// Attaches the client whose transcript is dumped at finalization.
    pub fn attach_client(&mut self, client: &PostsClient) {
        self.client = Some(client.clone());
    }

    /// Returns the artifact manager.
    pub fn artifacts(&self) -> &TestArtifacts {
        &self.artifacts
    }

    /// Writes the final summary for the test, plus the transcript of any
    /// attached client.
    pub fn finish(
        &mut self,
        status: &str,
        notes: Vec<String>,
        mut artifacts: Vec<String>,
    ) -> io::Result<()> {
        if let Some(client) = &self.client {
            self.artifacts.write_transcript(&client.transcript())?;
            artifacts.push("transcript.json".to_string());
        }
        let ended_at_ms = now_millis();
        let summary = TestSummary {
            test_name: self.test_name.clone(),
            status: status.to_string(),
            started_at_ms: self.started_at_ms,
            ended_at_ms,
            duration_ms: ended_at_ms.saturating_sub(self.started_at_ms),
            notes,
            artifacts,
        };
        self.artifacts.write_json("summary.json", &summary)?;
        self.artifacts.write_text("summary.md", &summary_markdown(&summary))?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "unknown" };
        let _ = self.finish(
            status,
            vec!["test terminated without explicit summary".to_string()],
            Vec::new(),
        );
    }
}

#[cfg(test)]
mod tests {
    //! Finalization coverage: an attached client's transcript must reach
    //! the artifact directory on failing and abandoned paths, not only on
    //! success.

    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::missing_docs_in_private_items,
        reason = "Test-only assertions favor direct unwrap/expect for clarity."
    )]

    use std::time::Duration;

    use system_tests::target::ApiTarget;
    use tempfile::TempDir;

    use super::PostsClient;
    use super::TestArtifacts;
    use super::TestReporter;

    fn idle_client() -> PostsClient {
        let target = ApiTarget::new("http://127.0.0.1:9/api");
        PostsClient::new(target, Duration::from_secs(1)).expect("client builds without network")
    }

    #[test]
    fn failing_finish_still_dumps_transcript() {
        let dir = TempDir::new().expect("temp dir");
        let artifacts = TestArtifacts::at_root(dir.path().join("run")).expect("artifact root");
        let mut reporter = TestReporter::with_artifacts("failing_finish", artifacts);
        let client = idle_client();
        reporter.attach_client(&client);

        reporter
            .finish("fail", vec!["divergence".to_string()], vec!["actual.json".to_string()])
            .expect("finish writes artifacts");
        assert!(dir.path().join("run/transcript.json").exists());
        assert!(dir.path().join("run/summary.json").exists());
    }

    #[test]
    fn abandoned_reporter_dumps_transcript_on_drop() {
        let dir = TempDir::new().expect("temp dir");
        {
            let artifacts =
                TestArtifacts::at_root(dir.path().join("run")).expect("artifact root");
            let mut reporter = TestReporter::with_artifacts("abandoned", artifacts);
            let client = idle_client();
            reporter.attach_client(&client);
            // Dropped without finish, as an early `?` return would do.
        }
        assert!(dir.path().join("run/transcript.json").exists());
        assert!(dir.path().join("run/summary.json").exists());
    }
}

fn summary_markdown(summary: &TestSummary) -> String {
    let mut out = String::new();
    out.push_str("# System-Test Summary\n\n");
    out.push_str("## Status\n\n");
    out.push_str(&format!("- Test: {}\n", summary.test_name));
    out.push_str(&format!("- Status: {}\n", summary.status));
    out.push_str(&format!("- Duration (ms): {}\n", summary.duration_ms));
    out.push_str("\n## Notes\n\n");
    if summary.notes.is_empty() {
        out.push_str("- None\n");
    } else {
        for note in &summary.notes {
            out.push_str(&format!("- {}\n", note));
        }
    }
    out.push_str("\n## Artifacts\n\n");
    if summary.artifacts.is_empty() {
        out.push_str("- None\n");
    } else {
        for artifact in &summary.artifacts {
            out.push_str(&format!("- {}\n", artifact));
        }
    }
    out
}
