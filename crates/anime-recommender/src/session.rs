//! Interactive recommendation loop.
//!
//! Presents uniformly random picks from the fetched entry list until the
//! user asks to quit.

use crate::viewer::CoverView;
use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::AnimeEntry;
use std::io::{BufRead, Write};
use tracing::warn;

/// Input that ends the session, compared trimmed and case-insensitively
const QUIT_COMMAND: &str = "quit";

/// Interactive loop over a fixed, non-empty entry list
///
/// Picks are uniform with replacement, so repeats across iterations are
/// expected. The caller guarantees `entries` is non-empty; an empty list
/// surfaces as an error on the first iteration, never a panic.
pub struct RecommendationSession<'a> {
    entries: &'a [AnimeEntry],
    viewer: Option<&'a dyn CoverView>,
}

impl<'a> RecommendationSession<'a> {
    /// Create a session; without a viewer, covers are only printed as URLs
    pub fn new(entries: &'a [AnimeEntry], viewer: Option<&'a dyn CoverView>) -> Self {
        Self { entries, viewer }
    }

    /// Run until the user enters "quit"
    ///
    /// Each iteration prints one recommendation block, invokes the viewer
    /// (viewer failures are logged and never end the session) and prompts
    /// for input. Returns the number of recommendations shown. Errors if
    /// the input stream closes before a quit.
    pub async fn run<R: Rng>(
        &self,
        rng: &mut R,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<usize> {
        let mut shown = 0;

        loop {
            let entry = self
                .entries
                .choose(rng)
                .context("No anime entries to recommend")?;

            writeln!(output)?;
            writeln!(output, "Your random anime recommendation")?;
            writeln!(output, "Title: {}", entry.title)?;
            writeln!(output, "Synopsis: {}", entry.synopsis)?;
            writeln!(output, "Image: {}", entry.image_url)?;
            writeln!(output, "{}", "-".repeat(80))?;
            shown += 1;

            if let Some(viewer) = self.viewer {
                if let Err(e) = viewer.show(&entry.image_url).await {
                    warn!(url = %entry.image_url, error = %e, "Couldn't display cover image");
                }
            }

            write!(output, "\nPress [Enter] for another or type 'quit' to exit: ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read user input")?;
            if read == 0 {
                bail!("Input stream closed before quit");
            }

            if line.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
                writeln!(output, "Goodbye! Happy watching!")?;
                break;
            }
        }

        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::ViewerError;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use std::sync::Mutex;

    fn entries(titles: &[&str]) -> Vec<AnimeEntry> {
        titles
            .iter()
            .map(|t| {
                AnimeEntry::new(
                    t.to_string(),
                    Some(format!("About {}", t)),
                    format!("https://cdn.example/{}.jpg", t),
                )
            })
            .collect()
    }

    /// Viewer that records every URL it is asked to show
    struct RecordingViewer {
        urls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingViewer {
        fn new(fail: bool) -> Self {
            Self {
                urls: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl CoverView for RecordingViewer {
        async fn show(&self, url: &str) -> Result<(), ViewerError> {
            self.urls.lock().unwrap().push(url.to_string());
            if self.fail {
                Err(ViewerError::Launch(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no viewer installed",
                )))
            } else {
                Ok(())
            }
        }
    }

    async fn run_session(
        list: &[AnimeEntry],
        viewer: Option<&dyn CoverView>,
        input: &str,
    ) -> (Result<usize>, String) {
        let session = RecommendationSession::new(list, viewer);
        let mut rng = StdRng::seed_from_u64(42);
        let mut output = Vec::new();
        let result = session
            .run(&mut rng, &mut Cursor::new(input), &mut output)
            .await;
        (result, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_quit_ends_session() {
        let list = entries(&["A", "B"]);
        let (result, output) = run_session(&list, None, "quit\n").await;
        assert_eq!(result.unwrap(), 1);
        assert!(output.contains("Goodbye! Happy watching!"));
    }

    #[tokio::test]
    async fn test_quit_is_trimmed_and_case_insensitive() {
        let list = entries(&["A"]);
        let (result, _) = run_session(&list, None, "  QuIt  \n").await;
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_continues() {
        let list = entries(&["A"]);
        let (result, output) = run_session(&list, None, "\n\nquit\n").await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(output.matches("Title: A").count(), 3);
    }

    #[tokio::test]
    async fn test_arbitrary_input_continues() {
        let list = entries(&["A"]);
        let (result, _) = run_session(&list, None, "no thanks\nquit please\nquit\n").await;
        // "quit please" is not a quit
        assert_eq!(result.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let list = entries(&["A"]);
        let (result, _) = run_session(&list, None, "").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_entry_list_is_an_error() {
        let (result, _) = run_session(&[], None, "quit\n").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_viewer_failure_does_not_stop_loop() {
        let list = entries(&["A"]);
        let viewer = RecordingViewer::new(true);
        let (result, output) = run_session(&list, Some(&viewer), "\n\nquit\n").await;
        assert_eq!(result.unwrap(), 3);
        // One viewer call per iteration despite every call failing
        assert_eq!(viewer.urls.lock().unwrap().len(), 3);
        assert!(output.contains("Goodbye! Happy watching!"));
    }

    #[tokio::test]
    async fn test_viewer_gets_selected_entry_url() {
        let list = entries(&["Solo"]);
        let viewer = RecordingViewer::new(false);
        let (result, _) = run_session(&list, Some(&viewer), "quit\n").await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(
            *viewer.urls.lock().unwrap(),
            ["https://cdn.example/Solo.jpg"]
        );
    }

    #[tokio::test]
    async fn test_selection_is_roughly_uniform() {
        let list = entries(&["A", "B", "C", "D", "E"]);
        let iterations = 2000;
        let input = format!("{}quit\n", "\n".repeat(iterations - 1));

        let (result, output) = run_session(&list, None, &input).await;
        assert_eq!(result.unwrap(), iterations);

        // With a seeded RNG this is deterministic; bounds are loose enough
        // to hold for any reasonable sample
        let expected = iterations as f64 / list.len() as f64;
        for entry in &list {
            let count = output.matches(&format!("Title: {}\n", entry.title)).count();
            assert!(
                (count as f64) > expected * 0.8 && (count as f64) < expected * 1.2,
                "entry {} picked {} times, expected about {}",
                entry.title,
                count,
                expected
            );
        }
    }
}
