//! Save worker: the one asynchronous boundary in the constructor. The
//! payload is serialized before dispatch, a dedicated thread runs the
//! caller-supplied sink, and the outcome comes back over a channel polled
//! once per frame. The editor holds at most one job at a time.

use std::fs;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use anyhow::Context;

/// `Ok` hands ownership of the logo to the caller; `Err` carries the
/// user-facing message the editing UI surfaces
pub type SaveOutcome = Result<(), String>;

pub struct SaveJob {
    outcome_rx: Receiver<SaveOutcome>,
}

impl SaveJob {
    /// Run `sink` against the frozen payload on a worker thread
    pub fn dispatch<F>(payload: String, sink: F) -> Self
    where
        F: FnOnce(&str) -> anyhow::Result<()> + Send + 'static,
    {
        let (outcome_tx, outcome_rx) = channel();
        thread::spawn(move || {
            let outcome = sink(&payload).map_err(|err| format!("{:#}", err));
            // The receiver may be gone if the app quit mid-save
            let _ = outcome_tx.send(outcome);
        });
        SaveJob { outcome_rx }
    }

    /// Non-blocking outcome check, called once per frame
    pub fn poll(&self) -> Option<SaveOutcome> {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("save worker exited without reporting".to_string()))
            }
        }
    }
}

/// The shipped collaborator: persist the markup to disk. The alliance
/// upload itself lives behind the platform API and stays the caller's
/// concern.
pub fn write_logo(path: &Path, markup: &str) -> anyhow::Result<()> {
    fs::write(path, markup).with_context(|| format!("writing logo to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn wait_for(job: &SaveJob) -> SaveOutcome {
        for _ in 0..200 {
            if let Some(outcome) = job.poll() {
                return outcome;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("save job never reported");
    }

    #[test]
    fn successful_sink_reports_ok() {
        let job = SaveJob::dispatch("<svg/>".to_string(), |markup| {
            assert_eq!(markup, "<svg/>");
            Ok(())
        });
        assert_eq!(wait_for(&job), Ok(()));
    }

    #[test]
    fn failing_sink_reports_its_message() {
        let job = SaveJob::dispatch("<svg/>".to_string(), |_| Err(anyhow::anyhow!("network")));
        assert_eq!(wait_for(&job), Err("network".to_string()));
    }

    #[test]
    fn poll_is_empty_until_the_sink_finishes() {
        let (hold_tx, hold_rx) = channel::<()>();
        let job = SaveJob::dispatch(String::new(), move |_| {
            hold_rx.recv().ok();
            Ok(())
        });
        assert_eq!(job.poll(), None);
        hold_tx.send(()).unwrap();
        assert_eq!(wait_for(&job), Ok(()));
    }

    #[test]
    fn write_logo_persists_the_markup() {
        let path = std::env::temp_dir().join("sylvaire-logo-studio-write-test.svg");
        write_logo(&path, "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn write_logo_surfaces_io_failures() {
        let path = Path::new("/nonexistent-dir/logo.svg");
        let err = write_logo(path, "<svg/>").unwrap_err();
        assert!(format!("{:#}", err).contains("writing logo to"));
    }
}
