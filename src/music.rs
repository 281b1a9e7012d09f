//! Background music, simulated by a thread that "plays" for a fixed time.
//!
//! The task shares nothing with the game. It cannot be stopped early; the
//! session only waits for it when shutting down.

use std::io::Write;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A running (or finished) music track.
pub struct BackgroundMusic {
    handle: JoinHandle<()>,
}

impl BackgroundMusic {
    /// Start playing a track of the given length, announcing start and end on `out`.
    pub fn spawn<W>(track: Duration, mut out: W) -> std::io::Result<Self>
    where
        W: Write + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("background-music".to_string())
            .spawn(move || {
                tracing::debug!(?track, "music started");
                let _ = writeln!(out, "Playing background music...");
                let _ = out.flush();
                thread::sleep(track);
                let _ = writeln!(out, "Music ended.");
                let _ = out.flush();
                tracing::debug!("music ended");
            })?;
        Ok(Self { handle })
    }

    /// Block until the track has played out.
    pub fn join(self) {
        if self.handle.join().is_err() {
            tracing::warn!("background music thread panicked");
        }
    }
}
