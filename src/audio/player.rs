use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use super::thread::spawn_media_thread;
use super::types::{MediaCmd, MediaNotice};

/// Handle to the audio thread.
pub struct MediaPlayer {
    tx: Sender<MediaCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl MediaPlayer {
    /// Start the audio thread. Notifications are converted into `E` and sent on
    /// `events`, so they share one queue with the caller's other inputs.
    pub fn spawn<E>(events: Sender<E>, tick: Duration) -> Self
    where
        E: From<MediaNotice> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<MediaCmd>();
        let handle = spawn_media_thread(rx, events, tick);
        Self {
            tx,
            join: Mutex::new(Some(handle)),
        }
    }

    pub fn send(&self, cmd: MediaCmd) -> Result<(), mpsc::SendError<MediaCmd>> {
        self.tx.send(cmd)
    }

    /// Stop output and wait for the audio thread to exit. Safe to call more
    /// than once.
    pub fn quit(&self) {
        let _ = self.send(MediaCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Drop for MediaPlayer {
    fn drop(&mut self) {
        self.quit();
    }
}
