//! Deferred computer moves.
//!
//! The computer waits a short display delay before answering so the human
//! can see their own mark land. Each wait is a tokio task that sends its
//! [`AiTicket`] back over a channel when the delay elapses. Scheduling a
//! different ticket or cancelling aborts the task in flight; the session
//! still re-checks the ticket's generation when it is redeemed.

use noughts::AiTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

/// One-shot timer for the computer's move.
#[derive(Debug)]
pub struct AiScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AiTicket>,
    rx: mpsc::UnboundedReceiver<AiTicket>,
    pending: Option<(AiTicket, JoinHandle<()>)>,
}

impl AiScheduler {
    /// Creates a scheduler that fires `delay` after each schedule.
    #[instrument]
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            pending: None,
        }
    }

    /// Returns the ticket currently waiting, if any.
    pub fn pending(&self) -> Option<AiTicket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Arms the timer for `ticket`.
    ///
    /// Re-scheduling the ticket already waiting is a no-op, so calling this
    /// after every state change never issues a second move for one turn.
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, ticket: AiTicket) {
        if self.pending() == Some(ticket) {
            return;
        }
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(ticket);
        });
        debug!(generation = ticket.generation(), delay_ms = delay.as_millis() as u64, "Computer move scheduled");
        self.pending = Some((ticket, handle));
    }

    /// Drops any waiting ticket.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            debug!(generation = ticket.generation(), "Computer move cancelled");
            handle.abort();
        }
    }

    /// Returns a ticket whose delay has elapsed, without waiting.
    pub fn try_next(&mut self) -> Option<AiTicket> {
        let ticket = self.rx.try_recv().ok()?;
        self.clear_if_pending(ticket);
        Some(ticket)
    }

    /// Waits for the next ticket whose delay elapses.
    pub async fn next(&mut self) -> Option<AiTicket> {
        let ticket = self.rx.recv().await?;
        self.clear_if_pending(ticket);
        Some(ticket)
    }

    fn clear_if_pending(&mut self, ticket: AiTicket) {
        if self.pending() == Some(ticket) {
            self.pending = None;
        }
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
