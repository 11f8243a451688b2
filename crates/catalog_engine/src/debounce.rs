use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

enum Command<T> {
    Schedule { value: T, delay: Duration },
}

/// Delays propagation of a rapidly changing value.
///
/// Each [`schedule`](Self::schedule) call supersedes any pending emission;
/// once the delay passes without a newer call, the latest value is sent
/// exactly once on the channel given at construction. Dropping the scheduler
/// cancels whatever is pending, so a stale emission can never fire after
/// teardown. There is at most one outstanding timer per scheduler.
pub struct DebounceScheduler<T> {
    cmd_tx: mpsc::Sender<Command<T>>,
}

impl<T: Send + 'static> DebounceScheduler<T> {
    /// Spawns the timer thread. Settled values arrive on `out_tx`.
    pub fn new(out_tx: mpsc::Sender<T>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command<T>>();
        thread::spawn(move || run(cmd_rx, out_tx));
        Self { cmd_tx }
    }

    /// Schedules `value` for emission after `delay`, replacing any value
    /// still pending.
    pub fn schedule(&self, value: T, delay: Duration) {
        let _ = self.cmd_tx.send(Command::Schedule { value, delay });
    }
}

fn run<T>(cmd_rx: mpsc::Receiver<Command<T>>, out_tx: mpsc::Sender<T>) {
    let mut pending: Option<(T, Instant)> = None;
    loop {
        match pending.take() {
            None => match cmd_rx.recv() {
                Ok(Command::Schedule { value, delay }) => {
                    pending = Some((value, Instant::now() + delay));
                }
                // Scheduler dropped with nothing pending.
                Err(mpsc::RecvError) => return,
            },
            Some((value, deadline)) => {
                let now = Instant::now();
                if now >= deadline {
                    if out_tx.send(value).is_err() {
                        return;
                    }
                    continue;
                }
                match cmd_rx.recv_timeout(deadline - now) {
                    // A newer value supersedes the pending one.
                    Ok(Command::Schedule { value, delay }) => {
                        pending = Some((value, Instant::now() + delay));
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if out_tx.send(value).is_err() {
                            return;
                        }
                    }
                    // Scheduler dropped; the pending emission never fires.
                    Err(mpsc::RecvTimeoutError::Disconnected) => return,
                }
            }
        }
    }
}
