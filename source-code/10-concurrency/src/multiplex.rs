use crossbeam::channel::{after, bounded, select, Receiver};
use std::thread;
use std::time::Duration;

/// Outcome of waiting on two channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected<T> {
    First(T),
    Second(T),
    /// Nothing arrived before the deadline.
    Timeout,
    /// Nothing was ready at the moment of polling.
    Empty,
    /// One side's senders have all gone away.
    Disconnected,
}

/// Blocks until either channel delivers or `timeout` elapses.
///
/// When both are ready, `select!` picks one at random.
pub fn select_with_timeout<T>(a: &Receiver<T>, b: &Receiver<T>, timeout: Duration) -> Selected<T> {
    let deadline = after(timeout);
    select! {
        recv(a) -> msg => msg.map_or(Selected::Disconnected, Selected::First),
        recv(b) -> msg => msg.map_or(Selected::Disconnected, Selected::Second),
        recv(deadline) -> _ => Selected::Timeout,
    }
}

/// Polls both channels once without blocking.
pub fn try_select<T>(a: &Receiver<T>, b: &Receiver<T>) -> Selected<T> {
    select! {
        recv(a) -> msg => msg.map_or(Selected::Disconnected, Selected::First),
        recv(b) -> msg => msg.map_or(Selected::Disconnected, Selected::Second),
        default => Selected::Empty,
    }
}

/// Spawns two producers sending "from 1" every `first` and "from 2" every
/// `second`. Each stops once its receiver is dropped.
pub fn tick_sources(first: Duration, second: Duration) -> (Receiver<String>, Receiver<String>) {
    (periodic("from 1", first), periodic("from 2", second))
}

fn periodic(label: &'static str, period: Duration) -> Receiver<String> {
    let (tx, rx) = bounded(0);
    thread::spawn(move || loop {
        thread::sleep(period);
        if tx.send(label.to_string()).is_err() {
            break;
        }
    });
    rx
}
