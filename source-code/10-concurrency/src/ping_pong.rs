use crossbeam::channel::{bounded, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Sends "ping" until the receiving side hangs up.
pub fn pinger(tx: Sender<&'static str>) {
    while tx.send("ping").is_ok() {}
}

/// Sends "pong" until the receiving side hangs up.
pub fn ponger(tx: Sender<&'static str>) {
    while tx.send("pong").is_ok() {}
}

/// Prints and collects `limit` messages, sleeping `pause` after each one.
///
/// Returning drops `rx`, which wakes any producer blocked in `send`.
pub fn printer(rx: Receiver<&'static str>, limit: usize, pause: Duration) -> Vec<&'static str> {
    let mut seen = Vec::with_capacity(limit);
    for msg in rx.iter().take(limit) {
        println!("{}", msg);
        seen.push(msg);
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
    seen
}

/// Runs a pinger, a ponger and a printer over one zero-capacity channel.
///
/// Every send is a hand-off: a producer blocks until the printer takes the
/// message, so nothing piles up while the printer sleeps.
pub fn ping_pong(limit: usize, pause: Duration) -> Vec<&'static str> {
    let (tx, rx) = bounded(0);

    let ping = {
        let tx = tx.clone();
        thread::spawn(move || pinger(tx))
    };
    let pong = thread::spawn(move || ponger(tx));
    let print = thread::spawn(move || printer(rx, limit, pause));

    let seen = match print.join() {
        Ok(seen) => seen,
        Err(payload) => std::panic::resume_unwind(payload),
    };
    for handle in [ping, pong] {
        if let Err(payload) = handle.join() {
            std::panic::resume_unwind(payload);
        }
    }
    seen
}
