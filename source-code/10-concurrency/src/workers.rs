use crossbeam::channel::unbounded;
use rand::Rng;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// One count reported by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub worker: usize,
    pub step: u32,
}

/// Spawns `workers` threads that each count `1..=steps`, sleeping a random
/// pause below `max_pause` after every count.
///
/// Ticks come back in arrival order, so different workers interleave. Within
/// one worker the steps are always ascending.
pub fn run_counters(workers: usize, steps: u32, max_pause: Duration) -> Vec<Tick> {
    let (tx, rx) = unbounded();
    let max_micros = pause_bound_micros(max_pause);

    let handles: Vec<_> = (1..=workers)
        .map(|worker| {
            let tx = tx.clone();
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for step in 1..=steps {
                    if tx.send(Tick { worker, step }).is_err() {
                        break;
                    }
                    if max_micros > 0 {
                        thread::sleep(Duration::from_micros(rng.gen_range(0..max_micros)));
                    }
                }
                debug!(worker, "counter finished");
            })
        })
        .collect();

    // The loop below ends once every worker has dropped its sender
    drop(tx);
    let ticks: Vec<Tick> = rx.iter().collect();

    for handle in handles {
        if let Err(payload) = handle.join() {
            std::panic::resume_unwind(payload);
        }
    }
    ticks
}

/// `max_pause` in whole microseconds, saturating at `u64::MAX`.
fn pause_bound_micros(max_pause: Duration) -> u64 {
    u64::try_from(max_pause.as_micros()).unwrap_or(u64::MAX)
}
