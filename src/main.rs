//! Driver that exercises the ring: a sequential walk through every operation,
//! then a producer thread and a consumer thread moving `COUNT` values.
//!
//! Usage: `spsc-ring [CAPACITY] [COUNT]`. Logging honours `RUST_LOG`.

use spsc_ring::{destroy, Consumer, Producer, Ring};
use std::error::Error;
use std::hint;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;
use tracing::{error, info, warn};

const DEFAULT_CAPACITY: usize = 8;
const DEFAULT_COUNT: u32 = 1_000_000;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spsc_ring=info".parse().expect("static directive")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let capacity = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|e| format!("invalid capacity {:?}: {}", arg, e))?,
        None => DEFAULT_CAPACITY,
    };
    let count = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|e| format!("invalid count {:?}: {}", arg, e))?,
        None => DEFAULT_COUNT,
    };

    sequential(capacity)?;
    if capacity < 2 {
        warn!(capacity, "a ring this small holds no values, skipping threaded run");
        return Ok(());
    }
    threaded(capacity, count)
}

fn sequential(capacity: usize) -> Result<(), Box<dyn Error>> {
    let mut ring = Some(Ring::create(capacity)?);

    if let Some(ring) = ring.as_mut() {
        for i in 0..10 {
            if let Err(e) = ring.push(i + 42) {
                warn!(value = e.into_inner(), "push rejected, ring is full");
            }
        }

        if ring.is_full() {
            info!("ring is full after pushing 10 elements");
        } else {
            info!(len = ring.len(), "ring is not full after pushing 10 elements");
        }

        for _ in 0..10 {
            match ring.pop() {
                Ok(value) => info!(value, "popped"),
                Err(e) => info!("{}", e),
            }
        }

        for value in [52, 53] {
            if let Err(e) = ring.push(value) {
                warn!(value = e.into_inner(), "push rejected, ring is full");
            }
        }
        for _ in 0..3 {
            if ring.pop_discard().is_err() {
                info!("nothing left to discard");
            }
        }

        if ring.is_empty() {
            info!("ring is empty after operations");
        } else {
            info!(len = ring.len(), "ring still has elements");
        }
    }

    destroy(&mut ring);
    Ok(())
}

fn threaded(capacity: usize, count: u32) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = Ring::create(capacity)?.split();
    let start = Instant::now();

    let producer = thread::spawn(move || produce(tx, count));
    let received = consume(rx, count)?;
    producer.join().map_err(|_| "producer thread panicked")?;

    let elapsed = start.elapsed();
    let rate = f64::from(received) / elapsed.as_secs_f64().max(f64::EPSILON);
    info!(
        received,
        capacity,
        elapsed_ms = elapsed.as_millis() as u64,
        "threaded run complete ({:.0} values/s)",
        rate
    );
    Ok(())
}

fn produce(mut tx: Producer, count: u32) {
    for i in 0..count {
        let mut value = i as i32;
        while let Err(e) = tx.push(value) {
            value = e.into_inner();
            hint::spin_loop();
        }
    }
}

fn consume(mut rx: Consumer, count: u32) -> Result<u32, String> {
    let mut expected = 0u32;
    while expected < count {
        match rx.pop() {
            Ok(value) if value == expected as i32 => expected += 1,
            Ok(value) => {
                return Err(format!(
                    "consumer saw {} where {} was expected",
                    value, expected
                ))
            }
            Err(_) => hint::spin_loop(),
        }
    }
    Ok(expected)
}
