#![cfg(not(loom))]

use spsc_ring::{Consumer, Producer, Ring};
use std::thread;

fn seq_test(amt: u32, cap: usize) {
    let (tx, rx) = Ring::create(cap).unwrap().split();
    let t = thread::spawn(move || send_sequence(amt, tx));

    let received = receive_sequence(amt, rx);
    assert_eq!(received.len(), amt as usize);
    for (n, i) in received.into_iter().enumerate() {
        assert_eq!(i, n as i32);
    }

    t.join().unwrap();
}

fn send_sequence(n: u32, mut tx: Producer) {
    for x in 0..n {
        let mut value = x as i32;
        while let Err(e) = tx.push(value) {
            value = e.into_inner();
            thread::yield_now();
        }
    }
}

fn receive_sequence(n: u32, mut rx: Consumer) -> Vec<i32> {
    let mut received = Vec::with_capacity(n as usize);
    while received.len() < n as usize {
        match rx.pop() {
            Ok(value) => received.push(value),
            Err(_) => thread::yield_now(),
        }
    }
    assert!(rx.is_empty());
    received
}

#[test]
fn spsc_test() {
    const COUNT: usize = 50;

    for _ in 0..COUNT {
        seq_test(10000, 2);
    }

    for _ in 0..COUNT {
        seq_test(10000, 128);
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn stress_ten_million() {
    const AMT: u32 = 10_000_000;

    let (mut tx, mut rx) = Ring::create(1024).unwrap().split();
    let t = thread::spawn(move || {
        for x in 0..AMT {
            while tx.push(x as i32).is_err() {
                std::hint::spin_loop();
            }
        }
    });

    let mut n = 0u32;
    while n < AMT {
        match rx.pop() {
            Ok(i) => {
                assert_eq!(i, n as i32);
                n += 1;
            }
            Err(_) => std::hint::spin_loop(),
        }
    }

    t.join().unwrap();
    assert!(rx.is_empty());
}
