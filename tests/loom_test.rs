#![cfg(loom)]

use loom::thread;
use spsc_ring::Ring;

#[test]
fn push_pop() {
    loom::model(|| {
        let (mut tx, mut rx) = Ring::create(2).unwrap().split();

        let t = thread::spawn(move || {
            for i in 0..2 {
                while tx.push(i).is_err() {
                    thread::yield_now();
                }
            }
        });

        for expected in 0..2 {
            loop {
                match rx.pop() {
                    Ok(v) => {
                        assert_eq!(v, expected);
                        break;
                    }
                    Err(_) => thread::yield_now(),
                }
            }
        }

        t.join().unwrap();
        assert!(rx.is_empty());
    })
}

#[test]
fn full_ring_retry() {
    loom::model(|| {
        let (mut tx, mut rx) = Ring::create(4).unwrap().split();

        let t = thread::spawn(move || {
            for i in 0..4 {
                while tx.push(i).is_err() {
                    thread::yield_now();
                }
            }
            tx
        });

        let mut received = Vec::new();
        while received.len() < 4 {
            match rx.pop() {
                Ok(v) => received.push(v),
                Err(_) => thread::yield_now(),
            }
        }

        let tx = t.join().unwrap();
        assert_eq!(received, vec![0, 1, 2, 3]);
        assert!(tx.is_empty());
    })
}
