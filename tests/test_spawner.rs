use std::time::Duration;

use arcade_shooter::spawner::Spawner;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn stopped_spawner_never_fires() {
    let mut s = Spawner::new();
    assert!(!s.is_running());
    assert!(!s.poll(ms(60_000)));
}

#[test]
fn fires_once_per_interval() {
    let mut s = Spawner::new();
    s.start(ms(2000));
    assert!(!s.poll(ms(1999)));
    assert!(s.poll(ms(1)));
    assert!(s.poll(ms(2000)));
}

#[test]
fn long_gap_fires_once_and_keeps_phase() {
    let mut s = Spawner::new();
    s.start(ms(2000));
    assert!(s.poll(ms(7000)));
    // Two missed intervals dropped, 1000 ms carried over
    assert!(!s.poll(ms(999)));
    assert!(s.poll(ms(1)));
    assert!(!s.poll(ms(1999)));
}

#[test]
fn restart_replaces_previous_timer() {
    let mut s = Spawner::new();
    s.start(ms(2000));
    assert!(!s.poll(ms(1500)));
    s.start(ms(2000));
    assert_eq!(s.generation(), 2);
    // The old timer's progress is gone: still only one live timer.
    assert!(!s.poll(ms(1500)));
    assert!(s.poll(ms(500)));
}

#[test]
fn stop_is_idempotent() {
    let mut s = Spawner::new();
    s.start(ms(2000));
    s.stop();
    s.stop();
    assert!(!s.is_running());
    assert!(!s.poll(ms(10_000)));
    assert_eq!(s.generation(), 1);
}

#[test]
fn zero_interval_never_fires() {
    let mut s = Spawner::new();
    s.start(Duration::ZERO);
    assert!(!s.poll(ms(100)));
}
