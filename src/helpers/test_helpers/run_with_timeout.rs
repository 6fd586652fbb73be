use super::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<unknown panic payload>".to_string()
    }
}

/// Runs the given function on its own thread, panics if it takes too long
pub fn run_with_specific_timeout<T, F>(d: Duration, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T,
    F: Send + 'static,
{
    let (done_tx, done_rx) = channel();
    let handle = thread::spawn(move || {
        let val = f();
        done_tx.send(()).expect("unable to send completion signal");
        val
    });

    match done_rx.recv_timeout(d) {
        Ok(()) => match handle.join() {
            Ok(result) => result,
            Err(e) => panic!(
                "thread panicked but channel was not disconnected: {}",
                panic_message(&*e)
            ),
        },
        Err(Disconnected) => match handle.join() {
            Ok(_) => panic!("thread did not panic but channel was disconnected"),
            Err(e) => panic!("thread panicked: {}", panic_message(&*e)),
        },
        Err(Timeout) => panic!("thread timed out"),
    }
}

/// Try to run the given function, or panic if it takes longer than DEFAULT_TIMEOUT
pub fn run_with_timeout<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T,
    F: Send + 'static,
{
    run_with_specific_timeout(DEFAULT_TIMEOUT, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value() {
        let result = run_with_timeout(move || {
            thread::sleep(Duration::from_millis(20));
            12
        });
        assert_eq!(result, 12);
    }

    #[test]
    fn shares_state_with_caller() {
        let ticks = Arc::new(Mutex::new(0));
        let worker_ticks = ticks.clone();
        run_with_timeout(move || {
            for _ in 0..3 {
                *worker_ticks.lock().expect("failed to lock ticks") += 1;
            }
        });
        assert_eq!(*ticks.lock().expect("failed to lock ticks"), 3);
    }

    #[test]
    #[should_panic(expected = "timed out")]
    fn times_out() {
        run_with_specific_timeout(Duration::from_millis(50), move || {
            thread::sleep(Duration::from_secs(5));
        });
    }

    #[test]
    #[should_panic(expected = "poll failed")]
    fn forwards_panic_message() {
        run_with_timeout(move || {
            panic!("poll failed");
        });
    }

    #[test]
    fn formats_owned_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("lost session"));
        assert_eq!(panic_message(&*payload), "lost session");
    }
}
