use std::fmt::Debug;
use std::io;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Copy, Clone, Debug)]
#[error("test error")]
pub struct TestError;

/// A thunk that panics when called.
pub fn explode<T>() -> T {
    panic!("kaboom")
}

/// A future that panics when polled.
pub async fn explode_later<T>() -> T {
    panic!("kaboom")
}

pub fn assert_idempotent<T: PartialEq + Debug, F: Fn() -> T>(f: F) {
    let first = f();
    for _ in 0..50 {
        assert_eq!(f(), first);
    }
}

#[derive(Clone, Default)]
struct TraceBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for TraceBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a trace-level subscriber installed on this thread, returning everything it logged.
pub fn capture_traces<F: FnOnce()>(f: F) -> String {
    let buffer = TraceBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

pub struct Leaf {
    pub c: Option<i32>,
}

pub struct Branch {
    pub b: Option<Leaf>,
}

/// Stand-in for loosely structured data, e.g. a decoded document.
pub struct Nested {
    pub a: Option<Branch>,
}

impl Nested {
    pub fn path(c: i32) -> Self {
        Nested {
            a: Some(Branch {
                b: Some(Leaf { c: Some(c) }),
            }),
        }
    }

    pub fn empty() -> Self {
        Nested { a: None }
    }
}
