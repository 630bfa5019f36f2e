mod scoped;

pub use scoped::{RepaintHook, ScopedInterval};
