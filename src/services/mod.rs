// Service module exports
// Widget state machines, their timers, and configuration loading

pub mod carousel;
pub mod countdown;
pub mod faq;
pub mod marquee;
pub mod settings;
pub mod timer;
