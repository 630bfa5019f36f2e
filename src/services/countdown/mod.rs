mod widget;

pub use widget::CountdownTimer;
