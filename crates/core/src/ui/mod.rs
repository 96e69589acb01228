//! Presentation helpers that carry logic: toasts and animated counters

mod counter;
mod toast;

pub use counter::{ease_out_quart, CounterAnimation};
pub use toast::{Toast, ToastQueue};
