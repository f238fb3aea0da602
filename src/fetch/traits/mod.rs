//! Capability traits at the platform seams. The library consumes these;
//! the hosting firmware or test harness implements them.
pub mod delay_timer;
pub mod fetch_callback;
pub mod idle_signal;
pub mod status_display;
