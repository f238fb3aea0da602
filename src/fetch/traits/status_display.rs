//! Minimal abstraction for the transient status line shown to the user
//! while a fetch is in flight. Allows the library to plug into various
//! surfaces (character LCD, terminal, GUI toast) without owning any of them.

/// Contract to surface a short-lived message to the user.
pub trait StatusDisplay {
    /// Show a transient message. Fire-and-forget: implementations decide
    /// how long the message stays visible, and the library never waits on it.
    fn show_transient(&mut self, message: &str);
}
