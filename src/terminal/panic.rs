//! Panic hook for terminal restoration.
//!
//! Without this, a panic inside the draw loop leaves the user's terminal
//! in raw mode with the alternate screen active.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal before the original
/// hook prints the panic message. Call early in `main`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
