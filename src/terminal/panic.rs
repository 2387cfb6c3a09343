//! Panic hook that restores the terminal before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    install_panic_hook(emergency_restore);
}

/// Chain `restore` in front of whatever hook is currently installed.
fn install_panic_hook(restore: fn()) {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
