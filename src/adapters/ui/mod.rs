pub mod banner;
pub mod tui;

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui(provider_enabled: bool) {
    banner::print_welcome(provider_enabled);
}
