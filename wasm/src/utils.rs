pub fn set_panic_hook() {
    // Better panic messages in the browser console. Enabled through the
    // default `console_error_panic_hook` feature.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
