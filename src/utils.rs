// Small host helpers: panic hook, console logging and console timers.
// Everything here falls back to stderr / no-ops off wasm32 so the core can be
// exercised by native tests.

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
pub fn log_str(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_str(message: &str) {
    eprintln!("{}", message);
}

/// `println!`-style logging to the browser console.
#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::utils::log_str(&format!( $( $t )* ))
    };
}

// Times the scope it lives in with console.time / console.timeEnd
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_end_with_label(self.name);
    }
}

