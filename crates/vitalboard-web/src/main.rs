//! WASM entry point for Leptos CSR app

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(vitalboard_web::App);
}

// Server builds use the vitalboard-server binary instead
#[cfg(not(feature = "csr"))]
fn main() {}
