#[cfg(target_arch = "wasm32")]
fn main() {
    // Mounting happens in the library's `start` entry point, which
    // wasm-bindgen invokes once the module is instantiated.
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("this binary only runs in the browser; build it with trunk");
}
