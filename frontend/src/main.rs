//! Entry point for the WASM application

pub fn main() {
    scorelift_frontend::run();
}
