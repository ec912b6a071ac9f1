//! Entry point for the WASM application

pub fn main() {
    text_extractor::start();
}
