//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generate Swift bindings for the desktop host:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libmention_find.so --language swift --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
