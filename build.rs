fn main() {
    // UniFFI scaffolding is generated via proc-macros in ffi.rs
    // using uniffi::setup_scaffolding!() macro - no UDL file needed

    // Ensure we rebuild when these files change
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
