// Propagate the ESP-IDF build environment to the firmware binary.
//
// Host builds of the library (and its tests) skip this entirely.

fn main() {
    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=build.rs");
}
