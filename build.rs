fn main() {
    // ESP-IDF build environment propagation — only when targeting the chip.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
