fn main() {
    // Forward ESP-IDF toolchain env vars only when building the firmware
    // binary; host-target lib/test builds need none of them.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
