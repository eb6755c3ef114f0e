fn main() {
    // Propagate ESP-IDF build environment (linker args, sdkconfig) when
    // building for the espidf target. No-op on host builds.
    embuild::espidf::sysenv::output();
}
