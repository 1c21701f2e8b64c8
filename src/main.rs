/// Binary entrypoint for the `binabi` executable.
///
/// Keeps the binary thin — all business logic lives in the `binabi_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    binabi_lib::run();
}
