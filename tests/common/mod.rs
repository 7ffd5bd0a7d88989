// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

#[allow(dead_code)]
pub fn lines_of(text: &str) -> Vec<String> { text.lines().map(str::to_owned).collect() }
