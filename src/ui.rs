//! Terminal output helpers.
//!
//! Standard output carries nothing but the version line, so everything here
//! writes to standard error.

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}
