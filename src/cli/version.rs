//! `--version` and `--help`.

use super::args::USAGE;

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("heybo-widget {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}

pub fn handle_help_command() {
    println!("{}\n\n{}", version_line(), USAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("heybo-widget "));
    }
}
