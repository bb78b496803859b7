//! Version command.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `buzzboard 0.1.0`
pub fn version_string() -> String {
    format!("buzzboard {}", VERSION)
}

/// Handle the --version command: print and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_string());
    std::process::exit(0)
}
