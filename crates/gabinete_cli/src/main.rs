//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gabinete_core` linkage and
//!   schema bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use gabinete_core::db::migrations::latest_version;
use gabinete_core::db::open_db_in_memory;

fn main() {
    println!("gabinete_core version={}", gabinete_core::core_version());
    match open_db_in_memory() {
        Ok(_conn) => println!("gabinete_core schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("gabinete_core bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
