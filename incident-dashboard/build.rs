//! Build script for incident-dashboard.
//!
//! Copies the five source CSVs from `../fixtures` to OUT_DIR so they can be
//! embedded via `include_str!` at compile time. A missing fixture becomes an
//! empty file, which the loader rejects at startup with a missing-column error.

use std::env;
use std::fs;
use std::path::Path;

const SOURCE_FILES: [&str; 5] = [
    "SF_Incidents.csv",
    "SF_Coordinates.csv",
    "SF_Crimes.csv",
    "SF_Dates.csv",
    "SF_Resolution.csv",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for name in &SOURCE_FILES {
        let src_path = format!("../fixtures/{}", name);
        let src = Path::new(&src_path);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
