use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap())
        .join("glyphs_include.rs");
    let output = File::create(out).unwrap();

    glyphpack::generate_table(output).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
