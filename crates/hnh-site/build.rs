//! Minifies the site stylesheet into OUT_DIR at build time.

use std::{env, fs, path::PathBuf};

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

fn main() {
    println!("cargo:rerun-if-changed=assets/site.css");

    let source = fs::read_to_string("assets/site.css").expect("read assets/site.css");

    let mut sheet =
        StyleSheet::parse(&source, ParserOptions::default()).expect("parse assets/site.css");
    sheet
        .minify(MinifyOptions::default())
        .expect("minify assets/site.css");
    let output = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .expect("print minified css");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    fs::write(out_dir.join("site.min.css"), output.code).expect("write site.min.css");
}
