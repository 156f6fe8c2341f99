//! # Tokenizing colored text
//!
//! Parses a short build log that mixes escape spellings and prints each run
//! with the styles active over it.

use ansimark_sgr::{parse, strip};

fn main() {
    let log = concat!(
        "^[[1m   Compiling^[[0m ansimark v0.1.0\n",
        "\\e[33mwarning\\e[0m: unused variable `x`\n",
        "\x1b[1;32m    Finished\x1b[0m dev profile in \x1b[38;5;208m1.2s\x1b[0m\n",
    );

    println!("Tokens:");
    for (i, token) in parse(log).iter().enumerate() {
        let styles: Vec<String> = token.styles().iter().map(|t| t.to_string()).collect();
        println!("{:3}: {:?} [{}]", i, token.text(), styles.join(" "));
    }

    println!();
    println!("Plain text:");
    print!("{}", strip(log));
}
