//! Scan a small script and print both diagnostic views.

use scriptlex::{ListingStyle, annotate, format_tokens, scan};

fn main() {
    let source = "var greeting = \"hi\";\nruntime.print(greeting, 1.5);\n";

    match scan(source) {
        Ok(tokens) => {
            print!("{}", format_tokens(&tokens, ListingStyle::Compact));
            println!();
            print!("{}", annotate(&tokens, source));
        }
        Err(e) => eprint!("{}", e.render()),
    }
}
