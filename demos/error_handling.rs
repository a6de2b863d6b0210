//! Demonstrate lexical errors and their rendering.

fn main() {
    // Unterminated string literal
    match scriptlex::scan("const s = \"never closed;\n") {
        Ok(_) => println!("Scanned OK (unexpected)"),
        Err(e) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.line, e.column);
        }
    }

    println!();

    // Character that starts no token
    match scriptlex::scan("var total = a + b;") {
        Ok(_) => println!("Scanned OK (unexpected)"),
        Err(e) => print!("{}", e.render()),
    }
}
