pub mod tables;

use std::io::{self, Write};

const BANNER: &str = "[ C23 BASIS SET COUNTER ]";
const FOOTER: &str = "[ FINISHED ]";

pub fn print_banner() {
    let _ = writeln!(io::stdout().lock(), "{BANNER}");
}

pub fn print_footer() {
    let _ = writeln!(io::stdout().lock(), "{FOOTER}");
}

pub fn print_error(error: &dyn std::error::Error) {
    let _ = writeln!(io::stderr().lock(), "Error: {error}");
}
