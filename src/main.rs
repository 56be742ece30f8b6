//! modelvf CLI - interactive verification of first-order models.

use std::io;

use modelvf::parser::Notation;
use modelvf::proof::NaiveStrategy;
use modelvf::repl::Repl;

fn main() {
    println!("modelvf - first-order model verification");
    println!("  $<sentence>;...;{{a,b,c}}   set the model's rules and domain");
    println!("  ?<sentence>               query the model");
    println!("An empty line ends the session.\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(
        stdin.lock(),
        stdout.lock(),
        NaiveStrategy::default(),
        Notation::Prefix,
    );
    if let Err(e) = repl.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
