use std::process;

fn main() {
    if let Err(e) = create_example::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
