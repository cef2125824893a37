fn main() {
    if let Err(e) = i2pkeys_converter::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
