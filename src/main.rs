fn main() {
    if let Err(err) = statboard::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
