fn main() {
    if let Err(err) = northchild::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
