fn main() {
    if let Err(e) = tok_drv::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
