fn main() {
    if let Err(err) = kmp_version_check::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
