fn main() {
    #[cfg(feature = "cli")]
    keyshift::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("keyshift: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
