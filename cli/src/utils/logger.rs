/// Configures `log` output for `dfq`. The library's `tracing` events reach the
/// same logger through tracing's `log` feature.
pub fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", default_filter(verbose));
    }
    pretty_env_logger::init();
}

/// `RUST_LOG` directives used when the variable is unset
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "dfq=debug,domain_filter=trace"
    } else {
        "dfq=info,domain_filter=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "dfq=info,domain_filter=warn");
        assert_eq!(default_filter(true), "dfq=debug,domain_filter=trace");
    }
}
