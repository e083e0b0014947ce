/// Short git commit the bundle was built from, or `unknown` outside a checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("FACEMARK_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Crate version baked in by cargo.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
