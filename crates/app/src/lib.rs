pub const NAME: &str = "autotrans";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = concat!("autotrans", "/", env!("CARGO_PKG_VERSION"));
