use tracing_subscriber::EnvFilter;

/// Workspace crate targets that log through the shared subscriber.
const CRATE_TARGETS: &[&str] = &[
    "annum",
    "annum_calendar",
    "annum_grid",
    "annum_io",
    "annum_render",
    "annum_scale",
];

/// Initialize tracing from the `-v` count: warn by default, then info,
/// debug, trace. A set `RUST_LOG` env var takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
