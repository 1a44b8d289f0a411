use clap;

/// How much the search reports while running, mapped onto `tracing` levels.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Only errors.")]
    Silent,
    #[clap(help = "Search start, progress and outcome.")]
    Normal,
    #[clap(help = "Also goal detection and limit details.")]
    Verbose,
    #[clap(help = "Every expansion.")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
