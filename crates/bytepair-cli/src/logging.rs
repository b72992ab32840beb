use stderrlog::{LogLevelNum, Timestamp};

/// Logging flags shared by every subcommand.
///
/// Logs go to stderr; the default level is Info,
/// and each ``-v`` raises it one step, up to Trace.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// More log detail (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderr log level selected by ``-v``.
    pub fn level(&self) -> LogLevelNum {
        match self.verbose {
            0 => LogLevelNum::Info,
            1 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    fn timestamp(&self) -> Timestamp {
        if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        }
    }

    /// Install the process-wide stderr logger.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level())
            .timestamp(self.timestamp())
            .init()?;

        Ok(())
    }
}
