use crate::{
    LogArgs,
    commands::{decode::DecodeArgs, encode::EncodeArgs, train::TrainArgs},
};

pub mod decode;
pub mod encode;
pub mod train;

/// Subcommands for bytepair
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a merge alphabet from training files.
    Train(TrainArgs),

    /// Encode bytes into symbol ids.
    Encode(EncodeArgs),

    /// Decode symbol ids back into bytes.
    Decode(DecodeArgs),
}

impl Commands {
    /// The logging flags of the selected subcommand.
    pub fn logging(&self) -> &LogArgs {
        match self {
            Commands::Train(cmd) => &cmd.logging,
            Commands::Encode(cmd) => &cmd.logging,
            Commands::Decode(cmd) => &cmd.logging,
        }
    }

    /// Install logging, then run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging().init()?;

        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
