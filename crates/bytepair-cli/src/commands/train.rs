use std::io::Write;

use bytepair::{
    Tokenizer,
    errors::BPResult,
    vocab::io::{load_training_bytes_path, write_alphabet},
};

use crate::{LogArgs, input_output::OutputArgs};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Training files; concatenated in order.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Reading sources:");
        let corpus = read_sources(&self.files)?;

        log::info!("Training on {} bytes...", corpus.len());
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        let symbols = tokenizer.train(&corpus)?;

        let alphabet = tokenizer.alphabet()?;
        log::info!("Primitives: {}", alphabet.primitive_count());
        log::info!("Merge rules: {}", alphabet.composite_count());
        log::info!("Compressed length: {} -> {}", corpus.len(), symbols.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_alphabet(alphabet, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Concatenate the training files, in order.
fn read_sources(files: &[String]) -> BPResult<Vec<u8>> {
    let mut corpus = Vec::new();
    for (idx, path) in files.iter().enumerate() {
        log::info!("{idx}: {path}");
        corpus.extend(load_training_bytes_path(path)?);
    }
    Ok(corpus)
}
