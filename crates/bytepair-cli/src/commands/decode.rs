use std::io::Write;

use bytepair::{BytePairError, Tokenizer, TokenizerOptions, errors::BPResult};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Alphabet file, as written by `train`.
    #[arg(long)]
    alphabet: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer: Tokenizer<u32> =
            Tokenizer::load_alphabet_path(&self.alphabet, TokenizerOptions::default())?;

        let text = String::from_utf8(self.input.read_all()?)?;
        let symbols = parse_symbols(&text)?;
        let bytes = tokenizer.decode(&symbols)?;
        log::info!("Decoded {} symbols into {} bytes", symbols.len(), bytes.len());

        let mut writer = self.output.open_writer()?;
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }
}

/// Parse whitespace-separated symbol ids.
fn parse_symbols(text: &str) -> BPResult<Vec<u32>> {
    text.split_whitespace()
        .map(|field| {
            field
                .parse::<u32>()
                .map_err(|e| BytePairError::Parse(format!("symbol {field:?}: {e}")))
        })
        .collect()
}
