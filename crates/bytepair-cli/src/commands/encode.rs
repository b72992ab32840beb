use std::io::Write;

use bytepair::{Tokenizer, TokenizerOptions};

use crate::{
    LogArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Alphabet file, as written by `train`.
    #[arg(long)]
    alphabet: String,

    /// Use rayon batch parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = TokenizerOptions::default().with_parallel(self.parallel);
        let tokenizer: Tokenizer<u32> = Tokenizer::load_alphabet_path(&self.alphabet, options)?;

        let bytes = self.input.read_all()?;
        let symbols = tokenizer.encode(&bytes)?;
        log::info!("Encoded {} bytes into {} symbols", bytes.len(), symbols.len());

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", format_symbols(&symbols))?;
        writer.flush()?;

        Ok(())
    }
}

/// Render symbols as space-separated ids.
fn format_symbols(symbols: &[u32]) -> String {
    symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
