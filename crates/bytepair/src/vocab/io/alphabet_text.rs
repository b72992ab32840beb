//! # Alphabet Text IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{BPResult, BytePairError},
    types::{SymbolType, symbol_to_u64},
    vocab::{AlphabetMap, SymbolKind},
};

fn parse_symbol<T: SymbolType>(
    field: &str,
    line_no: usize,
) -> BPResult<T> {
    let id: u64 = field.parse().map_err(|e: core::num::ParseIntError| {
        BytePairError::Parse(format!("line {line_no}: {field:?}: {e}"))
    })?;
    T::from_u64(id).ok_or_else(|| {
        BytePairError::Parse(format!(
            "line {line_no}: symbol {id} does not fit the symbol type"
        ))
    })
}

/// Load an [`AlphabetMap`] from an alphabet text file.
///
/// Lines are:
/// ```terminaloutput
/// {SYMBOL}
/// {SYMBOL} {LEFT} {RIGHT}
/// ```
///
/// # Arguments
/// * `path` - the path to the alphabet file.
pub fn load_alphabet_path<T, P>(path: P) -> BPResult<AlphabetMap<T>>
where
    T: SymbolType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_alphabet(reader)
}

/// Read an [`AlphabetMap`] from an alphabet text line reader.
///
/// Lines are:
/// ```terminaloutput
/// {SYMBOL}
/// {SYMBOL} {LEFT} {RIGHT}
/// ```
///
/// Blank lines are skipped; lines may appear in any order.
///
/// # Arguments
/// * `reader` - the line reader.
///
/// # Returns
/// The alphabet; [`BytePairError::Parse`] for malformed lines,
/// or [`BytePairError::AlphabetConflict`] if the entries are inconsistent.
pub fn read_alphabet<T, R>(reader: R) -> BPResult<AlphabetMap<T>>
where
    T: SymbolType,
    R: BufRead,
{
    let mut entries: Vec<(T, SymbolKind<T>)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let entry = match fields.as_slice() {
            [] => continue,
            [symbol] => (parse_symbol(symbol, line_no)?, SymbolKind::Primitive),
            [symbol, left, right] => (
                parse_symbol(symbol, line_no)?,
                SymbolKind::Composite(
                    parse_symbol(left, line_no)?,
                    parse_symbol(right, line_no)?,
                ),
            ),
            _ => {
                return Err(BytePairError::Parse(format!(
                    "line {line_no}: expected 1 or 3 fields, found {}",
                    fields.len()
                )));
            }
        };
        entries.push(entry);
    }

    AlphabetMap::from_entries(entries)
}

/// Save an [`AlphabetMap`] to an alphabet text file.
///
/// # Arguments
/// * `alphabet` - the alphabet to save.
/// * `path` - the path to save the alphabet to.
pub fn save_alphabet_path<T: SymbolType, P: AsRef<Path>>(
    alphabet: &AlphabetMap<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_alphabet(alphabet, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write an [`AlphabetMap`] to a [`Write`] writer.
///
/// Symbols are written in ascending order; one per line.
///
/// # Arguments
/// * `alphabet` - the alphabet to save.
/// * `writer` - the writer to target.
pub fn write_alphabet<T, W>(
    alphabet: &AlphabetMap<T>,
    writer: &mut W,
) -> BPResult<()>
where
    T: SymbolType,
    W: Write,
{
    for (symbol, kind) in alphabet.iter() {
        match kind {
            SymbolKind::Primitive => writeln!(writer, "{}", symbol_to_u64(symbol))?,
            SymbolKind::Composite(left, right) => writeln!(
                writer,
                "{} {} {}",
                symbol_to_u64(symbol),
                symbol_to_u64(left),
                symbol_to_u64(right)
            )?,
        }
    }

    Ok(())
}
