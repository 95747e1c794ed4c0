use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

/// Extension given to output files.
const OUTPUT_EXTENSION: &str = "txt";

/// Prints the output to stdout, or saves it to the given file if there is one.
pub fn write_output(output: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        None => {
            let stdout = std::io::stdout();
            write_to(&mut stdout.lock(), output).map_err(|source| Error::Output {
                destination: String::from("stdout"),
                source,
            })
        }
        Some(path) => {
            let path = output_path(path);
            let to_error = |source| Error::Output { destination: path.display().to_string(), source };

            let mut file = BufWriter::new(File::create(&path).map_err(to_error)?);
            write_to(&mut file, output).map_err(to_error)?;
            info!("Saved response to {}", path.display());
            Ok(())
        }
    }
}

/// Gets the file to save output to, adding a ".txt" extension when the name lacks one.
pub fn output_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(extension) if extension == OsStr::new(OUTPUT_EXTENSION) => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_owned();
            name.push(".");
            name.push(OUTPUT_EXTENSION);
            PathBuf::from(name)
        }
    }
}

/// Writes the output followed by a newline, then flushes.
fn write_to(writer: &mut impl Write, output: &str) -> std::io::Result<()> {
    writeln!(writer, "{}", output)?;
    writer.flush()
}
