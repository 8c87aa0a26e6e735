//! Output generation for the formwork command-line program

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Write rendered output to standard output.
pub fn emit(content: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(content.as_bytes())?;
    handle.flush()
}

/// Compile Typst markup to a PDF beside the given bundle by piping it
/// through an external `typst` process. Returns the path of the PDF.
pub fn via_typst(filename: &Path, markup: &str) -> io::Result<PathBuf> {
    info!("Printing file: {}", filename.display());

    if filename.to_str() == Some("-") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Unable to render to PDF from standard input",
        ));
    }

    let target = filename.with_extension("pdf");

    let mut child = Command::new("typst")
        .arg("compile")
        .arg("-")
        .arg(&target)
        .stdin(Stdio::piped())
        .spawn()?;

    // dropping stdin closes the pipe so typst sees end of input
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "No stdin for typst"))?;
        stdin.write_all(markup.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    debug!("Process output: {:?}", output);

    if !output
        .status
        .success()
    {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("typst exited with {}", output.status),
        ));
    }

    Ok(target)
}
