//! Line-by-line batch processing of repository specs

use std::io::{BufRead, Write};

use crate::fetcher::Fetcher;
use crate::release::source::ReleaseSource;
use crate::report::result_line;
use crate::spec::RepoSpec;

/// Resolves one input line to its output line.
///
/// Parse and fetch failures render as their error message; either way the
/// caller moves on to the next line.
pub async fn process_line<S: ReleaseSource>(fetcher: &Fetcher<S>, line: &str) -> String {
    let spec = match RepoSpec::parse(line) {
        Ok(spec) => spec,
        Err(err) => return err.to_string(),
    };

    match fetcher.resolve(&spec).await {
        Ok(versions) => result_line(&spec.full_name(), &versions),
        Err(err) => err.to_string(),
    }
}

/// Processes a whole input, writing one output line per input line.
///
/// One repository is fully resolved before the next line is read. Per-line
/// failures are written like results and never end the batch; only input or
/// output I/O errors do.
pub async fn run_batch<S, R, W>(fetcher: &Fetcher<S>, input: R, out: &mut W) -> std::io::Result<()>
where
    S: ReleaseSource,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", process_line(fetcher, &line).await)?;
    }

    Ok(())
}
