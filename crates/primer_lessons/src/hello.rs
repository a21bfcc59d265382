use std::io::Write;

use primer_base::PrimerResult;
use primer_base::tracing::debug;

pub const GREETING: &str = "Hello, World!";

/// Prints the greeting followed by a newline.
pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    debug!("printing greeting");
    writeln!(out, "{}", GREETING)?;
    Ok(())
}
