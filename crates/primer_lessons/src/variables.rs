use std::io::Write;

use primer_base::PrimerResult;
use primer_base::tracing::{debug, trace};

use crate::type_tag::type_of;

/// Declares a handful of bindings, then prints their values and two type tags.
pub fn run(out: &mut dyn Write) -> PrimerResult<()> {
    // Explicit type annotation
    let age: i32 = 25;

    // Type inferred from the literal
    let name = "Alice";

    // No initializer: starts out at the zero value of its type
    let mut score = i32::default();
    debug!(score, "score declared with its zero value");

    let country = "Canada";

    // Two bindings in one statement
    let (height, weight) = (175.5, 68.2);

    score = 95;
    trace!(age, name, score, country, height, weight, "bindings ready");

    writeln!(out, "Name: {}", name)?;
    writeln!(out, "Age: {}", age)?;
    writeln!(out, "Country: {}", country)?;
    writeln!(out, "Height: {}", height)?;
    writeln!(out, "Weight: {}", weight)?;
    writeln!(out, "Score: {}", score)?;

    writeln!(out, "Type of age: {}", type_of(&age))?;
    writeln!(out, "Type of name: {}", type_of(&name))?;
    Ok(())
}
