/* 📖 # Why have primer_base as a core library?
primer_base provides the error handling and tracing setup shared by the lesson
library and the executables, so both report failures the same way.
*/

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, PrimerError, PrimerResult, ResultExt};
