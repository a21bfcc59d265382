use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate besides tracing-error
- More transparency into error handling logic
 */

/// Error variants that can occur while running a lesson.
#[derive(Debug)]
pub enum ErrorKind {
    /// Writing lesson output failed
    Io { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io { source } => write!(f, "I/O error: {}", source),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and PrimerError?
ErrorKind holds the structural variant, PrimerError adds the runtime baggage:
context strings attached during propagation, an optional cause and the span
trace captured when the error was created.
*/

/// Error type wrapping an [`ErrorKind`] with context, cause and span trace.
pub struct PrimerError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<PrimerError>>,
    span_trace: SpanTrace,
}

impl PrimerError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: impl Into<Box<PrimerError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let count = self.context.len();
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i + 1 == count && self.cause.is_none() {
                "└─"
            } else {
                "├─"
            };
            writeln!(f, "{}{} {}", indent, branch, ctx)?;
        }
        if let Some(cause) = &self.cause {
            writeln!(f, "{}└─ cause: {}", indent, cause.kind)?;
            cause.fmt_tree(f, &format!("{}   ", indent))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for PrimerError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for PrimerError {
    fn from(source: io::Error) -> Self {
        Self::new(ErrorKind::Io { source })
    }
}

impl From<io::Error> for Box<PrimerError> {
    fn from(source: io::Error) -> Self {
        Box::new(PrimerError::from(source))
    }
}

impl StdError for PrimerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Io { source } => Some(source),
            ErrorKind::Message { .. } => self
                .cause
                .as_deref()
                .map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}

impl fmt::Display for PrimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

// 📖 # Why a hand-written Debug?
// `main` prints errors with `{:?}`, so Debug is the human-facing diagnostic:
// message first, then a tree of contexts and causes, then the span trace.
impl fmt::Debug for PrimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type, boxed to keep the Ok path small.
pub type PrimerResult<T> = std::result::Result<T, Box<PrimerError>>;

/// Extension trait for attaching context to Results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eager evaluation.
    fn context(self, context: impl Into<String>) -> PrimerResult<T>;

    /// Attaches context using lazy evaluation.
    /// The closure only runs if the result is an error.
    fn with_context<F>(self, f: F) -> PrimerResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Box<PrimerError>>,
{
    fn context(self, context: impl Into<String>) -> PrimerResult<T> {
        self.map_err(|err| {
            let err: Box<PrimerError> = err.into();
            Box::new((*err).context(context))
        })
    }

    fn with_context<F>(self, f: F) -> PrimerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| {
            let err: Box<PrimerError> = err.into();
            Box::new((*err).with_context(f))
        })
    }
}

/// Creates a boxed message error using `format!` syntax.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        ::std::boxed::Box::new($crate::PrimerError::message(::std::format!($($arg)*)))
    };
}
