use std::fmt;
use std::io::Write;

use primer_base::tracing::info_span;
use primer_base::{PrimerResult, ResultExt};

use crate::{hello, variables};

/// Signature shared by every lesson body.
pub type LessonFn = fn(&mut dyn Write) -> PrimerResult<()>;

/// A tutorial program together with its place in the course.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub chapter: u32,
    pub number: u32,
    pub title: &'static str,
    /// Name of the executable that runs this lesson.
    pub program: &'static str,
    body: LessonFn,
}

impl Lesson {
    /// Runs the lesson inside a `lesson` span, writing its output to `out`.
    pub fn run(&self, out: &mut dyn Write) -> PrimerResult<()> {
        let span = info_span!("lesson", program = self.program);
        let _guard = span.enter();
        (self.body)(out).with_context(|| format!("Failed to run lesson {}", self))
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {} ({})",
            self.chapter, self.number, self.title, self.program
        )
    }
}

static LESSONS: [Lesson; 2] = [
    Lesson {
        chapter: 1,
        number: 1,
        title: "Your First Program",
        program: "hello",
        body: hello::run,
    },
    Lesson {
        chapter: 2,
        number: 1,
        title: "Variables",
        program: "variables",
        body: variables::run,
    },
];

/// All lessons in course order.
pub fn lessons() -> &'static [Lesson] {
    &LESSONS
}

/// Looks up the lesson run by the executable named `program`.
pub fn find_lesson(program: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.program == program)
}

/// Writes one line per lesson, in course order.
pub fn write_catalog(out: &mut dyn Write) -> PrimerResult<()> {
    for lesson in lessons() {
        writeln!(out, "{}", lesson)?;
    }
    Ok(())
}
