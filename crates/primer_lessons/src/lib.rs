/* 📖 # How are lessons structured?
Each lesson is a plain function writing its output to a `&mut dyn Write`.
The executables hand it locked stdout, tests hand it a `Vec<u8>`, so the exact
output can be checked without spawning a process.
*/

pub mod catalog;
pub mod hello;
pub mod type_tag;
pub mod variables;

#[cfg(test)]
mod test_util;

pub use catalog::{Lesson, LessonFn, find_lesson, lessons, write_catalog};
pub use type_tag::{short_type_name, type_of};
