mod line_scanner;
mod lines;
mod sloc;

pub use line_scanner::{LineKind, LineScanner};
pub use lines::{Lines, split_lines, strip_bom};
pub use sloc::{LineStats, SlocCounter};

#[cfg(test)]
mod test_fixtures;
