use super::*;
use std::io::Cursor;

mod python_tests;
mod reader_tests;

pub(super) use crate::counter::test_fixtures::{builtin, count, stats};
