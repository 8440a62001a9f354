//! Line classification tests, grouped by concern:
//! - `string_context_tests`: comment markers inside string literals
//! - `nested_comment_tests`: block comments with and without nesting
//! - `python_docstring_tests`: docstrings versus triple-quoted strings
//! - `lua_tests`: Lua long brackets and long strings
//! - `line_start_tests`: Ruby `=begin`, Perl POD and MATLAB block markers
//! - `raw_string_tests`: Rust raw strings, char literals and lifetimes
//! - `edge_case_tests`: unicode, long lines, empty comments, token precedence

use super::*;


pub(super) use crate::counter::test_fixtures::{builtin, kinds};
pub(super) use crate::counter::LineKind::{Blank, Code, Comment};
