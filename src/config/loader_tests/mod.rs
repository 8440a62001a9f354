mod mock_fs;

mod discovery_tests;
mod parsing_tests;
