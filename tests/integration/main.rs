//! Integration tests for the clippings CLI and library.


mod highlights_test;
mod parser_test;
mod prepare_test;
