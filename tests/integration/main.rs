//! Integration tests for derelict

mod helpers;

mod cli_test;
mod config_test;
mod degradation_test;
mod engine_test;
