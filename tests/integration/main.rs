//! Integration tests for the wired agent.

mod command_test;
mod helpers;
mod presence_test;
mod session_cache_test;
