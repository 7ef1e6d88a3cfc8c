//! Common utility modules for shared functionality across the codebase.

pub mod string_utils;
