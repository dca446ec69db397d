//! Grammar productions for the source language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! The grammar covers a Swift-like subset: enough declarations, statements and
//! expressions to locate every name, label and `#if` clause in a file.

mod decls;
mod expressions;
mod if_config;
mod items;
mod statements;
mod types;
