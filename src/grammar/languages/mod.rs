//! Per-language grammar configurations.
//!
//! Each module provides:
//! - Function, class and import queries
//! - Node-kind tables for name, parameter and method resolution
//! - Decision-point tables for complexity

mod c;
mod cpp;
mod go;
mod java;
mod javascript;
mod python;
mod rust_lang;
mod typescript;

use super::GrammarConfig;
use crate::language::LanguageId;

/// Logical operator spellings for C-family grammars.
pub(crate) const C_LOGICAL_OPERATORS: &[&str] = &["&&", "||"];

/// Build the static configuration for a language.
pub fn config_for(language: LanguageId) -> GrammarConfig {
    match language {
        LanguageId::Python => python::config(),
        LanguageId::JavaScript => javascript::config(),
        LanguageId::TypeScript => typescript::config(),
        LanguageId::Java => java::config(),
        LanguageId::C => c::config(),
        LanguageId::Cpp => cpp::config(),
        LanguageId::Go => go::config(),
        LanguageId::Rust => rust_lang::config(),
    }
}
