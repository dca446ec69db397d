//! A parsed source file: text, syntax tree, diagnostics and build configuration.

mod dump;
mod printer;


pub use printer::SourcePrinter;

use rowan::GreenNode;

use crate::config::BuildConfiguration;
use crate::diagnostics::Diagnostics;
use crate::parser::{self, Parser, Root, SyntaxNode, lexer::lex};
use crate::{Error, Result};

const DEFAULT_PARSE_FUEL: u32 = 1_000_000;
const DEFAULT_PARSE_MAX_DEPTH: u32 = 4096;

pub struct SourceFileBuilder {
    name: String,
    source: String,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
    build_configuration: BuildConfiguration,
}

impl SourceFileBuilder {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            name: String::from("<input>"),
            source: source.into(),
            exec_fuel: Some(DEFAULT_PARSE_FUEL),
            recursion_fuel: Some(DEFAULT_PARSE_MAX_DEPTH),
            build_configuration: BuildConfiguration::default(),
        }
    }

    /// Display name used in rendered diagnostics.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// `None` disables the limit.
    pub fn with_exec_fuel(mut self, fuel: Option<u32>) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// `None` disables the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn build_configuration(mut self, config: BuildConfiguration) -> Self {
        self.build_configuration = config;
        self
    }

    /// Parses the source. Syntax errors become diagnostics; only resource limits fail.
    pub fn parse(self) -> Result<SourceFile> {
        if u32::try_from(self.source.len()).is_err() {
            return Err(Error::SourceTooLarge(self.source.len()));
        }
        let parser = Parser::new(&self.source, lex(&self.source))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel);
        let (parse, diagnostics) = parser::parse_with_parser(parser)?;
        log::debug!(
            "parsed {} ({} bytes, {} diagnostics, fuel {})",
            self.name,
            self.source.len(),
            diagnostics.len(),
            parse.exec_fuel_consumed()
        );

        Ok(SourceFile {
            exec_fuel_consumed: parse.exec_fuel_consumed(),
            green: parse.into_cst(),
            name: self.name,
            source: self.source,
            diagnostics,
            build_configuration: self.build_configuration,
        })
    }
}

/// Owns everything the matcher reads. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    source: String,
    green: GreenNode,
    diagnostics: Diagnostics,
    build_configuration: BuildConfiguration,
    exec_fuel_consumed: u32,
}

impl SourceFile {
    pub fn builder(source: impl Into<String>) -> SourceFileBuilder {
        SourceFileBuilder::new(source)
    }

    /// Parses with default limits and configuration.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        Self::builder(source).parse()
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> Root {
        Root::cast(self.syntax()).expect("parser always produces a SourceFile root")
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn build_configuration(&self) -> &BuildConfiguration {
        &self.build_configuration
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// Diagnostics with cascading errors suppressed, labelled with the file name.
    pub fn render_diagnostics(&self, colored: bool) -> String {
        self.diagnostics
            .filtered_printer(&self.source)
            .path(&self.name)
            .colored(colored)
            .render()
    }

    pub fn printer(&self) -> SourcePrinter<'_> {
        SourcePrinter::new(self)
    }
}
