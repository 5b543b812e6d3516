//! Source processing API
//!
//! Runs Ying source through a stage (`token` or `ast`) and renders the result
//! in one of several formats. A processing spec is written `<stage>-<format>`,
//! e.g. `token-simple` or `ast-json`.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::ying::formats::{serialize_program, ToSource};
use crate::ying::lexer::{lex_with_spans, Token};
use crate::ying::parser::{parse_program, SyntaxError};

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Source,
}

/// A complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a spec string like `token-simple` or `ast-tag`.
    pub fn from_string(spec: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = spec
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(spec.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "source" => OutputFormat::Source,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::UnsupportedCombination(spec.to_string()));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Tag),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Ast, OutputFormat::Source),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Source => "source",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Unsupported stage and format combination: {0}")]
    UnsupportedCombination(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Process source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(&lex_with_spans(source), spec.format),
        ProcessingStage::Ast => {
            let program = parse_program(source)?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_program(&program)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&program)?),
                // Through a JSON value: YAML has no notation for nested enum tags.
                OutputFormat::Yaml => {
                    Ok(serde_yaml::to_string(&serde_json::to_value(&program)?)?)
                }
                OutputFormat::Source => Ok(program.to_source()),
                OutputFormat::Simple => {
                    Err(ProcessingError::UnsupportedCombination(spec.to_string()))
                }
            }
        }
    }
}

/// Read a Ying file and process it according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path)?;
    process_source(&content, spec)
}

#[derive(Serialize)]
struct SpannedToken<'a> {
    token: &'a Token,
    span: Range<usize>,
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &[(Token, Range<usize>)],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (token, span) in tokens {
                result.push_str(&format!(
                    "{}..{} {} {}\n",
                    span.start,
                    span.end,
                    token.kind(),
                    token
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let spanned: Vec<SpannedToken> = tokens
                .iter()
                .map(|(token, span)| SpannedToken {
                    token,
                    span: span.clone(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&spanned)?)
        }
        OutputFormat::Yaml | OutputFormat::Tag | OutputFormat::Source => {
            Err(ProcessingError::UnsupportedCombination(format!(
                "{}",
                ProcessingSpec {
                    stage: ProcessingStage::Token,
                    format,
                }
            )))
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
