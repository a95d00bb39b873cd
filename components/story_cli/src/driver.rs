//! Compile orchestration for the CLI
//!
//! The Driver ties the pieces together:
//! - reading story source from a file, a string or a bundled sample
//! - compiling it into a scene graph
//! - rendering the graph as HTML or JSON and writing it out

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::samples;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use story_compiler::{compile, scan, HtmlGenerator};
use story_types::SceneGraph;

/// Output format of a compile
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitFormat {
    /// Self-contained interactive HTML page
    #[default]
    Html,
    /// Scene graph as JSON
    Json,
}

/// What a successful compile produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    /// The validated scene graph
    pub graph: SceneGraph,
    /// The file written, or `None` in check-only mode
    pub written: Option<PathBuf>,
}

/// Compiles stories and writes the rendered output
#[derive(Debug, Clone)]
pub struct Driver {
    output: PathBuf,
    emit: EmitFormat,
    title: Option<String>,
    check_only: bool,
    print_tokens: bool,
    print_graph: bool,
}

impl Driver {
    /// Create a driver that writes HTML to `output.html`
    ///
    /// # Example
    /// ```
    /// use story_cli::Driver;
    ///
    /// let driver = Driver::new().with_check_only(true);
    /// let report = driver.compile_string("scene: START text: \"Hi.\"").unwrap();
    /// assert!(report.written.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            output: PathBuf::from("output.html"),
            emit: EmitFormat::Html,
            title: None,
            check_only: false,
            print_tokens: false,
            print_graph: false,
        }
    }

    /// Configure a driver from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let mut driver = Self::new()
            .with_output(cli.output.clone())
            .with_emit(cli.emit)
            .with_check_only(cli.check)
            .with_print_tokens(cli.print_tokens)
            .with_print_graph(cli.print_graph);
        driver.title = cli.title.clone();
        driver
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the output format
    pub fn with_emit(mut self, emit: EmitFormat) -> Self {
        self.emit = emit;
        self
    }

    /// Set the HTML document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Validate only, never write output
    pub fn with_check_only(mut self, enabled: bool) -> Self {
        self.check_only = enabled;
        self
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable scene graph printing
    pub fn with_print_graph(mut self, enabled: bool) -> Self {
        self.print_graph = enabled;
        self
    }

    /// Output path
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Output format
    pub fn emit(&self) -> EmitFormat {
        self.emit
    }

    /// Check if check-only mode is enabled
    pub fn is_check_only(&self) -> bool {
        self.check_only
    }

    /// Compile a story file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read, the story does not
    /// compile, or the output cannot be written
    pub fn compile_file(&self, path: impl AsRef<Path>) -> CliResult<CompileReport> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "compiling story file");
        self.compile_string(&source)
    }

    /// Compile one of the bundled sample stories
    pub fn compile_example(&self, name: &str) -> CliResult<CompileReport> {
        let sample =
            samples::find(name).ok_or_else(|| CliError::UnknownExample(name.to_string()))?;
        tracing::info!(example = sample.name, "compiling bundled sample");
        self.compile_string(sample.source)
    }

    /// Compile story source
    ///
    /// # Errors
    /// Returns `CliError` if the story does not compile or the output
    /// cannot be written
    pub fn compile_string(&self, source: &str) -> CliResult<CompileReport> {
        if self.print_tokens {
            for token in scan(source)? {
                println!(
                    "{:<14} {:<24} {}",
                    format!("{:?}", token.kind),
                    format!("{:?}", token.lexeme),
                    token.position
                );
            }
        }

        let graph = compile(source)?;

        if self.print_graph {
            println!("Scene graph: {:#?}", graph);
        }

        if self.check_only {
            return Ok(CompileReport {
                graph,
                written: None,
            });
        }

        let rendered = self.render(&graph)?;
        fs::write(&self.output, rendered).map_err(|source| CliError::Write {
            path: self.output.clone(),
            source,
        })?;
        tracing::info!(
            output = %self.output.display(),
            scenes = graph.len(),
            "wrote compiled story"
        );

        Ok(CompileReport {
            graph,
            written: Some(self.output.clone()),
        })
    }

    /// Render a compiled graph in the configured format
    pub fn render(&self, graph: &SceneGraph) -> CliResult<String> {
        match self.emit {
            EmitFormat::Html => {
                let mut generator = HtmlGenerator::new();
                if let Some(title) = &self.title {
                    generator = generator.with_title(title.clone());
                }
                Ok(generator.generate(graph))
            }
            EmitFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
