//! Command-line argument model

use crate::driver::EmitFormat;
use clap::Parser as ClapParser;
use std::path::PathBuf;

/// Compile branching story scripts into interactive HTML pages
#[derive(ClapParser, Debug, Clone, PartialEq, Eq)]
#[command(name = "storyc", version, about)]
pub struct Cli {
    /// Story file to compile
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["eval", "example"])]
    pub file: Option<String>,

    /// Inline story source to compile
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "example")]
    pub eval: Option<String>,

    /// Bundled sample story to compile
    #[arg(short = 'x', long, value_name = "NAME")]
    pub example: Option<String>,

    /// List the bundled sample stories and exit
    #[arg(long)]
    pub list_examples: bool,

    /// Print the story language guide and exit
    #[arg(long)]
    pub guide: bool,

    /// Where to write the compiled output
    #[arg(short, long, value_name = "PATH", default_value = "output.html")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = EmitFormat::Html)]
    pub emit: EmitFormat,

    /// Document title for HTML output
    #[arg(long)]
    pub title: Option<String>,

    /// Validate the story without writing any output
    #[arg(short, long)]
    pub check: bool,

    /// Print the scanned tokens
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the compiled scene graph
    #[arg(long)]
    pub print_graph: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments equivalent to `storyc --file <path>`
    pub fn with_file(file: String) -> Self {
        Self {
            file: Some(file),
            ..Self::empty()
        }
    }

    /// Arguments equivalent to `storyc --eval <source>`
    pub fn with_eval(source: String) -> Self {
        Self {
            eval: Some(source),
            ..Self::empty()
        }
    }

    /// Whether any story input was given
    pub fn has_input(&self) -> bool {
        self.file.is_some() || self.eval.is_some() || self.example.is_some()
    }

    fn empty() -> Self {
        Self {
            file: None,
            eval: None,
            example: None,
            list_examples: false,
            guide: false,
            output: PathBuf::from("output.html"),
            emit: EmitFormat::Html,
            title: None,
            check: false,
            print_tokens: false,
            print_graph: false,
            verbose: false,
        }
    }
}
