//! Story Compiler CLI
//!
//! Entry point for `storyc`. Parses CLI arguments and delegates to the
//! Driver for compilation.

use clap::Parser as ClapParser;
use story_cli::logging::init_tracing;
use story_cli::{samples, Cli, CliError, CompileReport, Driver};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_examples {
        for sample in samples::all() {
            println!("{:<10} {}", sample.name, sample.description);
        }
        return;
    }

    if cli.guide {
        print!("{}", samples::LANGUAGE_GUIDE);
        return;
    }

    let driver = Driver::from_cli(&cli);

    // Execute based on CLI arguments
    let result = if let Some(file) = &cli.file {
        driver.compile_file(file)
    } else if let Some(source) = &cli.eval {
        driver.compile_string(source)
    } else if let Some(name) = &cli.example {
        driver.compile_example(name)
    } else {
        print_usage();
        return;
    };

    match result {
        Ok(report) => report_success(&report),
        Err(e @ CliError::Story(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn report_success(report: &CompileReport) {
    match &report.written {
        Some(path) => println!(
            "Compilation completed! Output written to '{}'",
            path.display()
        ),
        None => println!(
            "Story is valid: {} scenes, {} choices",
            report.graph.len(),
            report.graph.edge_count()
        ),
    }
}

fn print_usage() {
    println!("Interactive Story Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  storyc --file <FILE>        Compile a story file");
    println!("  storyc --eval <SOURCE>      Compile inline story source");
    println!("  storyc --example <NAME>     Compile a bundled sample story");
    println!("  storyc --list-examples      List bundled sample stories");
    println!("  storyc --guide              Show how to write a story");
    println!();
    println!("Run 'storyc --help' for more options.");
}
