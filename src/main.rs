//! quire - declarative document assembly driver

use std::process::ExitCode;

use clap::Parser;

use quire::{Node, TraceBackend, emit};

#[derive(Parser)]
#[command(name = "quire")]
#[command(version, about = "Declarative document assembly driver", long_about = None)]
#[command(after_help = "EXAMPLES:
    quire report.json               Assemble the tree, saving where it says
    quire report.json -o out.txt    Also write the rendering to out.txt
    quire report.json --trace       Print every backend call in order")]
struct Cli {
    /// Input node tree (JSON, as produced by the front-end parser)
    #[arg(value_name = "TREE")]
    input: String,

    /// Write the assembled document's rendering to this path
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Print the backend call trace after emission
    #[arg(long)]
    trace: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> quire::Result<()> {
    let json = std::fs::read_to_string(&cli.input)?;
    let tree: Node = serde_json::from_str(&json).map_err(|e| quire::Error::Tree(e.to_string()))?;

    let mut backend = TraceBackend::new();
    backend.persist_to_disk(true);
    emit(&mut backend, &tree)?;

    if cli.trace {
        for line in backend.trace() {
            println!("{line}");
        }
    }
    if let Some(output) = &cli.output
        && let Some(doc) = backend.active_document()
    {
        std::fs::write(output, backend.rendered(doc))?;
        if !cli.quiet {
            println!("wrote {output}");
        }
    }
    if !cli.quiet {
        for (path, _) in backend.saved() {
            println!("saved {}", path.display());
        }
    }
    Ok(())
}
