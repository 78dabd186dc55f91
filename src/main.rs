use domtree::{build, BuiltNode, Content, MemoryDocument};
use std::fs;
use tracing::{info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct Args {
    pub input: String,
    pub trace: bool,
}

fn main() {
    let args = parse_args().expect("Could not parse arguments");
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::DEBUG)
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .init();
        info!("Logger initialized");
    }

    render_from_file(args.input.as_str());
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let args = Args {
        input: pargs.free_from_str()?,
        trace: pargs.contains(["--trace", "-t"]),
    };
    Ok(args)
}

/// Read a JSON element description from `path`, build it into a fresh
/// in-memory document and print the resulting HTML on stdout.
fn render_from_file(path: &str) {
    let data = fs::read_to_string(path).expect("Could not read input file");
    let description: Content =
        serde_json::from_str(&data).expect("Could not parse description JSON");

    let span = span!(Level::DEBUG, "Building tree", "{}", path);
    let _enter = span.enter();
    let mut doc = MemoryDocument::new();
    let built = build(&mut doc, &description).expect("Could not build element tree");
    drop(_enter);

    match built {
        BuiltNode::Element(root) => {
            println!("{}", doc.render(root).expect("Could not render document"))
        }
        // A bare string description passes through untouched.
        BuiltNode::Text(text) => println!("{text}"),
    }
}
