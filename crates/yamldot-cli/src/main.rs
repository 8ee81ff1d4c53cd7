use std::path::{Path, PathBuf};
use std::str::FromStr;

use yamldot::{AttrMap, RankDir, RenderOptions, loader, render};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Load(yamldot::Error),
    Json(serde_json::Error),
    OutputWouldOverwriteInput(PathBuf),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Load(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::OutputWouldOverwriteInput(path) => write!(
                f,
                "refusing to overwrite the input file {}; pass --out to choose an output path",
                path.display()
            ),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<yamldot::Error> for CliError {
    fn from(value: yamldot::Error) -> Self {
        Self::Load(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Dot,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    rankdir: RankDir,
    format: OutputFormat,
    shape: Option<String>,
    round_robin: bool,
    multi_view: bool,
    attrs: AttrMap,
}

fn usage() -> &'static str {
    "yamldot\n\
\n\
USAGE:\n\
  yamldot [--rankdir LR|TB] [--format dot|json] [--shape NAME]\n\
          [--round-robin] [--multi-view] [--attr KEY=VALUE ...]\n\
          [--out PATH|-] <input-file>\n\
\n\
NOTES:\n\
  - The input format is chosen by extension: .yaml/.yml or .json.\n\
  - --out defaults to the input path with the format's extension\n\
    (refused when that would overwrite the input); '-' streams to\n\
    stdout.\n\
  - --attr may repeat; later values win and override the shape.\n\
  - --round-robin cycles node shapes per document and is ignored\n\
    together with --multi-view.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--rankdir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.rankdir = dir
                    .parse::<RankDir>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--shape" => {
                let Some(shape) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.shape = Some(shape.clone());
            }
            "--round-robin" => args.round_robin = true,
            "--multi-view" => args.multi_view = true,
            "--attr" => {
                let Some(pair) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let Some((key, value)) = pair.split_once('=') else {
                    return Err(CliError::Usage(usage()));
                };
                args.attrs.insert(key.to_string(), value.to_string());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn default_out_path(input: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(input).with_extension(format.extension())
}

fn write_output(text: &str, out: &Path) -> Result<(), CliError> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, text)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(input) = args.input.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let documents = loader::load_path(Path::new(input))?;

    let options = RenderOptions {
        rankdir: args.rankdir,
        node_attrs: args.attrs.clone(),
        shape: args
            .shape
            .clone()
            .unwrap_or_else(|| yamldot::style::DEFAULT_SHAPE.to_string()),
        round_robin: args.round_robin,
        multi_view: args.multi_view,
    };
    let graph = render(&documents, &options);

    let text = match args.format {
        OutputFormat::Dot => yamldot::render_dot(&graph),
        OutputFormat::Json => yamldot::render_node_link_json(&graph)?,
    };

    match args.out.as_deref() {
        Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => write_output(&text, Path::new(path)),
        None => {
            let out = default_out_path(input, args.format);
            if out == Path::new(input) {
                return Err(CliError::OutputWouldOverwriteInput(out));
            }
            write_output(&text, &out)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        match err {
            CliError::Usage(msg) => {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            err => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
    }
}
