use anyhow::{bail, Context};
use shaperkit::{init_logging, ExportConfig, OutputMode, ProfileJob, Unit};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

const USAGE: &str = "\
Usage: shaperkit [OPTIONS] <job.json>

Converts a face-profile job into Shaper Origin SVG cut profiles.

Options:
  -o, --out <dir>          output directory (default: current directory)
  -c, --config <file>      export configuration JSON
      --units <in|cm|mm>   document unit suffix
      --spacing <n>        layout spacing between faces
      --sheet-width <n>    maximum row width before the layout wraps
      --cut-depth <n>      default cut depth for through-cuts
      --multi              write one SVG per face instead of one sheet
  -h, --help               print this help
";

#[derive(Debug, Default)]
struct Args {
    job_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    units: Option<Unit>,
    spacing: Option<f64>,
    sheet_width: Option<f64>,
    cut_depth: Option<f64>,
    multi: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str| {
            iter.next()
                .with_context(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            "-o" | "--out" => args.out_dir = Some(PathBuf::from(value_for("--out")?)),
            "-c" | "--config" => args.config_path = Some(PathBuf::from(value_for("--config")?)),
            "--units" => {
                let raw = value_for("--units")?;
                args.units = Some(Unit::from_str(&raw).map_err(anyhow::Error::msg)?);
            }
            "--spacing" => {
                args.spacing = Some(value_for("--spacing")?.parse().context("--spacing")?)
            }
            "--sheet-width" => {
                args.sheet_width =
                    Some(value_for("--sheet-width")?.parse().context("--sheet-width")?)
            }
            "--cut-depth" => {
                args.cut_depth = Some(value_for("--cut-depth")?.parse().context("--cut-depth")?)
            }
            "--multi" => args.multi = true,
            other if other.starts_with('-') => bail!("unknown option {other}\n{USAGE}"),
            path => {
                if args.job_path.is_some() {
                    bail!("only one job file may be given\n{USAGE}");
                }
                args.job_path = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = parse_args()?;
    let Some(job_path) = args.job_path else {
        bail!("no job file given\n{USAGE}");
    };

    info!(
        version = shaperkit::VERSION,
        built = shaperkit::BUILD_DATE,
        "shaperkit"
    );

    let mut config = match &args.config_path {
        Some(path) => ExportConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExportConfig::default(),
    };

    let job = ProfileJob::load_from_file(&job_path)
        .with_context(|| format!("loading job {}", job_path.display()))?;
    if let Some(job_config) = &job.config {
        config = job_config.clone();
    }

    // Command-line flags win over config file and job overrides
    if let Some(units) = args.units {
        config.units = units;
    }
    if let Some(spacing) = args.spacing {
        config.layout_spacing = spacing;
    }
    if let Some(sheet_width) = args.sheet_width {
        config.sheet_width = sheet_width;
    }
    if let Some(cut_depth) = args.cut_depth {
        config.cut_depth = cut_depth;
    }
    if args.multi {
        config.output_mode = OutputMode::MultiFile;
    }
    config.validate()?;

    let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("."));
    let written = shaperkit::write_job(&job, &config, &out_dir)
        .with_context(|| format!("exporting {}", job.title))?;

    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
