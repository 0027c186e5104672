use clap::{Parser, ValueEnum};
use naca_rs::airfoil::naming::Naca4Code;
use naca_rs::config::GeneratorConfig;
use naca_rs::export::{save, ExportFormat};
use naca_rs::{generate_coordinates, Result, ShapeParameters};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "naca")]
#[command(version = "0.1.0")]
#[command(about = "Generate and export NACA 4-digit airfoil coordinates", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Maximum camber as a fraction of the chord (0.02 for a 2412)
    #[arg(short = 'm', long, requires_all = ["position", "thickness"], conflicts_with = "code")]
    camber: Option<f64>,

    /// Location of maximum camber as a fraction of the chord (0.4 for a 2412)
    #[arg(short = 'p', long, requires = "camber")]
    position: Option<f64>,

    /// Thickness as a fraction of the chord (0.12 for a 2412)
    #[arg(short = 't', long, requires = "camber")]
    thickness: Option<f64>,

    /// A 4-digit designation such as 2412, used instead of the individual parameters
    #[arg(short = 'c', long)]
    code: Option<String>,

    /// Number of chordwise stations
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Directory to save the coordinates into
    #[arg(short = 'o', long)]
    out_dir: Option<PathBuf>,

    /// Output file format
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the name, don't write a file
    #[arg(long)]
    no_save: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(n) = cli.points {
        config.point_count = n;
    }
    if let Some(dir) = cli.out_dir {
        config.export.directory = dir;
    }
    if let Some(format) = cli.format {
        config.export.format = format.into();
    }

    // A designation given by the user is its own title; converting it to fractions and back
    // through the truncating label can lose a digit
    let (params, code_title) = match (&cli.code, cli.camber, cli.position, cli.thickness) {
        (Some(code), _, _, _) => {
            let code = code.parse::<Naca4Code>()?;
            (code.params(), Some(code.label()))
        }
        (None, Some(m), Some(p), Some(t)) => (ShapeParameters::new(m, p, t), None),
        _ => return Err("either --code or all of --camber, --position and --thickness are required".into()),
    };

    let coords = generate_coordinates(
        params.camber,
        params.camber_position,
        params.thickness,
        config.point_count,
    )?;

    let view = match code_title {
        Some(title) => config.plot.titled(title, &coords),
        None => config.plot.view(&params, &coords),
    };
    println!("{}", view.title);
    let clipped = view.clipped();
    if !clipped.is_empty() {
        match coords.bounds() {
            Some(((x0, x1), (y0, y1))) => eprintln!(
                "Warning: {} of {} points fall outside the plot frame, extents x [{}, {}] y [{}, {}]",
                clipped.len(),
                coords.len(),
                x0,
                x1,
                y0,
                y1
            ),
            None => eprintln!(
                "Warning: {} of {} points fall outside the plot frame, coordinates contain NaN",
                clipped.len(),
                coords.len()
            ),
        }
    }

    if !cli.no_save {
        let path = save(&coords, &config.export)?;
        println!("Coordinates saved to {}", path.display());
    }

    Ok(())
}
