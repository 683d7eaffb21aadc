use clap::{Parser, ValueEnum};
use log::info;
use segclip::clip::{Clipper, CohenSutherland, Midpoint, MidpointConfig};
use segclip::formats::Report;
use segclip::measurements::MeasuredClipper;
use segclip::{run, Algorithm, ClipError, ClipResult, Config, Segment, Window};

#[derive(ValueEnum, Debug, Copy, Clone, Default)]
pub enum Format {
    #[default]
    Text,

    Json,

    #[cfg(feature = "message-pack")]
    MessagePack,
}
impl Format {
    pub fn write(&self, mut writer: impl std::io::Write, report: &Report) -> Result<(), String> {
        match self {
            Format::Text => writeln!(writer, "{report}").map_err(|error| error.to_string()),
            Format::Json => {
                serde_json::to_writer(writer, report).map_err(|error| error.to_string())
            }
            #[cfg(feature = "message-pack")]
            Format::MessagePack => {
                rmp_serde::encode::write(&mut writer, report).map_err(|error| error.to_string())
            }
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Clip window as x_min y_min x_max y_max
    #[clap(
        long,
        num_args = 4,
        value_names = ["X_MIN", "Y_MIN", "X_MAX", "Y_MAX"],
        allow_negative_numbers = true,
        required_unless_present = "config"
    )]
    window: Option<Vec<f64>>,

    /// Segment as x1 y1 x2 y2
    #[clap(
        long,
        num_args = 4,
        value_names = ["X1", "Y1", "X2", "Y2"],
        allow_negative_numbers = true,
        required_unless_present = "config"
    )]
    segment: Option<Vec<f64>>,

    /// Clipping algorithm
    #[clap(value_enum, short, long, default_value_t = Default::default())]
    algorithm: Algorithm,

    /// Maximum number of bisections for the midpoint algorithm
    #[clap(long, default_value_t = MidpointConfig::default().max_depth)]
    max_depth: usize,

    /// Segment length at which the midpoint algorithm stops bisecting
    #[clap(long, default_value_t = MidpointConfig::default().tolerance)]
    tolerance: f64,

    /// Data format when writing to stdout
    #[clap(value_enum, short, long, default_value_t = Default::default())]
    format: Format,

    /// Json file containing the whole config, replacing the other arguments
    #[clap(long, conflicts_with_all = ["window", "segment"])]
    config: Option<String>,

    /// Print time and iterations spent clipping to stderr
    #[clap(long)]
    measure: bool,

    /// How often to clip when measuring
    #[clap(long, default_value_t = 1, requires = "measure")]
    repeat: u32,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let Args {
        window,
        segment,
        algorithm,
        max_depth,
        tolerance,
        format,
        config,
        measure,
        repeat,
    } = Args::parse();

    let config = if let Some(config) = config {
        let file = std::fs::File::open(config).map_err(|err| err.to_string())?;
        serde_json::from_reader(file).map_err(|err| err.to_string())?
    } else {
        Config {
            algorithm,
            window: parse_window(window)?,
            segment: parse_segment(segment)?,
            midpoint: MidpointConfig::new()
                .with_max_depth(max_depth)
                .with_tolerance(tolerance),
        }
    };

    let result = if measure {
        match config.algorithm {
            Algorithm::CohenSutherland => measured(CohenSutherland, &config, repeat),
            Algorithm::Midpoint => measured(Midpoint::new(config.midpoint), &config, repeat),
        }
    } else {
        run(&config)
    }
    .map_err(|err| err.to_string())?;
    info!("{} produced {:?}", config.algorithm.name(), result);

    let report = Report::new(config.algorithm, config.window, result);
    format.write(std::io::stdout(), &report)?;

    Ok(())
}

fn parse_window(bounds: Option<Vec<f64>>) -> Result<Window, String> {
    match bounds.as_deref() {
        Some(&[x_min, y_min, x_max, y_max]) => {
            Window::new(x_min, y_min, x_max, y_max).map_err(|err| err.to_string())
        }
        _ => Err("Expected the window as x_min y_min x_max y_max".to_string()),
    }
}

fn parse_segment(coords: Option<Vec<f64>>) -> Result<Segment, String> {
    match coords.as_deref() {
        Some(&[x1, y1, x2, y2]) => Ok(Segment::from_coords(x1, y1, x2, y2)),
        _ => Err("Expected the segment as x1 y1 x2 y2".to_string()),
    }
}

fn measured<C: Clipper>(clipper: C, config: &Config, repeat: u32) -> Result<ClipResult, ClipError> {
    let mut clipper = MeasuredClipper::new(clipper);
    let mut result = ClipResult::NotVisible;
    for _ in 0..repeat.max(1) {
        result = clipper.clip(config.segment, &config.window)?;
    }
    clipper.print();
    Ok(result)
}
