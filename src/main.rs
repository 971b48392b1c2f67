use clap::{Parser, Subcommand};
use log::debug;
use std::io;
use xlscell::error::{Error, Result};
use xlscell::writer::{self, CsvConfig, OutputFormat};
use xlscell::{
    classify, excel_serial_to_timestamp, render_number, CompiledFormat, DateSystem, Rk,
};

#[derive(Parser, Debug)]
#[command(name = "xlscell")]
#[command(version, about = "Render Excel RK values and custom date formats as text")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv, global = true)]
    pub format: OutputFormat,

    /// Interpret serial numbers in the 1904 date system
    #[arg(long, global = true)]
    pub date1904: bool,

    /// Print detailed progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode RK values (decimal or 0x-prefixed hex)
    Rk {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Classify number format patterns as date, time, datetime or number
    Classify {
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Render serial numbers through a format pattern
    Format {
        pattern: String,
        #[arg(required = true, allow_negative_numbers = true)]
        serials: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let config = CsvConfig {
        format: args.format,
        empty_value: String::new(),
    };
    let date_system = if args.date1904 {
        DateSystem::Date1904
    } else {
        DateSystem::Date1900
    };

    let rows = match &args.command {
        Command::Rk { values } => values
            .iter()
            .map(|value| rk_row(value))
            .collect::<Result<Vec<_>>>()?,
        Command::Classify { patterns } => patterns
            .iter()
            .map(|pattern| {
                let class = classify(pattern)
                    .map_or_else(|| "number".to_string(), |kind| kind.to_string());
                vec![pattern.clone(), class]
            })
            .collect(),
        Command::Format { pattern, serials } => format_rows(pattern, serials, date_system)?,
    };

    debug!("writing {} rows ({:?})", rows.len(), date_system);
    let stdout = io::stdout();
    writer::write_rows(rows, stdout.lock(), &config)
}

fn parse_rk(text: &str) -> Result<Rk> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed
        .map(Rk)
        .map_err(|e| Error::InvalidRk(format!("{} ({})", text, e)))
}

fn rk_row(text: &str) -> Result<Vec<String>> {
    let number = parse_rk(text)?.decode();
    let kind = if number.is_float() { "float" } else { "integer" };
    debug!("{} decodes to {:?}", text, number);
    Ok(vec![text.to_string(), kind.to_string(), number.to_string()])
}

fn format_rows(
    pattern: &str,
    serials: &[String],
    date_system: DateSystem,
) -> Result<Vec<Vec<String>>> {
    let compiled = match classify(pattern) {
        Some(kind) => {
            debug!("pattern {:?} is {}", pattern, kind);
            Some(CompiledFormat::parse(pattern))
        }
        None => {
            debug!("pattern {:?} is not temporal, rendering numbers", pattern);
            None
        }
    };

    serials
        .iter()
        .map(|text| {
            let serial: f64 = text
                .parse()
                .map_err(|e| Error::InvalidSerial(format!("{} ({})", text, e)))?;
            let rendered = compiled
                .as_ref()
                .and_then(|format| {
                    excel_serial_to_timestamp(serial, date_system).map(|at| format.render(&at))
                })
                .unwrap_or_else(|| render_number(serial));
            Ok(vec![text.clone(), rendered])
        })
        .collect()
}
