use clap::{Parser, Subcommand, ValueEnum};
use led_backpack_common::{
    backpack::{Backpack, BlinkRate, Matrix},
    common::time::Duration,
    frame_buffer::Color,
};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

mod console_logger;
mod console_sink;
mod rpi;

#[derive(Parser)]
#[command(name = "led-backpack")]
#[command(about = "Drive an Adafruit bicolor 8x8 LED matrix backpack over I2C", long_about = None)]
struct Cli {
    /// I2C bus number
    #[arg(long, default_value_t = rpi::DEFAULT_BUS)]
    bus: u8,

    /// I2C address of the backpack, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0x70", value_parser = parse_address)]
    address: u8,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Light one pixel
    Pixel {
        row: usize,
        column: usize,
        #[arg(value_enum)]
        color: ColorArg,
    },
    /// Show text one character at a time
    Text {
        text: String,
        #[arg(long, default_value_t = 500)]
        duration_ms: u32,
        /// Scroll the text instead of flashing each character
        #[arg(long)]
        scroll: bool,
    },
    /// Turn every pixel off
    Clear,
    /// Set the brightness, 0-15
    Brightness { level: u8 },
    /// Set how the display blinks
    Blink {
        #[arg(value_enum)]
        rate: BlinkArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Off,
    Red,
    Yellow,
    Green,
}

impl From<ColorArg> for Color {
    fn from(value: ColorArg) -> Self {
        match value {
            ColorArg::Off => Color::Off,
            ColorArg::Red => Color::Red,
            ColorArg::Yellow => Color::Yellow,
            ColorArg::Green => Color::Green,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BlinkArg {
    DisplayOff,
    Off,
    TwoHz,
    OneHz,
    HalfHz,
}

impl From<BlinkArg> for BlinkRate {
    fn from(value: BlinkArg) -> Self {
        match value {
            BlinkArg::DisplayOff => BlinkRate::DisplayOff,
            BlinkArg::Off => BlinkRate::Off,
            BlinkArg::TwoHz => BlinkRate::TwoHz,
            BlinkArg::OneHz => BlinkRate::OneHz,
            BlinkArg::HalfHz => BlinkRate::HalfHz,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    console_logger::init_logger(cli.log_level.into());

    let mut matrix = rpi::create_matrix(cli.bus, cli.address);
    run(&mut matrix, cli.command);
}

fn run<M: Matrix>(matrix: &mut M, command: Command) {
    match command {
        Command::Pixel { row, column, color } => {
            matrix.set_pixel(row, column, Color::from(color));
            matrix.write_display();
        }
        Command::Text { text, duration_ms, scroll } => {
            info!("Showing {:?}", text);
            matrix.write_string(&text, Duration::millis(duration_ms), scroll);
        }
        Command::Clear => matrix.clear(true),
        Command::Brightness { level } => matrix.set_brightness(level),
        Command::Blink { rate } => matrix.set_blink_rate(rate.into()),
    }
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };

    parsed.map_err(|err| format!("invalid I2C address {:?}: {}", s, err))
}
