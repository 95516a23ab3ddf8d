use anyhow::ensure;
use clap::{Parser, Subcommand};

use edit_timecode::{FrameRate, Timecode};

#[derive(Parser, Debug)]
#[command(name = "edit-cli")]
#[command(about = "Timecode arithmetic for editorial work")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add two timecodes; the result uses the left operand's frame rate
    Add {
        /// Left operand, HH:MM:SS:FF
        a: String,
        /// Right operand, HH:MM:SS:FF
        b: String,
        /// Frame rate of the left operand
        #[arg(long, default_value_t = 24)]
        fps: u32,
        /// Frame rate of the right operand (defaults to --fps)
        #[arg(long)]
        fps_b: Option<u32>,
    },
    /// Subtract the second timecode from the first
    Sub {
        /// Left operand, HH:MM:SS:FF
        a: String,
        /// Right operand, HH:MM:SS:FF
        b: String,
        /// Frame rate of the left operand
        #[arg(long, default_value_t = 24)]
        fps: u32,
        /// Frame rate of the right operand (defaults to --fps)
        #[arg(long)]
        fps_b: Option<u32>,
    },
    /// Scale a timecode by a factor
    Mul {
        /// Timecode, HH:MM:SS:FF
        a: String,
        /// Scale factor (non-negative)
        factor: f64,
        /// Frame rate of the timecode
        #[arg(long, default_value_t = 24)]
        fps: u32,
    },
    /// Rescale a timecode into another frame rate
    Convert {
        /// Timecode, HH:MM:SS:FF
        a: String,
        /// Frame rate of the timecode
        #[arg(long, default_value_t = 24)]
        fps: u32,
        /// Target frame rate
        #[arg(long)]
        to: u32,
    },
    /// Show the components and total frame count of a timecode
    Info {
        /// Timecode, HH:MM:SS:FF
        a: String,
        /// Frame rate of the timecode
        #[arg(long, default_value_t = 24)]
        fps: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Add { a, b, fps, fps_b } => {
            let (a, b) = parse_pair(&a, &b, fps, fps_b)?;
            print_result(a + b);
        }
        Command::Sub { a, b, fps, fps_b } => {
            let (a, b) = parse_pair(&a, &b, fps, fps_b)?;
            print_result(a.checked_sub(b)?);
        }
        Command::Mul { a, factor, fps } => {
            ensure!(factor >= 0.0, "scale factor must be non-negative");
            let a = Timecode::parse(&a, FrameRate::new(fps)?)?;
            print_result(a * factor);
        }
        Command::Convert { a, fps, to } => {
            let a = Timecode::parse(&a, FrameRate::new(fps)?)?;
            print_result(a.at_rate(FrameRate::new(to)?));
        }
        Command::Info { a, fps } => {
            let a = Timecode::parse(&a, FrameRate::new(fps)?)?;
            println!("timecode:     {a}");
            println!("frame rate:   {} fps", a.rate());
            println!("hours:        {}", a.hours());
            println!("minutes:      {}", a.minutes());
            println!("seconds:      {}", a.seconds());
            println!("frames:       {}", a.frames());
            println!("total frames: {}", a.total_frames());
            println!("duration:     {:.3}s", a.to_duration().as_secs_f64());
        }
    }

    Ok(())
}

fn parse_pair(
    a: &str,
    b: &str,
    fps: u32,
    fps_b: Option<u32>,
) -> anyhow::Result<(Timecode, Timecode)> {
    let rate = FrameRate::new(fps)?;
    let rate_b = match fps_b {
        Some(fps_b) => FrameRate::new(fps_b)?,
        None => rate,
    };
    let a = Timecode::parse(a, rate)?;
    let b = Timecode::parse(b, rate_b)?;
    Ok((a, b))
}

fn print_result(tc: Timecode) {
    println!("{tc} @ {} fps ({} frames)", tc.rate(), tc.total_frames());
}
