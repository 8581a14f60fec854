use std::{fmt::Display, io};

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use log::debug;
use my_math_lib::math::Complex;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    Add(AddCommand),
    Show(ShowCommand),
}

#[derive(clap::Args, Debug)]
struct OutputOptions {
    /// Treat components as 64-bit floats instead of integers
    #[arg(long)]
    float: bool,
    /// Print json instead of `a + bi`. NaN and infinite floats are written as `null`
    #[arg(long)]
    json: bool,
}

/// Adds two complex numbers given as four components
#[derive(Parser, Debug)]
struct AddCommand {
    #[arg(allow_negative_numbers = true)]
    lhs_real: String,
    #[arg(allow_negative_numbers = true)]
    lhs_imag: String,
    #[arg(allow_negative_numbers = true)]
    rhs_real: String,
    #[arg(allow_negative_numbers = true)]
    rhs_imag: String,
    #[command(flatten)]
    output: OutputOptions,
}

/// Prints a single complex number
#[derive(Parser, Debug)]
struct ShowCommand {
    #[arg(allow_negative_numbers = true)]
    real: String,
    #[arg(allow_negative_numbers = true)]
    imag: String,
    #[command(flatten)]
    output: OutputOptions,
}

fn parse_component<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid {}: {:?}", name, value))
}

fn parse_complex<T>(real: &str, imag: &str) -> Result<Complex<T>>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(Complex::new(
        parse_component("real part", real)?,
        parse_component("imaginary part", imag)?,
    ))
}

/// Integer addition refuses to overflow instead of panicking.
fn add_integers(lhs: Complex<i64>, rhs: Complex<i64>) -> Result<Complex<i64>> {
    let real = lhs.real().checked_add(*rhs.real());
    let imag = lhs.imag().checked_add(*rhs.imag());
    match (real, imag) {
        (Some(_), Some(_)) => Ok(lhs + rhs),
        _ => Err(anyhow!("integer overflow while adding {} and {}", lhs, rhs)),
    }
}

fn print<T, W>(out: &mut W, value: &Complex<T>, json: bool) -> Result<()>
where
    T: Display + Serialize,
    W: io::Write,
{
    if json {
        serde_json::to_writer(&mut *out, value).context("failed to serialize result")?;
    } else {
        value.write_to(out).context("failed to write result")?;
    }
    writeln!(out).context("failed to write result")?;
    Ok(())
}

fn run<W: io::Write>(args: Args, out: &mut W) -> Result<()> {
    match args {
        Args::Add(command) => {
            let json = command.output.json;
            if command.output.float {
                let lhs: Complex<f64> = parse_complex(&command.lhs_real, &command.lhs_imag)?;
                let rhs: Complex<f64> = parse_complex(&command.rhs_real, &command.rhs_imag)?;
                debug!("add {:?} {:?}", lhs, rhs);
                print(out, &(lhs + rhs), json)
            } else {
                let lhs: Complex<i64> = parse_complex(&command.lhs_real, &command.lhs_imag)?;
                let rhs: Complex<i64> = parse_complex(&command.rhs_real, &command.rhs_imag)?;
                debug!("add {:?} {:?}", lhs, rhs);
                print(out, &add_integers(lhs, rhs)?, json)
            }
        }
        Args::Show(command) => {
            let json = command.output.json;
            if command.output.float {
                let value: Complex<f64> = parse_complex(&command.real, &command.imag)?;
                debug!("show {:?}", value);
                print(out, &value, json)
            } else {
                let value: Complex<i64> = parse_complex(&command.real, &command.imag)?;
                debug!("show {:?}", value);
                print(out, &value, json)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args);
    run(args, &mut io::stdout().lock())
}
