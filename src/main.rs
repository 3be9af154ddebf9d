/*!
    Program that generates a sequence of numbers spaced evenly between two bounds
    and prints each one as an integer, either raw (`lin`) or as ten raised to its power (`log`).
 ```
Usage:
   space [lin|log] <low> <high> <num>
where:
   lin|log - output transform: `lin` prints the raw spaced values, `log` prints 10 raised to each value
   low     - first raw value of the sequence (floating point)
   high    - last raw value of the sequence (floating point)
   num     - how many values to generate (integer >= 1)
```
   Please look at `README.md` for more information.
 */

#[macro_use] extern crate anyhow;

use std::env;
use std::io::{stdout, Write};
use std::str::FromStr;

use anyhow::Result;

/// Type that represents one raw (pre-transform) sequence value.
/// Basic numeric type used for step and spacing calculations.
type Value = f64;

/// Base of the exponentiation applied to raw values in `log` mode.
const LOG_BASE: Value = 10.0;

mod space_accum_v1;
mod space_index_v2;

/// Output transform selected by the first command line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the raw spaced values.
    Lin,
    /// Print `LOG_BASE` raised to the power of each raw value.
    Log,
}

impl FromStr for Mode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lin" => Ok(Mode::Lin),
            "log" => Ok(Mode::Log),
            other => bail!("Unknown mode: '{}', expected 'lin' or 'log'", other),
        }
    }
}

/// Creates concrete object used to generate the sequence.
fn spacer_factory(low: Value, high: Value, num: usize) -> Result<impl Spacer> {
    // space_accum_v1::Range::create(low, high, num)
    space_index_v2::Range::create(low, high, num)
}

/// Program main function.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect(); // TODO: use clap here
    if args.len() != 5 {
        bail!(
r#"Wrong number of command line parameters

Usage:
   {} [lin|log] <low> <high> <num>
where:
   lin|log - output transform: `lin` prints the raw spaced values, `log` prints 10 raised to each value
   low     - first raw value of the sequence (floating point)
   high    - last raw value of the sequence (floating point)
   num     - how many values to generate (integer >= 1)
"#, args[0]);
    }

    let mode = args[1].parse::<Mode>()?;
    let low = args[2].parse::<Value>()?;
    let high = args[3].parse::<Value>()?;
    let num = usize::from_str_radix(&args[4], 10)?;

    let mut stdout = stdout();
    let mut range = spacer_factory(low, high, num)?;
    for v in range.generate_mode(mode)? {
        stdout.write_all(format!("{}", v).as_bytes())?;
        stdout.write(&[b'\n'])?;
    }
    Ok(())
}

/// Functions required to generate the spaced sequence.
pub trait Spacer {
    /// Produces the full sequence: every raw value is passed thru `transform`
    /// and then truncated toward zero to an integer.
    fn generate(&mut self, transform: impl Fn(Value) -> Value) -> Result<&[i64]>;

    /// Default implementation dispatching the two transforms selectable on the command line.
    fn generate_mode(&mut self, mode: Mode) -> Result<&[i64]> {
        match mode {
            Mode::Lin => self.generate(|v| v),
            Mode::Log => self.generate(|v| LOG_BASE.powf(v)),
        }
    }
}
