//! Convert command: apply one temperature conversion to a list of values.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::ConvertArgs;

/// Print one converted value per line, in input order.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert", conversion = %args.conversion).entered();
    let converted = args.conversion.convert_all(&args.values);
    debug!(n = converted.len(), "values converted");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_values(&mut out, &converted).context("failed to write converted values")
}

fn write_values(out: &mut impl Write, values: &[f64]) -> io::Result<()> {
    for v in values {
        writeln!(out, "{v}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_thermo::Conversion;

    #[test]
    fn writes_one_value_per_line() {
        let values = Conversion::FahrToKelvin.convert_all(&[212.0, 32.0]);
        let mut buf = Vec::new();
        write_values(&mut buf, &values).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "373.15\n273.15\n");
    }

    #[test]
    fn non_physical_values_pass_through() {
        let values = Conversion::CelsiusToKelvin.convert_all(&[-373.15]);
        let mut buf = Vec::new();
        write_values(&mut buf, &values).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("-100"));
    }
}
