//! Output formatting: fixed-point values, one per line.

use std::io::Write;

use crate::error::Result;

/// The single line printed when the sheet contains a circular dependency.
pub const CIRCULAR_DEPENDENCY_MSG: &str = "Error: Circular dependency!";

/// Write one value per line with exactly five digits after the decimal point.
pub fn write_values<W: Write>(mut out: W, values: &[f64]) -> Result<()> {
    for value in values {
        writeln!(out, "{:.5}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(values: &[f64]) -> String {
        let mut out = Vec::new();
        write_values(&mut out, values).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_five_decimal_places() {
        assert_eq!(render(&[8.0, 3.0]), "8.00000\n3.00000\n");
        assert_eq!(render(&[20.0 / 3.0 + 2.0]), "8.66667\n");
    }

    #[test]
    fn test_negative_and_zero_values() {
        assert_eq!(render(&[-1.5, 0.0]), "-1.50000\n0.00000\n");
    }
}
