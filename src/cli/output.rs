//! Report output for the CLI.

use std::io::{self, Write};

use crate::error::Result;
use crate::report::Report;

/// Write a rendered report to any writer.
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    write!(writer, "{report}")?;
    writer.flush()?;
    Ok(())
}

/// Print a report to standard output.
pub fn print_report(report: &Report) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(report, &mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportBuilder;

    #[test]
    fn test_write_report() {
        let report = ReportBuilder::new()
            .line("Analysis completed successfully!")
            .build();
        let mut buf = Vec::new();

        write_report(&report, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Analysis completed successfully!\n"
        );
    }
}
