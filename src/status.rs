use std::io::Write;

use crate::error::Result;
use crate::throttle::{explain, parse_throttled};
use crate::vcgencmd::{CommandRunner, CLOCK_SOURCES, VOLT_SOURCES};

/// Prints the firmware status report, one section per query kind.
pub struct Reporter<R, W> {
    runner: R,
    out: W,
}

impl<R: CommandRunner, W: Write> Reporter<R, W> {
    pub fn new(runner: R, out: W) -> Self {
        Self { runner, out }
    }

    /// Runs every section in order. The first failure stops the report.
    pub fn run(&mut self) -> Result<()> {
        self.measure_clock()?;
        self.measure_volts()?;
        self.measure_temp()?;
        self.get_throttled()
    }

    pub fn measure_clock(&mut self) -> Result<()> {
        self.per_source("measure_clock", CLOCK_SOURCES)
    }

    pub fn measure_volts(&mut self) -> Result<()> {
        self.per_source("measure_volts", VOLT_SOURCES)
    }

    pub fn measure_temp(&mut self) -> Result<()> {
        self.header("measure_temp")?;
        let temp = self.runner.run(&["measure_temp"])?;
        self.reading("core", &temp)?;
        self.footer()
    }

    pub fn get_throttled(&mut self) -> Result<()> {
        self.header("get_throttled")?;
        let line = self.runner.run(&["get_throttled"])?;
        let throttled = parse_throttled(&line)?;
        writeln!(self.out, "throttled = {:#x}", throttled)?;
        for (flag, description) in explain(throttled) {
            self.reading(&format!("{:#x}", flag), description)?;
        }
        self.footer()
    }

    fn per_source(&mut self, query: &str, sources: &[&str]) -> Result<()> {
        self.header(query)?;
        for &src in sources {
            let value = self.runner.run(&[query, src])?;
            self.reading(src, &value)?;
        }
        self.footer()
    }

    fn header(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "=== {} ===", name)?;
        Ok(())
    }

    fn reading(&mut self, label: &str, text: &str) -> Result<()> {
        writeln!(self.out, "{}\t {}", label, text)?;
        Ok(())
    }

    fn footer(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W) {
        (self.runner, self.out)
    }
}
