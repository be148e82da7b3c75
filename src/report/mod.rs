use std::io::{self, Write};
use std::time::Duration;

use crate::metrics::Scaling;
use crate::partition::Range;
use crate::system::CoreCounts;

/// Writes the benchmark report, one section at a time, as results become available.
///
/// Sections must be written in call order: [`header`](Self::header),
/// [`sequential`](Self::sequential), [`cores`](Self::cores),
/// [`parallel`](Self::parallel), [`scaling`](Self::scaling).
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self, range: Range) -> io::Result<()> {
        writeln!(self.out, "CPU Speed Test")?;
        writeln!(self.out, "Testing range: {range}")?;
        self.out.flush()
    }

    pub fn sequential(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Single-thread time: {:.2} seconds",
            elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }

    pub fn cores(&mut self, counts: CoreCounts) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Number of physical cores: {}", counts.physical)?;
        writeln!(
            self.out,
            "Number of logical cores (threads): {}",
            counts.logical
        )?;
        self.out.flush()
    }

    pub fn parallel(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Multi-thread time: {:.2} seconds",
            elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }

    /// `None` means the speedup could not be computed.
    pub fn scaling(&mut self, scaling: Option<Scaling>) -> io::Result<()> {
        writeln!(self.out)?;
        match scaling {
            Some(s) => {
                writeln!(self.out, "Speedup: {:.2}x", s.speedup)?;
                writeln!(self.out, "Efficiency: {:.2}", s.efficiency)?;
            }
            None => {
                writeln!(self.out, "Speedup: undefined")?;
                writeln!(self.out, "Efficiency: undefined")?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
