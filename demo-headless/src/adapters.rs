//! Headless render adapters: console progress and CSV frame dump.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};
use windvort_core::{Frame, Overview, RenderAdapter};

/// Prints the overview once and a progress row every `interval` frames
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    interval: u64,
    failed: bool,
}

impl ConsoleReporter {
    /// Report to stdout
    pub fn new(interval: u64) -> Self {
        Self::with_writer(io::stdout(), interval)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Report to `out`; an interval of 0 is treated as 1
    pub fn with_writer(out: W, interval: u64) -> Self {
        Self {
            out,
            interval: interval.max(1),
            failed: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!(error = %e, "console output failed; suppressing further rows");
            self.failed = true;
        }
    }
}

impl<W: Write> RenderAdapter for ConsoleReporter<W> {
    fn setup(&mut self, overview: &Overview) {
        let [lon_min, lon_max, lat_min, lat_max] = overview.domain.extent();
        let wind = overview.mean_wind();
        let color = overview.report.color();

        self.emit(format_args!("=== {} ===", overview.region));
        self.emit(format_args!(
            "Centre: {:.3}°E {:.3}°N, extent [{lon_min:.2}, {lon_max:.2}] × [{lat_min:.2}, {lat_max:.2}]",
            overview.center.lon, overview.center.lat
        ));
        self.emit(format_args!(
            "Mean wind: u = {:.2} m/s, v = {:.2} m/s ({:.2} m/s), tint {:.2}",
            wind.x,
            wind.y,
            wind.norm(),
            overview.tint
        ));
        self.emit(format_args!("Marker: {} {:?}\n", color, color.rgb()));
        self.emit(format_args!("{}\n", overview.report_line()));
        self.emit(format_args!("  Frame | Mean lon | Mean lat"));
        self.emit(format_args!("--------|----------|---------"));
    }

    fn frame(&mut self, frame: &Frame<'_>) {
        if frame.index % self.interval != 0 {
            return;
        }
        let n = frame.positions.len() as f64;
        let (lon, lat) = frame
            .positions
            .iter()
            .fold((0.0, 0.0), |(lon, lat), p| (lon + p.x, lat + p.y));
        self.emit(format_args!(
            "{:7} | {:8.3} | {:8.3}",
            frame.index,
            lon / n,
            lat / n
        ));
    }

    fn finish(&mut self) {
        self.emit(format_args!("\n=== Animation Complete ==="));
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "console flush failed");
        }
    }
}

/// Writes `frame,particle,lon,lat` rows
///
/// Write errors cannot surface through [`RenderAdapter`], so the first one is
/// kept, later frames are skipped, and [`CsvWriter::close`] reports it.
pub struct CsvWriter<W: Write> {
    out: W,
    rows: u64,
    error: Option<io::Error>,
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) `path` for writing
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: 0,
            error: None,
        }
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            warn!(error = %e, "CSV write failed; skipping remaining frames");
            self.error = Some(e);
        }
    }

    /// Flush and return the writer plus the number of data rows written.
    pub fn close(mut self) -> io::Result<(W, u64)> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok((self.out, self.rows))
    }
}

impl<W: Write> RenderAdapter for CsvWriter<W> {
    fn setup(&mut self, _overview: &Overview) {
        let result = writeln!(self.out, "frame,particle,lon,lat");
        self.record(result);
    }

    fn frame(&mut self, frame: &Frame<'_>) {
        if self.error.is_some() {
            return;
        }
        for (i, p) in frame.positions.iter().enumerate() {
            if let Err(e) = writeln!(self.out, "{},{i},{},{}", frame.index, p.x, p.y) {
                self.record(Err(e));
                return;
            }
            self.rows += 1;
        }
    }

    fn finish(&mut self) {
        match &self.error {
            Some(e) => warn!(
                rows = self.rows,
                error = %e,
                "CSV output incomplete"
            ),
            None => info!(rows = self.rows, "CSV frames written"),
        }
    }
}

/// Fans every call out to several adapters in order
pub struct Tee<'a> {
    adapters: Vec<&'a mut dyn RenderAdapter>,
}

impl<'a> Tee<'a> {
    pub fn new(adapters: Vec<&'a mut dyn RenderAdapter>) -> Self {
        Self { adapters }
    }
}

impl RenderAdapter for Tee<'_> {
    fn setup(&mut self, overview: &Overview) {
        for adapter in &mut self.adapters {
            adapter.setup(overview);
        }
    }

    fn frame(&mut self, frame: &Frame<'_>) {
        for adapter in &mut self.adapters {
            adapter.frame(frame);
        }
    }

    fn finish(&mut self) {
        for adapter in &mut self.adapters {
            adapter.finish();
        }
    }
}
