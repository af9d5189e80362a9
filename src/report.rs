use crate::config::Format;
use crate::runner::{self, Summary};
use std::io::{self, Write};
use std::time::Duration;

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

pub fn write<W: Write>(out: &mut W, summary: &Summary, format: Format) -> io::Result<()> {
    match format {
        Format::Text if summary.count == 1 => write_single(out, summary),
        Format::Text => write_repeated(out, summary),
        Format::Json => write_json(out, summary),
    }
}

/// The classic two lines: the result, then elapsed seconds.
pub fn write_single<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "fib({}) result: {}", summary.n, summary.result)?;
    writeln!(
        out,
        "fib({}) elapsed time: {:.9}",
        summary.n,
        summary.mean.as_secs_f64()
    )
}

pub fn write_repeated<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let last = summary.count.saturating_sub(1);

    for sample in summary.runs.iter().filter(|s| runner::is_sampled(s.index, last)) {
        writeln!(
            out,
            "{:>3}.\t{}\t{:.1} ms",
            sample.index,
            sample.result,
            millis(sample.elapsed)
        )?;
    }

    writeln!(
        out,
        "fib({}) over {} runs: min {:.1} ms, mean {:.1} ms, max {:.1} ms",
        summary.n,
        summary.count,
        millis(summary.min),
        millis(summary.mean),
        millis(summary.max)
    )
}

pub fn write_json<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}
