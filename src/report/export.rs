//! Timeline CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::assessment::timeline::Timeline;

/// Write the six-month timeline as CSV: one row per month with both scores
pub fn write_timeline_csv(timeline: &Timeline, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Month,Risk Score,Fitness Score")?;
    for i in 0..timeline.len() {
        writeln!(
            writer,
            "{},{:.0},{:.0}",
            timeline.labels[i], timeline.risk_scores[i], timeline.fitness_scores[i]
        )?;
    }

    writer
        .flush()
        .with_context(|| format!("could not write export file {}", path.display()))?;
    Ok(())
}
