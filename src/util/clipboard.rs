//! Clipboard export of the sample table.

use crate::error::Result;
use crate::samples::SampleSeries;

/// Copy the sample table to the system clipboard as TSV.
///
/// One row per sample: the index plus the seven statistic fields, preceded
/// by a header row.
pub fn copy_samples_tsv(samples: &SampleSeries) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(samples_tsv(samples))?;
    Ok(())
}

fn samples_tsv(samples: &SampleSeries) -> String {
    let mut out = String::with_capacity(64 + samples.len() * 32);
    out.push_str("index\tmin\tmax\taverage\tmedian\tp90\tp95\tp99\n");
    for (index, r) in samples.iter() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            index, r.min, r.max, r.average, r.median, r.p90, r.p95, r.p99
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_has_header_and_one_row_per_sample() {
        let mut samples = SampleSeries::new();
        samples.add();
        samples.add();

        let tsv = samples_tsv(&samples);
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "index\tmin\tmax\taverage\tmedian\tp90\tp95\tp99");
        assert_eq!(lines[1], "0\t0\t0\t0\t0\t0\t0\t0");
        assert_eq!(lines[2], "1\t0\t0\t0\t0\t0\t0\t0");
    }

    #[test]
    fn tsv_rows_follow_index_order() {
        let samples = SampleSeries::with_p95(&[1.5, 2.5]);
        let tsv = samples_tsv(&samples);

        let rows: Vec<&str> = tsv.lines().skip(1).collect();
        assert!(rows[0].starts_with("0\t"));
        assert!(rows[1].starts_with("1\t"));
        assert!(rows[0].ends_with("\t1.5\t0"));
        assert!(rows[1].ends_with("\t2.5\t0"));
    }
}
