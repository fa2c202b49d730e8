use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

const TAGS: [&str; 4] = ["\"++foo\"", "\"--foo\"", "\"++bar\"", "\"--bar\""];
const ROWS: i64 = 50;

/// Minimal deterministic PRNG (64-bit LCG), good enough for jitter.
struct Lcg(u64);

impl Lcg {
    fn next_in(&mut self, span: i64) -> i64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % span as u64) as i64
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data.csv"));

    // Tags carry literal quotes; the writer must not add its own.
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record(["abs", "rel", "del", "tag"])?;

    let mut rng = Lcg(42);
    let mut prev_rel = 0;
    for abs in 0..ROWS {
        let rel = abs * 2 + rng.next_in(11) - 5;
        let del = rel - prev_rel;
        prev_rel = rel;
        let tag = TAGS[(abs as usize) % TAGS.len()];

        writer.write_record([abs.to_string(), rel.to_string(), del.to_string(), tag.to_string()])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} rows to {}", output_path.display());
    Ok(())
}
