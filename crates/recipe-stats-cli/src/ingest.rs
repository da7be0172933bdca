use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use recipe_stats_core::{Calculator, Record};
use serde::de::{Deserializer, SeqAccess, Visitor};

use crate::Progress;

/// Counters of one ingestion run.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct IngestSummary {
    pub records: u64,
    pub parsed: u64,
    pub ignored: u64,
}

/// Stream the records of a JSON file into `calculator`.
///
/// # Errors
/// Fails when the file cannot be opened or its content is not a JSON array of
/// record objects. Records that decode but fail validation are only counted.
pub fn ingest_file<C, P>(path: &Path, calculator: &mut C, progress: &mut P) -> Result<IngestSummary>
where
    C: Calculator,
    P: Progress,
{
    let file = File::open(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    ingest_reader(BufReader::new(file), calculator, progress)
        .with_context(|| format!("failed to ingest {}", path.display()))
}

/// Decode a top-level JSON array one element at a time, validating each record
/// before it reaches `calculator`.
///
/// # Errors
/// Fails on malformed JSON, a non-array envelope, an element that is neither a
/// record object nor `null`, trailing content, or a progress writer error.
pub fn ingest_reader<R, C, P>(reader: R, calculator: &mut C, progress: &mut P) -> Result<IngestSummary>
where
    R: Read,
    C: Calculator,
    P: Progress,
{
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let summary = (&mut deserializer)
        .deserialize_seq(RecordSeqVisitor { calculator, progress })
        .context("failed to decode delivery records")?;
    deserializer.end().context("unexpected content after the delivery records")?;
    Ok(summary)
}

struct RecordSeqVisitor<'a, C, P> {
    calculator: &'a mut C,
    progress: &'a mut P,
}

impl<'de, C, P> Visitor<'de> for RecordSeqVisitor<'_, C, P>
where
    C: Calculator,
    P: Progress,
{
    type Value = IngestSummary;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON array of delivery records")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut summary = IngestSummary::default();
        while let Some(element) = seq.next_element::<Option<Record>>()? {
            summary.records += 1;
            let record = element.unwrap_or_default();
            match record.validate() {
                Ok(()) => {
                    self.calculator.calculate(&record);
                    summary.parsed += 1;
                }
                Err(err) => {
                    summary.ignored += 1;
                    tracing::debug!(index = summary.records, error = %err, "ignoring invalid record");
                }
            }
            self.progress.update(&summary).map_err(serde::de::Error::custom)?;
        }
        Ok(summary)
    }
}
