use crate::core::error::InfoError;
use serde::Serialize;
use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Where diagnostic dumps go.
#[derive(Debug, Clone)]
pub enum DumpSink {
    /// Interleave dump lines into the log stream at debug level.
    Log,
    /// Append dump lines to a dedicated file. The handle is opened per write
    /// and released immediately, never held across the pipeline.
    File(PathBuf),
}

impl DumpSink {
    fn write_line(&self, line: &str) -> Result<(), InfoError> {
        match self {
            DumpSink::Log => debug!("{line}"),
            DumpSink::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Explicit dump configuration handed to decode/filter instead of ambient
/// global flags.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub structured: bool,
    pub json: bool,
    pub sink: DumpSink,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            structured: true,
            json: true,
            sink: DumpSink::Log,
        }
    }
}

impl DumpOptions {
    /// Emits up to two lines for a pipeline stage: the Debug representation
    /// and the JSON serialization of `value`.
    pub fn emit<T>(&self, stage: &str, value: &T) -> Result<(), InfoError>
    where
        T: Debug + Serialize,
    {
        if self.structured {
            self.sink
                .write_line(&format!("STRUCT DATA {stage} DUMP: {value:?}"))?;
        }
        if self.json {
            self.sink.write_line(&format!(
                "JSON DATA {stage} DUMP: {}",
                serde_json::to_string(value)?
            ))?;
        }
        Ok(())
    }
}
