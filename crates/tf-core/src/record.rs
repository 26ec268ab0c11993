//! Persisted tip records
//!
//! A record is a flat JSON object:
//!
//! ```text
//! {
//!     "Tip 1": [3, 11, 19, 24, 38, 41],
//!     "Tip 2": [...],
//!     "timestamp": "2026-10-16 18:04:51"
//! }
//! ```
//!
//! Each export replaces the previous record wholesale.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TipError, TipResult};
use crate::tip::{Batch, Tip, tip_label};
use crate::variant::Variant;

/// Format of the `timestamp` field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_KEY: &str = "timestamp";
const LABEL_PREFIX: &str = "Tip ";

/// One exported batch plus the time it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipRecord {
    variant: Variant,
    tips: Vec<Tip>,
    timestamp: String,
}

impl TipRecord {
    /// Stamp a batch with the current local time
    pub fn from_batch(batch: &Batch) -> Self {
        Self::with_timestamp(batch, Local::now().naive_local())
    }

    /// Stamp a batch with a given time
    pub fn with_timestamp(batch: &Batch, at: NaiveDateTime) -> Self {
        Self {
            variant: batch.variant(),
            tips: batch.tips().to_vec(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Variant of the stored tips (inferred from tip length when loaded)
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Timestamp as a date-time value
    pub fn generated_at(&self) -> TipResult<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Labels and tips in record order
    pub fn labeled(&self) -> impl Iterator<Item = (String, &Tip)> {
        self.tips.iter().enumerate().map(|(i, t)| (tip_label(i), t))
    }

    /// Rebuild the batch the record was written from
    pub fn to_batch(&self) -> TipResult<Batch> {
        Batch::new(self.variant, self.tips.clone())
    }

    /// Pretty JSON with 4-space indentation
    pub fn to_json_pretty(&self) -> TipResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| TipError::InvalidRecord(e.to_string()))
    }

    pub fn from_json(text: &str) -> TipResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the record, replacing whatever is at `path`.
    ///
    /// The JSON goes to a sibling temp file that is then renamed over the
    /// target, so readers never see a half-written record.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TipResult<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        let temp_path = temp_path_for(path);

        let written = fs::write(&temp_path, json.as_bytes())
            .and_then(|_| fs::rename(&temp_path, path));
        if let Err(e) = written {
            if temp_path.is_file() {
                let _ = fs::remove_file(&temp_path);
            }
            return Err(e.into());
        }

        info!("Wrote {} tips to {}", self.tips.len(), path.display());
        Ok(())
    }

    /// Read a record written by [`TipRecord::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> TipResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let record = Self::from_json(&text)?;
        debug!(
            "Loaded {} {} tips from {}",
            record.tips.len(),
            record.variant,
            path.display()
        );
        Ok(record)
    }

    /// Console rendering: heading, then one `key: value` line per entry
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tips.len() + 2);
        lines.push(format!("Here come the {} tips:", self.variant));
        for (label, tip) in self.labeled() {
            lines.push(format!("{}: {}", label, tip));
        }
        lines.push(format!("{}: {}", TIMESTAMP_KEY, self.timestamp));
        lines
    }
}

/// Stamp `batch` with the current time and write it to `path`
pub fn export_batch<P: AsRef<Path>>(batch: &Batch, path: P) -> TipResult<TipRecord> {
    if batch.is_empty() {
        return Err(TipError::InvalidRecord("refusing to export an empty batch".into()));
    }
    let record = TipRecord::from_batch(batch);
    record.save(path)?;
    Ok(record)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn parse_timestamp(s: &str) -> TipResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| TipError::InvalidRecord(format!("bad timestamp '{}': {}", s, e)))
}

/// Position encoded in a "Tip N" label (1-based)
fn label_index(key: &str) -> Option<usize> {
    let n: usize = key.strip_prefix(LABEL_PREFIX)?.parse().ok()?;
    (n >= 1 && key == tip_label(n - 1)).then_some(n)
}

impl Serialize for TipRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tips.len() + 1))?;
        for (label, tip) in self.labeled() {
            map.serialize_entry(&label, tip)?;
        }
        map.serialize_entry(TIMESTAMP_KEY, &self.timestamp)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TipRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = TipRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of \"Tip N\" entries and a timestamp")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TipRecord, A::Error> {
        let mut timestamp: Option<String> = None;
        let mut entries: Vec<(usize, Vec<u8>)> = Vec::new();

        while let Some(key) = access.next_key::<String>()? {
            if key == TIMESTAMP_KEY {
                if timestamp.is_some() {
                    return Err(de::Error::duplicate_field(TIMESTAMP_KEY));
                }
                timestamp = Some(access.next_value()?);
            } else if let Some(n) = label_index(&key) {
                if entries.iter().any(|(m, _)| *m == n) {
                    return Err(de::Error::custom(format!("duplicate entry '{}'", key)));
                }
                entries.push((n, access.next_value()?));
            } else {
                return Err(de::Error::custom(format!("unexpected key '{}'", key)));
            }
        }

        let timestamp = timestamp
            .ok_or_else(|| <A::Error as de::Error>::missing_field(TIMESTAMP_KEY))?;
        parse_timestamp(&timestamp).map_err(<A::Error as de::Error>::custom)?;

        if entries.is_empty() {
            return Err(de::Error::custom("record holds no tips"));
        }
        entries.sort_by_key(|(n, _)| *n);
        if let Some(pos) = entries.iter().enumerate().position(|(i, (n, _))| *n != i + 1) {
            return Err(de::Error::custom(format!("missing entry '{}'", tip_label(pos))));
        }

        let variant = Variant::infer_from_len(entries[0].1.len());
        let tips = entries
            .into_iter()
            .map(|(_, numbers)| Tip::new(variant, numbers))
            .collect::<TipResult<Vec<_>>>()
            .map_err(<A::Error as de::Error>::custom)?;

        Ok(TipRecord {
            variant,
            tips,
            timestamp,
        })
    }
}
