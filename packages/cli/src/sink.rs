//! Map sink for the command line.
//!
//! Layer updates are buffered, keeping only the latest collection per
//! layer, and written out on [`ExportSink::flush`] as `GeoJSON` files (or
//! JSON lines on stdout). Sub-layer visibility is tracked in memory.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

use geojson::FeatureCollection;
use resolve_map_filter::{MapSink, SinkError};
use resolve_map_survey_models::LayerId;

/// Buffers layer updates and exports them on flush.
#[derive(Debug, Default)]
pub struct ExportSink {
    out_dir: Option<PathBuf>,
    pending: BTreeMap<LayerId, FeatureCollection>,
    visible: BTreeSet<String>,
}

impl ExportSink {
    /// Creates a sink writing into `out_dir`, or stdout for `None`.
    #[must_use]
    pub fn new(out_dir: Option<PathBuf>) -> Self {
        Self {
            out_dir,
            ..Self::default()
        }
    }

    /// Sub-layers currently shown.
    #[must_use]
    pub const fn visible(&self) -> &BTreeSet<String> {
        &self.visible
    }

    /// Writes the latest collection of every updated layer and returns the
    /// files written (empty when writing to stdout).
    ///
    /// # Errors
    ///
    /// * If a file cannot be written
    /// * If a collection cannot be serialized
    pub fn flush(&mut self) -> Result<Vec<PathBuf>, SinkError> {
        let pending = std::mem::take(&mut self.pending);

        let Some(dir) = &self.out_dir else {
            let mut stdout = std::io::stdout().lock();
            for data in pending.values() {
                serde_json::to_writer(&mut stdout, data)?;
                writeln!(stdout)?;
            }
            return Ok(Vec::new());
        };

        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(pending.len());
        for (layer, data) in &pending {
            let path = dir.join(format!("{layer}.geojson"));
            std::fs::write(&path, serde_json::to_vec(data)?)?;
            log::info!("Wrote {} features to {}", data.features.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }
}

impl MapSink for ExportSink {
    fn set_data(&mut self, layer: LayerId, data: &FeatureCollection) -> Result<(), SinkError> {
        self.pending.insert(layer, data.clone());
        Ok(())
    }

    fn set_visibility(&mut self, sub_layer: &str, visible: bool) -> Result<(), SinkError> {
        if visible {
            self.visible.insert(sub_layer.to_string());
        } else {
            self.visible.remove(sub_layer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(count: usize) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: (0..count)
                .map(|_| geojson::Feature {
                    bbox: None,
                    geometry: None,
                    id: None,
                    properties: None,
                    foreign_members: None,
                })
                .collect(),
            foreign_members: None,
        }
    }

    #[test]
    fn flush_writes_latest_collection_per_layer() {
        let dir = std::env::temp_dir().join(format!("resolve_map_sink_{}", std::process::id()));
        let mut sink = ExportSink::new(Some(dir.clone()));

        sink.set_data(LayerId::WaterPoints, &collection(3)).unwrap();
        sink.set_data(LayerId::WaterPoints, &collection(1)).unwrap();
        let written = sink.flush().unwrap();

        assert_eq!(written, vec![dir.join("water-points.geojson")]);
        let text = std::fs::read_to_string(&written[0]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["features"].as_array().map(Vec::len), Some(1));
        assert!(sink.flush().unwrap().is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn tracks_sub_layer_visibility() {
        let mut sink = ExportSink::new(None);
        for id in LayerId::FirePoints.sub_layer_ids() {
            sink.set_visibility(&id, true).unwrap();
        }
        sink.set_visibility("fire-points-bubble", false).unwrap();

        assert_eq!(sink.visible().len(), 6);
        assert!(!sink.visible().contains("fire-points-bubble"));
    }
}
