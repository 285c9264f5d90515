//! In-memory bilingual feature store.
//!
//! Populated once at startup (one merged collection per canonical theme,
//! plus the flat collections of the legacy layers) and read-only
//! afterwards. Filtering always works on borrowed slices of this store.

use std::collections::BTreeMap;

use crate::{LayerId, SurveyFeature, Theme};

/// Which collection a layer resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Merged canonical bilingual theme data.
    Canonical(Theme),
    /// Originally loaded flat data for a layer.
    Legacy(LayerId),
}

/// Features backing one layer.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLayer<'a> {
    /// Where the features came from.
    pub source: DataSource,
    /// The full, unfiltered feature list.
    pub features: &'a [SurveyFeature],
}

/// Holds every loaded feature collection.
#[derive(Debug, Default)]
pub struct FeatureStore {
    themes: BTreeMap<Theme, Vec<SurveyFeature>>,
    legacy: BTreeMap<LayerId, Vec<SurveyFeature>>,
}

impl FeatureStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the merged canonical collection of `theme`.
    pub fn insert_theme(&mut self, theme: Theme, features: Vec<SurveyFeature>) {
        log::debug!("Storing {} features for theme {theme}", features.len());
        self.themes.insert(theme, features);
    }

    /// Stores the flat collection originally loaded for `layer`.
    pub fn insert_legacy(&mut self, layer: LayerId, features: Vec<SurveyFeature>) {
        log::debug!("Storing {} legacy features for {layer}", features.len());
        self.legacy.insert(layer, features);
    }

    /// Resolves the features backing `layer`.
    ///
    /// Canonical theme data wins when the layer has a theme and that theme
    /// was loaded; otherwise the legacy collection for the layer is used.
    #[must_use]
    pub fn resolve(&self, layer: LayerId) -> Option<ResolvedLayer<'_>> {
        if let Some(theme) = layer.theme() {
            if let Some(features) = self.themes.get(&theme) {
                return Some(ResolvedLayer {
                    source: DataSource::Canonical(theme),
                    features,
                });
            }
        }

        self.legacy.get(&layer).map(|features| ResolvedLayer {
            source: DataSource::Legacy(layer),
            features,
        })
    }

    /// Canonical features for `theme`, if loaded.
    #[must_use]
    pub fn theme(&self, theme: Theme) -> Option<&[SurveyFeature]> {
        self.themes.get(&theme).map(Vec::as_slice)
    }

    /// Layers that resolve to some data.
    #[must_use]
    pub fn loaded_layers(&self) -> Vec<LayerId> {
        LayerId::all()
            .iter()
            .copied()
            .filter(|layer| self.resolve(*layer).is_some())
            .collect()
    }
}
