use crate::format::ArtifactFormat;
use crate::manifest::Manifest;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use shoprank_core::{Catalog, Error, Item, Result};
use shoprank_rating::{RatingOracle, SvdModel};
use shoprank_similarity::{Dictionary, LsiModel, SimilarityIndex, TfidfModel, TopicSimilarity};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CATALOG_STEM: &str = "catalog";
pub const DICTIONARY_STEM: &str = "models/dictionary";
pub const TFIDF_STEM: &str = "models/tfidf";
pub const LSI_STEM: &str = "models/lsi";
pub const INDEX_STEM: &str = "models/similarity_index";
pub const SVD_STEM: &str = "models/svd";

/// Everything a recommender needs, loaded once and read-only afterwards
#[derive(Debug)]
pub struct Artifacts {
    pub catalog: Catalog,
    pub similarity: TopicSimilarity,
    pub rating: SvdModel,
    pub loaded_at: DateTime<Utc>,
    pub data_dir: PathBuf,
}

/// Reads the catalog snapshot and model artifacts from a data directory
pub struct ArtifactLoader {
    data_dir: PathBuf,
    manifest: Option<Manifest>,
}

impl ArtifactLoader {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.is_dir() {
            return Err(Error::InvalidConfig(format!(
                "data directory {} does not exist",
                data_dir.display()
            )));
        }
        let manifest = Manifest::load(&data_dir)?;
        if let Some(manifest) = &manifest {
            info!(files = manifest.files.len(), "Verifying artifacts against manifest");
        }
        Ok(Self { data_dir, manifest })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load and cross-validate every artifact
    pub fn load(&self) -> Result<Artifacts> {
        let items: Vec<Item> = self.read(CATALOG_STEM)?;
        let catalog = Catalog::new(items)?;
        info!(items = catalog.len(), "Catalog loaded");

        let dictionary: Dictionary = self.read(DICTIONARY_STEM)?;
        let tfidf: TfidfModel = self.read(TFIDF_STEM)?;
        let lsi: LsiModel = self.read(LSI_STEM)?;
        let index: SimilarityIndex = self.read(INDEX_STEM)?;
        info!(
            terms = dictionary.len(),
            topics = lsi.num_topics(),
            indexed = index.len(),
            "Similarity models loaded"
        );
        let similarity = TopicSimilarity::new(dictionary, tfidf, lsi, index)?;

        let rating: SvdModel = self.read(SVD_STEM)?;
        info!(
            users = rating.user_count(),
            items = rating.item_count(),
            factors = rating.n_factors(),
            scale = ?rating.rating_scale(),
            "Rating model loaded"
        );

        Ok(Artifacts {
            catalog,
            similarity,
            rating,
            loaded_at: Utc::now(),
            data_dir: self.data_dir.clone(),
        })
    }

    /// Decode `<stem>.{json,json.gz,bin}`, verifying its checksum first
    pub fn read<T: DeserializeOwned>(&self, stem: &str) -> Result<T> {
        let (format, path) = ArtifactFormat::locate(&self.data_dir.join(stem)).ok_or_else(|| {
            Error::Artifact(format!(
                "no {}.{{json,json.gz,bin}} in {}",
                stem,
                self.data_dir.display()
            ))
        })?;
        let bytes = std::fs::read(&path)?;

        if let Some(manifest) = &self.manifest {
            manifest.verify(&format!("{}.{}", stem, format.extension()), &bytes)?;
        }

        format.decode(&bytes).map_err(|e| match e {
            Error::Serialization(msg) => {
                Error::Artifact(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}
