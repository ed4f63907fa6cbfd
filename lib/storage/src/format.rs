// On-disk encodings for catalog and model artifacts
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use shoprank_core::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    JsonGz,
    Bincode,
}

impl ArtifactFormat {
    /// Probe order when looking for `<stem>.<ext>`
    const ALL: [ArtifactFormat; 3] = [
        ArtifactFormat::Json,
        ArtifactFormat::JsonGz,
        ArtifactFormat::Bincode,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::JsonGz => "json.gz",
            ArtifactFormat::Bincode => "bin",
        }
    }

    pub fn path_for(self, stem: &Path) -> PathBuf {
        let mut name = stem.as_os_str().to_os_string();
        name.push(".");
        name.push(self.extension());
        PathBuf::from(name)
    }

    /// Find the first existing encoding of `stem`
    pub fn locate(stem: &Path) -> Option<(ArtifactFormat, PathBuf)> {
        Self::ALL
            .iter()
            .map(|&format| (format, format.path_for(stem)))
            .find(|(_, path)| path.is_file())
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T> {
        match self {
            ArtifactFormat::Json => Ok(serde_json::from_slice(bytes)?),
            ArtifactFormat::JsonGz => {
                let mut json = Vec::new();
                GzDecoder::new(bytes).read_to_end(&mut json)?;
                Ok(serde_json::from_slice(&json)?)
            }
            ArtifactFormat::Bincode => bincode::deserialize(bytes)
                .map_err(|e| Error::Serialization(format!("bincode: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_path_for_keeps_stem() {
        let stem = Path::new("models/similarity_index");
        assert_eq!(
            ArtifactFormat::JsonGz.path_for(stem),
            PathBuf::from("models/similarity_index.json.gz")
        );
    }

    #[test]
    fn test_decode_all_formats() {
        let value = vec![1u32, 2, 3];

        let json = serde_json::to_vec(&value).unwrap();
        assert_eq!(ArtifactFormat::Json.decode::<Vec<u32>>(&json).unwrap(), value);

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&json).unwrap();
        let gz = encoder.finish().unwrap();
        assert_eq!(ArtifactFormat::JsonGz.decode::<Vec<u32>>(&gz).unwrap(), value);

        let bin = bincode::serialize(&value).unwrap();
        assert_eq!(ArtifactFormat::Bincode.decode::<Vec<u32>>(&bin).unwrap(), value);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            ArtifactFormat::Json.decode::<Vec<u32>>(b"not json"),
            Err(Error::Serialization(_))
        ));
        assert!(ArtifactFormat::JsonGz.decode::<Vec<u32>>(b"not gzip").is_err());
    }
}
