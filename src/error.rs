use thiserror::Error;

/// Errors that can occur while loading an etalon dataset.
///
/// Matching itself never fails: garbage queries, empty catalogs, and
/// below-threshold candidates are all expressed as absent results, not
/// errors.
#[derive(Debug, Error)]
pub enum EtalonError {
    #[error("failed to read etalon file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse etalon YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
