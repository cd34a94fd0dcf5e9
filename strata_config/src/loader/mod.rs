//! Loading configuration documents from disk.
//!
//! Each supported file format decodes to the same JSON-like mapping so the
//! rest of the pipeline never needs to know where a value came from.

use std::path::{Path, PathBuf};

use crate::{ConfigMap, LoadError, merge::merge_documents};

mod parser;
mod properties;

#[cfg(test)]
mod tests;

/// A decoded configuration file together with its provenance.
///
/// The source path is carried for log and error messages only; documents are
/// discarded once merged.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Decoded top-level mapping.
    pub values: ConfigMap,
}

/// Load a single configuration document, selecting the decoder by extension.
///
/// Supported extensions are `.yaml`/`.yml`, `.json`, `.toml` and
/// `.properties` (matched case-insensitively). The decoded top level must be
/// a mapping.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when the file is absent,
/// [`LoadError::UnsupportedFormat`] for an unrecognised extension and
/// [`LoadError::Parse`] when the contents fail to decode.
pub fn load_document(path: &Path) -> Result<ConfigDocument, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let data = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    let values = parser::decode_by_extension(path, &data)?;
    Ok(ConfigDocument {
        path: path.to_path_buf(),
        values,
    })
}

/// Load every path in order and fold the documents into one mapping.
///
/// Loading short-circuits on the first failure: no partial merge is ever
/// returned. Later documents overwrite earlier ones per
/// [`merge_documents`](crate::merge_documents).
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered, identifying the offending
/// path.
pub fn load_and_merge<P>(paths: &[P]) -> Result<ConfigMap, LoadError>
where
    P: AsRef<Path>,
{
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let document = load_document(path.as_ref())?;
        tracing::debug!(
            path = %document.path.display(),
            keys = document.values.len(),
            "loaded configuration document"
        );
        documents.push(document.values);
    }
    Ok(merge_documents(documents))
}

/// Map a read failure to the matching [`LoadError`] kind.
///
/// The file existed when dispatch started, but it may vanish before the
/// read; report that as `NotFound` rather than a parse failure.
fn read_error(path: &Path, source: std::io::Error) -> LoadError {
    if source.kind() == std::io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::parse(path, source)
    }
}
