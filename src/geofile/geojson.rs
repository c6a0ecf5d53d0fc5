use std::{fs, path::Path, path::PathBuf};

use geojson::{FeatureCollection, GeoJson};

use crate::error::{Error, Result};

pub fn read_feature_collection(filepath: &Path) -> Result<FeatureCollection> {
    let contents = fs::read_to_string(filepath).map_err(|err| Error::Load {
        path: filepath.to_path_buf(),
        reason: err.to_string(),
    })?;
    let geojson_contents: GeoJson = contents.parse().map_err(|err: geojson::Error| Error::Load {
        path: filepath.to_path_buf(),
        reason: err.to_string(),
    })?;
    FeatureCollection::try_from(geojson_contents).map_err(|err| Error::Load {
        path: filepath.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Write the collection to `output_filepath`, going through a sibling
/// temporary file so a failed run never leaves a partial output behind.
pub fn write_feature_collection(
    feature_collection: FeatureCollection,
    output_filepath: &Path,
) -> Result<()> {
    let geojson_contents = GeoJson::from(feature_collection).to_string();
    let tmp_filepath = {
        let mut tmp = output_filepath.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    };
    fs::write(&tmp_filepath, geojson_contents).map_err(|err| Error::Write {
        path: output_filepath.to_path_buf(),
        reason: err.to_string(),
    })?;
    fs::rename(&tmp_filepath, output_filepath).map_err(|err| Error::Write {
        path: output_filepath.to_path_buf(),
        reason: err.to_string(),
    })
}
