use std::path::Path;

use geojson::{Feature, FeatureCollection, JsonValue};

use crate::error::{Error, Result};
use crate::geofile::geojson::{read_feature_collection, write_feature_collection};

/// Extract the district features of `city_name` from a country-wide GeoJSON
/// file and write them to `output_filepath`.
///
/// The output contains the bare city feature first (name untouched), then
/// every feature whose name contains `"<city_name>-"`, with that prefix
/// stripped, in their source order. The "iso" identifier of every output
/// feature is renumbered down by one. All other properties and the geometry
/// payload pass through unchanged.
pub fn extract_city_districts(
    source_filepath: &Path,
    city_name: &str,
    output_filepath: &Path,
) -> Result<()> {
    let collection = read_feature_collection(source_filepath)?;
    log::info!(
        "Read {} features from {:?}",
        collection.features.len(),
        source_filepath
    );

    let features = city_district_features(&collection, city_name)?;

    log::info!(
        "Writing {} district features to {:?}",
        features.len(),
        output_filepath
    );
    let districts = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    write_feature_collection(districts, output_filepath)
}

/// The pure transformation behind [`extract_city_districts`], operating on an
/// already loaded collection.
pub fn city_district_features(
    collection: &FeatureCollection,
    city_name: &str,
) -> Result<Vec<Feature>> {
    let prefix = format!("{city_name}-");

    // The city feature is looked up by exact name, not by its position in the
    // source file, and must be unique.
    let city_features: Vec<&Feature> = collection
        .features
        .iter()
        .filter(|feature| feature_name(feature) == Some(city_name))
        .collect();
    let city_feature = match city_features.as_slice() {
        [feature] => (*feature).clone(),
        other => {
            return Err(Error::Lookup {
                city: city_name.to_string(),
                count: other.len(),
            })
        }
    };

    let mut features = vec![city_feature];
    for feature in &collection.features {
        let name = match feature_name(feature) {
            Some(name) => name,
            None => continue,
        };
        // Plain substring test; the city name is never treated as a pattern.
        if !name.contains(&prefix) {
            continue;
        }
        let stripped: String = name.chars().skip(city_name.chars().count() + 1).collect();
        let mut feature = feature.clone();
        feature.set_property("name", stripped);
        features.push(feature);
    }

    for feature in &mut features {
        let iso = parse_iso(feature)?;
        feature.set_property("iso", iso - 1);
    }
    Ok(features)
}

fn feature_name(feature: &Feature) -> Option<&str> {
    feature.property("name").and_then(JsonValue::as_str)
}

/// The "iso" property shows up as either a string or a number in municipality
/// datasets. Normalize to an integer, failing on anything else.
fn parse_iso(feature: &Feature) -> Result<i64> {
    let value = feature
        .property("iso")
        .ok_or_else(|| iso_error(feature, "missing"))?;
    match value {
        JsonValue::Number(number) => number
            .as_i64()
            .ok_or_else(|| iso_error(feature, &number.to_string())),
        JsonValue::String(text) => text.parse().map_err(|_| iso_error(feature, text)),
        other => Err(iso_error(feature, &other.to_string())),
    }
}

fn iso_error(feature: &Feature, value: &str) -> Error {
    Error::Value {
        feature: feature_name(feature).unwrap_or("<unnamed>").to_string(),
        value: value.to_string(),
    }
}
