use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A city, temple or beach. All three share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub cities: Vec<Destination>,
}

/// The whole fixture, loaded once per session and never mutated.
///
/// Sections that are missing, `null` or not arrays decode as empty, and
/// entries that do not fit the record shape are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub countries: Vec<Country>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub temples: Vec<Destination>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub beaches: Vec<Destination>,
}

impl Dataset {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Cities of every country, in country-then-city order.
    pub fn all_cities(&self) -> impl Iterator<Item = &Destination> {
        self.countries.iter().flat_map(|country| country.cities.iter())
    }

    pub fn record_count(&self) -> usize {
        self.all_cities().count() + self.temples.len() + self.beaches.len()
    }
}

fn lenient_seq<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => items,
        None | Some(serde_json::Value::Null) => return Ok(Vec::new()),
        Some(other) => {
            tracing::warn!("Expected an array in dataset section, found {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping malformed dataset entry: {}", e);
                None
            }
        })
        .collect())
}
