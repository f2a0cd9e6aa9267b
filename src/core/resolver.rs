use crate::core::classifier::{Category, Classification};
use crate::domain::model::{Dataset, Destination};

/// Turn a classified query into the ordered list of records to show.
pub fn resolve(dataset: &Dataset, classification: &Classification) -> Vec<Destination> {
    match classification {
        Classification::Featured => featured(dataset),
        Classification::Category(Category::Beach) => dataset.beaches.clone(),
        Classification::Category(Category::Temple) => dataset.temples.clone(),
        Classification::Category(Category::Country) => dataset.all_cities().cloned().collect(),
        Classification::FreeText(query) => free_text(dataset, query),
    }
}

/// First city of the first country, first temple, first beach; each only if present.
pub fn featured(dataset: &Dataset) -> Vec<Destination> {
    let city = dataset
        .countries
        .first()
        .and_then(|country| country.cities.first());

    city.into_iter()
        .chain(dataset.temples.first())
        .chain(dataset.beaches.first())
        .cloned()
        .collect()
}

fn free_text(dataset: &Dataset, query: &str) -> Vec<Destination> {
    let matches = |name: &str| name.to_lowercase().contains(query);
    let mut results = Vec::new();

    for country in &dataset.countries {
        if matches(&country.name) {
            results.extend(country.cities.iter().cloned());
        } else {
            results.extend(country.cities.iter().filter(|city| matches(&city.name)).cloned());
        }
    }
    results.extend(dataset.temples.iter().filter(|t| matches(&t.name)).cloned());
    results.extend(dataset.beaches.iter().filter(|b| matches(&b.name)).cloned());

    results
}
