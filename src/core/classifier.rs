//! Keyword classification of raw search input.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Beach,
    Temple,
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Empty input: show the featured set instead of searching.
    Featured,
    Category(Category),
    /// Normalized (trimmed, lowercased) query for substring matching.
    FreeText(String),
}

const BEACH_SYNONYMS: &[&str] = &["beach", "beaches", "playa", "playas"];
const TEMPLE_SYNONYMS: &[&str] = &["temple", "temples", "templo", "templos"];
const COUNTRY_SYNONYMS: &[&str] = &["country", "countries", "país", "pais", "países", "paises"];

pub fn normalize(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

pub fn classify(raw_input: &str) -> Classification {
    let keyword = normalize(raw_input);

    if keyword.is_empty() {
        return Classification::Featured;
    }

    let category = if BEACH_SYNONYMS.contains(&keyword.as_str()) {
        Some(Category::Beach)
    } else if TEMPLE_SYNONYMS.contains(&keyword.as_str()) {
        Some(Category::Temple)
    } else if COUNTRY_SYNONYMS.contains(&keyword.as_str()) {
        Some(Category::Country)
    } else {
        None
    };

    match category {
        Some(category) => Classification::Category(category),
        None => Classification::FreeText(keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beach_synonyms() {
        for input in ["beach", "beaches", "playa", "playas", "  Playas ", "BEACH"] {
            assert_eq!(classify(input), Classification::Category(Category::Beach), "{input}");
        }
    }

    #[test]
    fn test_temple_synonyms() {
        for input in ["temple", "temples", "templo", "templos", "Temple"] {
            assert_eq!(classify(input), Classification::Category(Category::Temple), "{input}");
        }
    }

    #[test]
    fn test_country_synonyms() {
        for input in ["country", "countries", "país", "PAÍS", "paises", "países"] {
            assert_eq!(classify(input), Classification::Category(Category::Country), "{input}");
        }
    }

    #[test]
    fn test_empty_and_whitespace_is_featured() {
        assert_eq!(classify(""), Classification::Featured);
        assert_eq!(classify("   \t "), Classification::Featured);
    }

    #[test]
    fn test_other_input_is_normalized_free_text() {
        assert_eq!(classify("  Tokyo "), Classification::FreeText("tokyo".to_string()));
        assert_eq!(classify("beach bar"), Classification::FreeText("beach bar".to_string()));
    }
}
