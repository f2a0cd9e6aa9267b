use crate::utils::error::Result;
use crate::utils::validation::validate_time_zone;
use chrono_tz::Tz;

/// Built-in name fragments for the destinations in the bundled fixture.
const BUILTIN_ZONES: &[(&str, Tz)] = &[
    ("sydney", chrono_tz::Australia::Sydney),
    ("melbourne", chrono_tz::Australia::Melbourne),
    ("tokyo", chrono_tz::Asia::Tokyo),
    ("kyoto", chrono_tz::Asia::Tokyo),
    ("rio de janeiro", chrono_tz::America::Sao_Paulo),
    ("são paulo", chrono_tz::America::Sao_Paulo),
    ("sao paulo", chrono_tz::America::Sao_Paulo),
    ("copacabana", chrono_tz::America::Sao_Paulo),
    ("angkor wat", chrono_tz::Asia::Phnom_Penh),
    ("taj mahal", chrono_tz::Asia::Kolkata),
    ("bora bora", chrono_tz::Pacific::Tahiti),
];

/// Maps destination names to IANA zones by case-insensitive substring.
#[derive(Debug, Clone)]
pub struct TimeZoneTable {
    entries: Vec<(String, Tz)>,
}

impl Default for TimeZoneTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN_ZONES
                .iter()
                .map(|(pattern, zone)| (pattern.to_string(), *zone))
                .collect(),
        }
    }
}

impl TimeZoneTable {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Built-in table with `overrides` placed in front, so they win.
    pub fn with_overrides(overrides: &[(String, String)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(overrides.len() + BUILTIN_ZONES.len());
        for (pattern, zone) in overrides {
            let tz = validate_time_zone(pattern, zone)?;
            entries.push((pattern.trim().to_lowercase(), tz));
        }
        entries.extend(Self::default().entries);
        Ok(Self { entries })
    }

    pub fn lookup(&self, name: &str) -> Option<Tz> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(pattern, _)| name.contains(pattern.as_str()))
            .map(|(_, zone)| *zone)
    }
}
