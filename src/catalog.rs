//! Catalog side-tables: delivery zones and novels

use serde::{Deserialize, Serialize};

use crate::config::PriceConfig;

/// A named delivery destination with a flat delivery cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    /// Stable identifier.
    pub id: String,

    /// Display name. Duplicates are legal, if operationally confusing.
    pub name: String,

    /// Flat delivery cost in whole pesos.
    pub cost: i64,

    /// Whether the zone is offered at checkout.
    pub active: bool,

    /// ISO-8601 creation timestamp, carried verbatim from the source record.
    pub created_at: String,

    /// ISO-8601 last-update timestamp.
    pub updated_at: String,
}

/// Broadcast status of a novel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    /// Still airing.
    Transmision,

    /// Finished airing.
    Finalizada,
}

/// A novel catalog entry.
///
/// The total price is never stored here; it is always derived from the current
/// [`PriceConfig`] via [`Novel::total_price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    /// Unique identifier, monotonic enough to sort by insertion time.
    pub id: i64,

    /// Title.
    pub titulo: String,

    /// Genre.
    pub genero: String,

    /// Chapter count; always positive.
    pub capitulos: u32,

    /// Release year.
    #[serde(rename = "año")]
    pub anio: i32,

    /// Free-form description, possibly empty.
    pub descripcion: String,

    /// Country of origin.
    pub pais: String,

    /// Broadcast status.
    pub estado: NovelStatus,

    /// Whether the novel is offered in the catalog.
    pub active: bool,

    /// ISO-8601 creation timestamp.
    pub created_at: String,

    /// ISO-8601 last-update timestamp.
    pub updated_at: String,
}

impl Novel {
    /// Price of the full novel under the given configuration.
    ///
    /// Recomputed on every call so a configuration change is reflected
    /// immediately.
    pub fn total_price(&self, config: &PriceConfig) -> i64 {
        i64::from(self.capitulos) * config.novel_price_per_chapter
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_novel() -> Novel {
        Novel {
            id: 1_755_676_806_060,
            titulo: "pepe".to_string(),
            genero: "drama".to_string(),
            capitulos: 100,
            anio: 2025,
            descripcion: String::new(),
            pais: "Cuba".to_string(),
            estado: NovelStatus::Transmision,
            active: true,
            created_at: "2025-08-20T08:00:06.060Z".to_string(),
            updated_at: "2025-08-20T08:00:06.060Z".to_string(),
        }
    }

    #[test]
    fn novel_total_price_tracks_config() {
        let novel = test_novel();
        let config = PriceConfig::default();

        assert_eq!(novel.total_price(&config), 500);

        let updated = PriceConfig {
            novel_price_per_chapter: 7,
            ..config
        };

        assert_eq!(novel.total_price(&updated), 700);
    }

    #[test]
    fn novel_status_uses_lowercase_wire_names() -> TestResult {
        let airing: NovelStatus = serde_norway::from_str("transmision")?;
        let finished: NovelStatus = serde_norway::from_str("finalizada")?;

        assert_eq!(airing, NovelStatus::Transmision);
        assert_eq!(finished, NovelStatus::Finalizada);

        Ok(())
    }

    #[test]
    fn novel_year_serializes_under_spanish_name() -> TestResult {
        let yaml = serde_norway::to_string(&test_novel())?;

        assert!(yaml.contains("año: 2025"), "year field should keep its source name: {yaml}");

        Ok(())
    }
}
