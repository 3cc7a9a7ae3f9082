//! Integration test for YAML seed loading.
//!
//! Writes a seed file to disk, loads it through `Seed::from_path`, and checks
//! the resulting storefront snapshot, including the derived novel price.

use std::{fs, io::Write};

use testresult::TestResult;

use taquilla::{fixtures::Seed, session::Storefront};

const SEED_YAML: &str = "
priceConfig:
  moviePrice: 80
  seriesPricePerSeason: 300
  transferFeePercent: 10
  novelPricePerChapter: 5
deliveryZones:
  - id: '1'
    name: Santiago de Cuba > Santiago de Cuba > Nuevo Vista Alegre
    cost: 150
    active: true
    createdAt: '2025-08-20T07:57:35.826Z'
    updatedAt: '2025-08-20T07:59:08.460Z'
  - id: '2'
    name: Santiago de Cuba > Santiago de Cuba > Vista Alegre
    cost: 350
    active: true
    createdAt: '2025-08-20T07:57:35.826Z'
    updatedAt: '2025-08-20T08:00:33.859Z'
novels:
  - id: 1755676806060
    titulo: pepe
    genero: drama
    capitulos: 100
    año: 2025
    descripcion: ''
    pais: Cuba
    estado: transmision
    active: true
    createdAt: '2025-08-20T08:00:06.060Z'
    updatedAt: '2025-08-20T08:00:06.060Z'
";

#[test]
fn seed_file_round_trips_into_a_storefront() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(SEED_YAML.as_bytes())?;

    let seed = Seed::from_path(file.path())?;
    let store = Storefront::with_seed(seed);

    assert_eq!(store.config().movie_price, 80);
    assert_eq!(store.zones().len(), 2);
    assert_eq!(
        store.delivery_fee("Santiago de Cuba > Santiago de Cuba > Vista Alegre"),
        Some(350)
    );

    let novel = store.novels().first().ok_or("seed lost its novel")?;

    assert_eq!(novel.titulo, "pepe");
    assert_eq!(novel.total_price(&store.config()), 500);

    Ok(())
}

#[test]
fn shipped_default_seed_parses() -> TestResult {
    let contents = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/default.yaml"
    ))?;

    let seed = Seed::from_str(&contents)?;
    let store = Storefront::with_seed(seed);

    assert_eq!(store.zones().len(), 2);
    assert_eq!(store.novels().len(), 1);

    Ok(())
}

#[test]
fn missing_seed_file_surfaces_an_io_error() {
    let result = Seed::from_path("fixtures/does-not-exist.yaml");

    assert!(
        matches!(result, Err(taquilla::fixtures::FixtureError::Io(_))),
        "expected an IO error"
    );
}
