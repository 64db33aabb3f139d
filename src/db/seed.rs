use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    db::dao::{DaoBase, DaoContext},
    password::hash_password,
};

const DEMO_PEOPLE: [(&str, i32, i32, &str); 5] = [
    ("Luke Skywalker", 172, 77, "male"),
    ("Leia Organa", 150, 49, "female"),
    ("Han Solo", 180, 80, "male"),
    ("Darth Vader", 202, 136, "male"),
    ("Yoda", 66, 17, "male"),
];

const DEMO_PLANETS: [(&str, &str, &str, i64); 4] = [
    ("Tatooine", "arid", "desert", 200_000),
    ("Alderaan", "temperate", "grasslands, mountains", 2_000_000_000),
    ("Naboo", "temperate", "grassy hills, swamps, forests", 4_500_000_000),
    ("Coruscant", "temperate", "cityscape", 1_000_000_000_000),
];

const DEMO_USER: (&str, &str, &str) = ("luke@rebellion.org", "luke", "usetheforce");

/// Fills an empty catalog with a handful of people, planets and one user.
/// Does nothing when any person row already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    let daos = DaoContext::new(db);

    if !daos.person().list_all().await?.is_empty() {
        info!("catalog already populated, skipping demo seed");
        return Ok(());
    }

    for (name, height, mass, gender) in DEMO_PEOPLE {
        daos.person()
            .create_person(name, height, mass, gender)
            .await
            .with_context(|| format!("seeding person {name}"))?;
    }

    for (name, climate, terrain, population) in DEMO_PLANETS {
        daos.planet()
            .create_planet(name, climate, terrain, population)
            .await
            .with_context(|| format!("seeding planet {name}"))?;
    }

    let (email, username, password) = DEMO_USER;
    let hash = hash_password(password)
        .map_err(|err| anyhow::anyhow!("demo user hash error: {err}"))?;
    daos.user()
        .create_user(email, username, &hash, true)
        .await
        .context("seeding demo user")?;

    info!(
        people = DEMO_PEOPLE.len(),
        planets = DEMO_PLANETS.len(),
        "seeded demo catalog"
    );
    Ok(())
}
