//! Built-in scenes.
//!
//! Speeds are in rad/s. The demo pages these scenes model stepped their
//! angles once per rendered frame, so each rate below is the per-frame step
//! times 60.

use std::f64::consts::{FRAC_PI_2, PI};

use orrery_kinematics::{Band, ReferenceEntry, evenly_spaced_angle};

use crate::config::{BodyConfig, BodyInfo, ObserverConfig, PhaseConfig, SceneConfig, Season};

/// Names accepted by [`SceneConfig::preset`].
pub const PRESET_NAMES: [&str; 5] = [
    "earth-seasons",
    "season-explorer",
    "earth-day-night",
    "lunar-eclipse",
    "solar-system",
];

const FRAMES_PER_SECOND: f64 = 60.0;
const EARTH_TILT_DEG: f64 = 23.5;

pub(crate) fn by_name(name: &str) -> Option<SceneConfig> {
    match name {
        "earth-seasons" => Some(earth_seasons()),
        "season-explorer" => Some(season_explorer()),
        "earth-day-night" => Some(earth_day_night()),
        "lunar-eclipse" => Some(lunar_eclipse()),
        "solar-system" => Some(solar_system()),
        _ => None,
    }
}

fn per_frame(step: f64) -> f64 {
    step * FRAMES_PER_SECOND
}

fn sun() -> BodyConfig {
    BodyConfig {
        id: "sun".to_string(),
        ..BodyConfig::default()
    }
}

fn season(key: &str, name: &str, description: &str, northern: &str, southern: &str) -> Season {
    Season {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        northern: northern.to_string(),
        southern: southern.to_string(),
    }
}

/// Equinoxes and solstices in orbital order, March equinox first.
fn seasons() -> Vec<ReferenceEntry<Season>> {
    vec![
        ReferenceEntry {
            angle: 0.0,
            label: season(
                "spring",
                "March equinox",
                "Sun overhead at the equator; day and night are equal everywhere",
                "spring begins",
                "autumn begins",
            ),
        },
        ReferenceEntry {
            angle: FRAC_PI_2,
            label: season(
                "summer",
                "June solstice",
                "Sun overhead at the Tropic of Cancer (23.5° N)",
                "summer, longest day of the year",
                "winter, shortest day of the year",
            ),
        },
        ReferenceEntry {
            angle: PI,
            label: season(
                "autumn",
                "September equinox",
                "Sun overhead at the equator; day and night are equal everywhere",
                "autumn begins",
                "spring begins",
            ),
        },
        ReferenceEntry {
            angle: 3.0 * FRAC_PI_2,
            label: season(
                "winter",
                "December solstice",
                "Sun overhead at the Tropic of Capricorn (23.5° S)",
                "winter, shortest day of the year",
                "summer, longest day of the year",
            ),
        },
    ]
}

/// The Earth circling the sun with its tilted axis.
pub(crate) fn earth_seasons() -> SceneConfig {
    SceneConfig {
        name: "Earth seasons".to_string(),
        bodies: vec![
            sun(),
            BodyConfig {
                id: "earth".to_string(),
                orbit_radius: 15.0,
                angular_speed: per_frame(0.005),
                axial_tilt_deg: EARTH_TILT_DEG,
                ..BodyConfig::default()
            },
        ],
        primary: "earth".to_string(),
        initial_angle: 0.0,
        seasons: seasons(),
        phases: None,
        eclipse_shading: false,
        observer: None,
        speed_presets: vec![1.0, 2.0, 5.0],
    }
}

/// Seasons with a spinning Earth on a tighter, faster orbit, plus an
/// observer at 40° N whose time of day follows the spin.
pub(crate) fn season_explorer() -> SceneConfig {
    SceneConfig {
        name: "Season explorer".to_string(),
        bodies: vec![
            sun(),
            BodyConfig {
                id: "earth".to_string(),
                orbit_radius: 12.0,
                angular_speed: per_frame(0.01),
                axial_tilt_deg: EARTH_TILT_DEG,
                spin_speed: per_frame(0.01),
                ..BodyConfig::default()
            },
        ],
        observer: Some(ObserverConfig {
            body: "earth".to_string(),
            latitude_deg: 40.0,
            longitude_deg: 0.0,
        }),
        ..earth_seasons()
    }
}

/// A stationary Earth spinning under the sun.
pub(crate) fn earth_day_night() -> SceneConfig {
    SceneConfig {
        name: "Earth day and night".to_string(),
        bodies: vec![
            sun(),
            BodyConfig {
                id: "earth".to_string(),
                orbit_radius: 15.0,
                axial_tilt_deg: EARTH_TILT_DEG,
                spin_speed: per_frame(0.005),
                ..BodyConfig::default()
            },
        ],
        primary: "earth".to_string(),
        initial_angle: 0.0,
        seasons: Vec::new(),
        phases: None,
        eclipse_shading: false,
        observer: Some(ObserverConfig::default()),
        speed_presets: vec![0.5, 1.0, 2.0, 5.0],
    }
}

/// The moon passing through the shadow of an Earth held opposite the sun.
///
/// The Earth sits at angle π, so the moon is directly behind it (totality)
/// when its own angle is π.
pub(crate) fn lunar_eclipse() -> SceneConfig {
    let band = |start: f64, end: f64, label: &str| Band {
        start: start * PI,
        end: end * PI,
        label: label.to_string(),
    };
    SceneConfig {
        name: "Lunar eclipse".to_string(),
        bodies: vec![
            sun(),
            BodyConfig {
                id: "earth".to_string(),
                orbit_radius: 30.0,
                initial_angle: PI,
                spin_speed: per_frame(0.005),
                ..BodyConfig::default()
            },
            BodyConfig {
                id: "moon".to_string(),
                orbit_radius: 12.0,
                angular_speed: per_frame(0.01),
                spin_speed: per_frame(0.002),
                parent: Some("earth".to_string()),
                ..BodyConfig::default()
            },
        ],
        primary: "moon".to_string(),
        initial_angle: 0.3 * PI,
        seasons: Vec::new(),
        phases: Some(PhaseConfig {
            bands: vec![
                band(1.6, 0.4, "moon unobscured"),
                band(0.4, 0.7, "penumbral eclipse begins"),
                band(0.7, 0.9, "partial eclipse"),
                band(0.9, 1.1, "total eclipse (blood moon)"),
                band(1.1, 1.3, "partial eclipse"),
                band(1.3, 1.6, "penumbral eclipse ends"),
            ],
            fallback: "moon unobscured".to_string(),
        }),
        eclipse_shading: true,
        observer: None,
        speed_presets: vec![0.5, 1.0, 2.0, 3.0],
    }
}

/// Orbit, spin and info card for one body of the solar-system scene.
struct Planet {
    id: &'static str,
    distance: f64,
    /// Per-frame orbit step.
    orbit: f64,
    /// Per-frame spin step.
    spin: f64,
    name: &'static str,
    description: &'static str,
    facts: [&'static str; 4],
}

const PLANETS: [Planet; 9] = [
    Planet {
        id: "sun",
        distance: 0.0,
        orbit: 0.0,
        spin: 0.001,
        name: "Sun",
        description: "The star at the centre of the solar system. Its light and heat make life on Earth possible.",
        facts: [
            "Temperature: about 5,500°C at the surface, 15 million °C at the core",
            "Size: 1.3 million Earths would fit inside",
            "Age: about 4.6 billion years",
            "Distance: about 150 million km from Earth",
        ],
    },
    Planet {
        id: "mercury",
        distance: 7.0,
        orbit: 0.02,
        spin: 0.005,
        name: "Mercury",
        description: "The smallest planet and the closest to the sun. It is also the fastest, circling the sun in just 88 days.",
        facts: [
            "Temperature: 430°C by day, -180°C at night",
            "Size: about a third of Earth",
            "Year: 88 Earth days",
            "No atmosphere and a heavily cratered surface",
        ],
    },
    Planet {
        id: "venus",
        distance: 10.0,
        orbit: 0.015,
        spin: 0.003,
        name: "Venus",
        description: "The brightest planet in the night sky. Often called Earth's sister, but its surface is scorching.",
        facts: [
            "Temperature: about 465°C, the hottest planet",
            "Size: almost the same as Earth",
            "Year: 225 Earth days",
            "Spins in the opposite direction to most planets",
        ],
    },
    Planet {
        id: "earth",
        distance: 14.0,
        orbit: 0.01,
        spin: 0.01,
        name: "Earth",
        description: "Our home, and the only planet known to host life, with plenty of water and air.",
        facts: [
            "Temperature: 15°C on average",
            "Size: about 12,756 km across",
            "Year: 365.25 days",
            "71% covered by water, protected by an atmosphere",
        ],
    },
    Planet {
        id: "mars",
        distance: 18.0,
        orbit: 0.008,
        spin: 0.009,
        name: "Mars",
        description: "The red planet, coloured by iron rust. Scientists are still looking for signs of past life there.",
        facts: [
            "Temperature: -63°C on average",
            "Size: about half of Earth",
            "Year: 687 Earth days",
            "Home to Olympus Mons, the tallest mountain in the solar system",
        ],
    },
    Planet {
        id: "jupiter",
        distance: 24.0,
        orbit: 0.005,
        spin: 0.02,
        name: "Jupiter",
        description: "The largest planet, a gas giant with the famous Great Red Spot storm.",
        facts: [
            "Temperature: about -110°C",
            "Size: 1,300 Earths would fit inside",
            "Year: about 12 Earth years",
            "Dozens of moons and a storm that has raged for over 300 years",
        ],
    },
    Planet {
        id: "saturn",
        distance: 30.0,
        orbit: 0.003,
        spin: 0.018,
        name: "Saturn",
        description: "Best known for its rings, made of countless pieces of ice and rock.",
        facts: [
            "Temperature: about -140°C",
            "Size: 750 Earths would fit inside",
            "Year: about 29 Earth years",
            "Seven main rings, mostly water ice",
        ],
    },
    Planet {
        id: "uranus",
        distance: 36.0,
        orbit: 0.002,
        spin: 0.012,
        name: "Uranus",
        description: "A blue-green planet that spins lying on its side.",
        facts: [
            "Temperature: about -195°C",
            "Size: about four times Earth",
            "Year: 84 Earth years",
            "Axis tilted by 98 degrees, so it rolls along its orbit",
        ],
    },
    Planet {
        id: "neptune",
        distance: 42.0,
        orbit: 0.001,
        spin: 0.011,
        name: "Neptune",
        description: "The farthest planet from the sun, with violent storms and winds up to 2,000 km/h.",
        facts: [
            "Temperature: about -200°C",
            "Size: about the same as Uranus",
            "Year: 165 Earth years",
            "The fastest winds in the solar system and a deep blue colour",
        ],
    },
];

/// Sun and eight planets, spread evenly around the sun at the start, each
/// with an info card.
pub(crate) fn solar_system() -> SceneConfig {
    let bodies = PLANETS
        .iter()
        .enumerate()
        .map(|(i, planet)| BodyConfig {
            id: planet.id.to_string(),
            orbit_radius: planet.distance,
            angular_speed: per_frame(planet.orbit),
            initial_angle: evenly_spaced_angle(i, PLANETS.len()),
            spin_speed: per_frame(planet.spin),
            info: Some(BodyInfo {
                name: planet.name.to_string(),
                description: planet.description.to_string(),
                facts: planet.facts.iter().map(|f| f.to_string()).collect(),
            }),
            ..BodyConfig::default()
        })
        .collect();
    SceneConfig {
        name: "Solar system".to_string(),
        bodies,
        primary: "earth".to_string(),
        initial_angle: evenly_spaced_angle(3, PLANETS.len()),
        seasons: Vec::new(),
        phases: None,
        eclipse_shading: false,
        observer: None,
        speed_presets: vec![1.0, 2.0, 5.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_resolve() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert!(by_name("earth_seasons").is_none());
    }

    #[test]
    fn test_per_frame_rates() {
        let config = earth_seasons();
        assert!((config.bodies[1].angular_speed - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_solar_system_spreads_planets() {
        let config = solar_system();
        assert_eq!(config.bodies.len(), 9);
        let earth = config.bodies.iter().find(|b| b.id == "earth").unwrap();
        assert_eq!(earth.initial_angle, config.initial_angle);
        let mut angles: Vec<f64> = config.bodies.iter().map(|b| b.initial_angle).collect();
        angles.dedup();
        assert_eq!(angles.len(), 9);
    }

    #[test]
    fn test_every_solar_body_has_info() {
        for body in solar_system().bodies {
            let info = body.info.unwrap_or_else(|| panic!("{} has no info", body.id));
            assert!(!info.name.is_empty());
            assert_eq!(info.facts.len(), 4);
        }
    }

    #[test]
    fn test_eclipse_bands_cover_the_circle() {
        let config = lunar_eclipse();
        let bands = config.phases.unwrap().bands;
        for i in 0..360 {
            let theta = (i as f64).to_radians();
            assert!(bands.iter().any(|b| b.contains(theta)), "gap at {i}°");
        }
    }
}
