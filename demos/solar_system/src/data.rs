use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Moon {
    /// Type tag, dropped from every response by the default exclusion
    pub class: &'static str,
    pub name: &'static str,
    /// Mass in units of 10^20 kg
    pub mass: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Planet {
    pub class: &'static str,
    pub id: u32,
    pub name: &'static str,
    /// Order from the sun
    pub order: u32,
    pub moons: Vec<Moon>,
}

fn moon(name: &'static str, mass: f64) -> Moon {
    Moon {
        class: "Moon",
        name,
        mass,
    }
}

fn planet(id: u32, name: &'static str, moons: Vec<Moon>) -> Planet {
    Planet {
        class: "Planet",
        id,
        name,
        order: id,
        moons,
    }
}

/// The eight planets, ordered from the sun. Ids equal the order.
pub fn planets() -> Vec<Planet> {
    vec![
        planet(1, "Mercury", vec![]),
        planet(2, "Venus", vec![]),
        planet(3, "Earth", vec![moon("Moon", 734.6)]),
        planet(4, "Mars", vec![moon("Phobos", 0.000_107), moon("Deimos", 0.000_015)]),
        planet(
            5,
            "Jupiter",
            vec![moon("Io", 893.2), moon("Europa", 480.0), moon("Ganymede", 1481.9)],
        ),
        planet(6, "Saturn", vec![moon("Titan", 1345.2)]),
        planet(7, "Uranus", vec![moon("Titania", 34.0)]),
        planet(8, "Neptune", vec![moon("Triton", 214.0)]),
    ]
}

pub fn find_planet(id: u32) -> Option<Planet> {
    planets().into_iter().find(|p| p.id == id)
}
