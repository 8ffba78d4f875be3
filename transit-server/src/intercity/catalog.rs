//! The intercity destination catalog.
//!
//! A fixed table of cities reachable by coach from Korçë. The catalog is
//! passed explicitly into the ranking functions so tests can substitute
//! synthetic catalogs; nothing reads it as a global.

use crate::domain::{Destination, DestinationId, GeoPoint};

/// Catalog rows: id, name, country, latitude, longitude, base travel
/// minutes from Korçë.
const CITIES: [(&str, &str, &str, f64, f64, u32); 19] = [
    // Greek cities
    ("athens", "Athens", "Greece", 37.9838, 23.7275, 720),
    ("thessaloniki", "Thessaloniki", "Greece", 40.6401, 22.9444, 480),
    ("patras", "Patras", "Greece", 38.2466, 21.7345, 600),
    ("ioannina", "Ioannina", "Greece", 39.6650, 20.8537, 180),
    ("larissa", "Larissa", "Greece", 39.6390, 22.4174, 360),
    ("volos", "Volos", "Greece", 39.3666, 22.9507, 420),
    ("heraklion", "Heraklion", "Greece", 35.3387, 25.1442, 900),
    ("kavala", "Kavala", "Greece", 40.9375, 24.4144, 540),
    // Albanian cities
    ("tirana", "Tirana", "Albania", 41.3275, 19.8187, 180),
    ("durres", "Durrës", "Albania", 41.3232, 19.4412, 240),
    ("vlore", "Vlorë", "Albania", 40.4666, 19.4833, 300),
    ("sarande", "Sarandë", "Albania", 39.8756, 20.0053, 240),
    ("shkoder", "Shkodër", "Albania", 42.0683, 19.5126, 360),
    ("elbasan", "Elbasan", "Albania", 41.1125, 20.0822, 120),
    ("fier", "Fier", "Albania", 40.7239, 19.5567, 180),
    ("berat", "Berat", "Albania", 40.7058, 19.9522, 150),
    ("lushnje", "Lushnjë", "Albania", 40.9419, 19.7050, 180),
    ("pogradec", "Pogradec", "Albania", 40.9022, 20.6525, 60),
    ("gjirokaster", "Gjirokastër", "Albania", 40.0758, 20.1389, 180),
];

/// The default destination catalog for the Korçë intercity network.
///
/// Rows with invalid id slugs are skipped; the tests pin the expected
/// catalog size so a typo cannot pass silently.
pub fn balkan_catalog() -> Vec<Destination> {
    CITIES
        .iter()
        .filter_map(|&(id, name, country, lat, lng, base_mins)| {
            let id = DestinationId::parse(id).ok()?;
            Some(Destination::new(
                id,
                name,
                country,
                GeoPoint::new(lat, lng),
                base_mins,
            ))
        })
        .collect()
}
