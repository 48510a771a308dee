use crate::domain::models::{Court, GeoPoint};

/// Get the list of Singapore squash centres served as reference data
///
/// The booking core never mutates these; they are what the map renders and
/// the source for court names on booking cards.
pub fn get_courts() -> Vec<Court> {
    vec![
        court("c1", "Kallang Squash Centre", "8 Stadium Blvd, Singapore", 1.3069, 103.8760),
        court("c2", "Burghley Squash Centre", "43 Burghley Dr, Singapore", 1.3605, 103.8643),
        court("c3", "Yio Chu Kang Squash Centre", "200 Ang Mo Kio Ave 9, Singapore", 1.3820, 103.8450),
    ]
}

fn court(id: &str, name: &str, address: &str, lat: f64, lng: f64) -> Court {
    Court {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        location: GeoPoint { lat, lng },
    }
}
