use crate::types::reference_point::ReferencePoint;

/// Well known Paris landmarks usable as search centres: (name, latitude, longitude).
pub const POPULAR_PLACES: &[(&str, f64, f64)] = &[
    ("Eiffel Tower", 48.8584, 2.2945),
    ("Louvre", 48.8606, 2.3376),
    ("Notre-Dame", 48.8529, 2.3508),
    ("Sacré-Cœur", 48.8867, 2.3431),
    ("Arc de Triomphe", 48.8738, 2.2950),
    ("Musée d'Orsay", 48.8600, 2.3266),
    ("Centre Pompidou", 48.8606, 2.3522),
    ("Place de la Concorde", 48.8656, 2.3216),
    ("Palais Garnier", 48.8718, 2.3317),
    ("Panthéon", 48.8463, 2.3464),
    ("Luxembourg Garden", 48.8462, 2.3372),
    ("Rodin Museum", 48.8554, 2.3158),
    ("Catacombs of Paris", 48.8338, 2.3324),
    ("Opéra Bastille", 48.8520, 2.3695),
    ("Parc des Princes", 48.8412, 2.2531),
    ("La Défense", 48.8897, 2.2419),
    ("La Sorbonne", 48.8491, 2.3434),
    ("Latin Quarter", 48.8493, 2.3461),
    ("Montmartre", 48.8867, 2.3431),
    ("Place Vendôme", 48.8675, 2.3299),
];

/// Looks a place up by name, ignoring case and surrounding whitespace.
pub fn find_place(name: &str) -> Option<ReferencePoint> {
    let wanted = name.trim().to_lowercase();
    POPULAR_PLACES
        .iter()
        .find(|(place, _, _)| place.to_lowercase() == wanted)
        .map(|(_, lat, lon)| ReferencePoint::new(*lat, *lon))
}

pub fn place_names() -> impl Iterator<Item = &'static str> {
    POPULAR_PLACES.iter().map(|(name, _, _)| *name)
}
