//! Transport mode passed to the directions collaborator.

/// How the tracked vehicle travels.  Directions services use it to choose a
/// road graph and speed model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum TransportMode {
    /// Private vehicle (default; the tracked marker is a car).
    #[default]
    Automobile,
    /// On foot.
    Walking,
    /// Scheduled public transit.
    Transit,
    /// Let the directions service decide.
    Any,
}

impl TransportMode {
    /// Assumed average speed in metres per second, for services that estimate
    /// travel time from distance alone.
    pub fn average_speed_mps(self) -> f64 {
        match self {
            TransportMode::Automobile | TransportMode::Any => 13.9, // ~50 km/h
            TransportMode::Walking                         => 1.4,
            TransportMode::Transit                         => 8.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Automobile => "automobile",
            TransportMode::Walking    => "walking",
            TransportMode::Transit    => "transit",
            TransportMode::Any        => "any",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
