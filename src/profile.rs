//! Water-surface profile series.

/// Computed profile: four parallel per-station series.
///
/// `record` is the only way to append, so the series always share a length.
/// The energy-line and water-surface series are elevations on the invert
/// datum; `water_depth` is the local flow depth.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    chainage: Vec<f64>,
    energy: Vec<f64>,
    water_depth: Vec<f64>,
    head: Vec<f64>,
}

/// One station of a profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    /// Distance upstream of the downstream end [m].
    pub chainage: f64,
    /// Energy-line elevation [m].
    pub energy: f64,
    /// Flow depth [m].
    pub water_depth: f64,
    /// Water-surface elevation [m].
    pub head: f64,
}

impl Profile {
    /// Empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty profile with room for `stations` stations.
    pub fn with_capacity(stations: usize) -> Self {
        Self {
            chainage: Vec::with_capacity(stations),
            energy: Vec::with_capacity(stations),
            water_depth: Vec::with_capacity(stations),
            head: Vec::with_capacity(stations),
        }
    }

    /// Append one station.
    ///
    /// `invert` is the local invert elevation; the energy-line and
    /// water-surface elevations are referenced to it.
    pub fn record(&mut self, chainage: f64, invert: f64, specific_energy: f64, depth: f64) {
        self.chainage.push(chainage);
        self.energy.push(invert + specific_energy);
        self.water_depth.push(depth);
        self.head.push(invert + depth);
    }

    /// Drop every station.
    pub fn clear(&mut self) {
        self.chainage.clear();
        self.energy.clear();
        self.water_depth.clear();
        self.head.clear();
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.chainage.len()
    }

    /// Whether any station has been recorded.
    pub fn is_empty(&self) -> bool {
        self.chainage.is_empty()
    }

    /// Chainage series [m].
    #[inline]
    pub fn chainage(&self) -> &[f64] {
        &self.chainage
    }

    /// Energy-line elevation series [m].
    #[inline]
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Flow-depth series [m].
    #[inline]
    pub fn water_depth(&self) -> &[f64] {
        &self.water_depth
    }

    /// Water-surface elevation series [m].
    #[inline]
    pub fn head(&self) -> &[f64] {
        &self.head
    }

    /// Station view at `index`.
    pub fn station(&self, index: usize) -> Option<Station> {
        if index >= self.len() {
            return None;
        }
        Some(Station {
            chainage: self.chainage[index],
            energy: self.energy[index],
            water_depth: self.water_depth[index],
            head: self.head[index],
        })
    }

    /// Iterate stations from the downstream control upstream.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        (0..self.len()).map(move |index| Station {
            chainage: self.chainage[index],
            energy: self.energy[index],
            water_depth: self.water_depth[index],
            head: self.head[index],
        })
    }
}
