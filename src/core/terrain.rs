//! Terrain-Höhenabfrage für erzeugte Platzierungspunkte.
//!
//! Die Punkt-Generierung interpoliert nur in der XZ-Ebene; die Y-Koordinate
//! jedes Punkts wird danach über einen `TerrainSampler` nachgeschlagen.

/// Liefert die Geländehöhe an einer XZ-Position.
pub trait TerrainSampler {
    /// Höhe (Y) an Weltposition `(x, z)`.
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

impl<F> TerrainSampler for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

/// Ebenes Gelände mit konstanter Höhe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain {
    /// Konstante Höhe
    pub height: f32,
}

impl FlatTerrain {
    /// Erstellt ein ebenes Gelände auf Höhe `height`.
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainSampler for FlatTerrain {
    fn sample_height(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }
}

/// Weltkoordinaten-Begrenzungen eines Höhenrasters
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Minimale Z-Koordinate (unten)
    pub min_z: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Maximale Z-Koordinate (oben)
    pub max_z: f32,
}

impl WorldBounds {
    /// Erstellt Bounds aus Map-Größe (zentriert bei 0,0)
    pub fn from_map_size(size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min_x: -half,
            min_z: -half,
            max_x: half,
            max_z: half,
        }
    }
}

/// Höhenraster im Speicher (zeilenweise, Z-Zeilen × X-Spalten).
///
/// Zwischen den Stützstellen wird bikubisch (Catmull-Rom) interpoliert,
/// außerhalb der Bounds wird auf den Rand geklemmt.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    heights: Vec<f32>,
    width: usize,
    depth: usize,
    world_bounds: WorldBounds,
}

impl HeightGrid {
    /// Erstellt ein Raster aus Höhenwerten in Metern.
    ///
    /// Gibt `None` zurück wenn die Dimensionen nicht zur Datenmenge passen
    /// oder kleiner als 2×2 sind.
    pub fn new(
        heights: Vec<f32>,
        width: usize,
        depth: usize,
        world_bounds: WorldBounds,
    ) -> Option<Self> {
        if width < 2 || depth < 2 || heights.len() != width * depth {
            log::warn!(
                "Höhenraster verworfen: {}x{} passt nicht zu {} Werten",
                width,
                depth,
                heights.len()
            );
            return None;
        }
        Some(Self {
            heights,
            width,
            depth,
            world_bounds,
        })
    }

    /// Erstellt ein Raster, dessen Werte aus einer Funktion der Weltposition stammen.
    pub fn from_fn(
        width: usize,
        depth: usize,
        world_bounds: WorldBounds,
        height_at: impl Fn(f32, f32) -> f32,
    ) -> Option<Self> {
        if width < 2 || depth < 2 {
            return None;
        }
        let step_x = (world_bounds.max_x - world_bounds.min_x) / (width - 1) as f32;
        let step_z = (world_bounds.max_z - world_bounds.min_z) / (depth - 1) as f32;
        let mut heights = Vec::with_capacity(width * depth);
        for row in 0..depth {
            for col in 0..width {
                let x = world_bounds.min_x + col as f32 * step_x;
                let z = world_bounds.min_z + row as f32 * step_z;
                heights.push(height_at(x, z));
            }
        }
        Self::new(heights, width, depth, world_bounds)
    }

    /// Gibt die Dimensionen (Spalten, Zeilen) zurück
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.depth)
    }

    /// Gibt die verwendeten World-Bounds zurück
    pub fn world_bounds(&self) -> &WorldBounds {
        &self.world_bounds
    }

    /// Bikubische Interpolation für glatte Höhenwerte
    /// Nutzt 4x4 Grid von Stützstellen um den Sample-Punkt
    fn sample_bicubic(&self, px: f32, pz: f32) -> f32 {
        let x = px.floor() as i64;
        let z = pz.floor() as i64;

        let fx = px - px.floor();
        let fz = pz - pz.floor();

        let mut values = [[0.0f32; 4]; 4];
        for (j, row) in values.iter_mut().enumerate() {
            for (i, cell) in row.iter_mut().enumerate() {
                let sample_x = (x + i as i64 - 1).clamp(0, self.width as i64 - 1) as usize;
                let sample_z = (z + j as i64 - 1).clamp(0, self.depth as i64 - 1) as usize;
                *cell = self.heights[sample_z * self.width + sample_x];
            }
        }

        let mut col_values = [0.0f32; 4];
        for (j, row) in values.iter().enumerate() {
            col_values[j] = Self::cubic_interpolate(row[0], row[1], row[2], row[3], fx);
        }

        Self::cubic_interpolate(
            col_values[0],
            col_values[1],
            col_values[2],
            col_values[3],
            fz,
        )
    }

    /// Kubische Interpolation zwischen 4 Werten (Catmull-Rom)
    fn cubic_interpolate(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
        let t2 = t * t;
        let t3 = t2 * t;

        let a = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
        let b = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
        let c = -0.5 * p0 + 0.5 * p2;
        let d = p1;

        a * t3 + b * t2 + c * t + d
    }
}

impl TerrainSampler for HeightGrid {
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let bounds = &self.world_bounds;
        let nx = ((x - bounds.min_x) / (bounds.max_x - bounds.min_x)).clamp(0.0, 1.0);
        let nz = ((z - bounds.min_z) / (bounds.max_z - bounds.min_z)).clamp(0.0, 1.0);

        let px = nx * (self.width - 1) as f32;
        let pz = nz * (self.depth - 1) as f32;

        let height = self.sample_bicubic(px, pz);
        log::trace!(
            "Terrain-Sample bei ({:.3}, {:.3}) -> Raster ({:.3}, {:.3}) -> {:.3}m",
            x,
            z,
            px,
            pz,
            height
        );
        height
    }
}
