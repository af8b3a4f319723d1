//! Color map system.

use glam::Vec3;

/// Name of the color map selected when nothing else is configured.
pub const DEFAULT_COLOR_MAP: &str = "Viridis";

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    /// Color map name, as shown in the color map select.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f32).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }

    /// Samples `count` evenly spaced colors, endpoints included.
    pub fn sample_n(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..count)
                .map(|i| self.sample(i as f32 / (count - 1) as f32))
                .collect(),
        }
    }
}

/// Ordered registry of named color maps.
///
/// Registration order is the order offered to the user.
#[derive(Debug, Clone, Default)]
pub struct ColorMapRegistry {
    color_maps: Vec<ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with the built-in color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(viridis());

        self.register(ColorMap::new(
            "Plasma",
            vec![
                Vec3::new(0.050, 0.030, 0.528),
                Vec3::new(0.295, 0.012, 0.615),
                Vec3::new(0.493, 0.012, 0.658),
                Vec3::new(0.665, 0.139, 0.586),
                Vec3::new(0.798, 0.280, 0.470),
                Vec3::new(0.902, 0.425, 0.360),
                Vec3::new(0.973, 0.586, 0.252),
                Vec3::new(0.993, 0.770, 0.155),
                Vec3::new(0.940, 0.975, 0.131),
            ],
        ));

        self.register(ColorMap::new(
            "Magma",
            vec![
                Vec3::new(0.001, 0.000, 0.014),
                Vec3::new(0.114, 0.065, 0.277),
                Vec3::new(0.317, 0.072, 0.485),
                Vec3::new(0.513, 0.148, 0.508),
                Vec3::new(0.716, 0.215, 0.475),
                Vec3::new(0.904, 0.312, 0.405),
                Vec3::new(0.986, 0.535, 0.382),
                Vec3::new(0.996, 0.762, 0.520),
                Vec3::new(0.987, 0.991, 0.750),
            ],
        ));

        self.register(ColorMap::new(
            "Inferno",
            vec![
                Vec3::new(0.001, 0.000, 0.014),
                Vec3::new(0.133, 0.047, 0.318),
                Vec3::new(0.341, 0.062, 0.429),
                Vec3::new(0.550, 0.153, 0.408),
                Vec3::new(0.735, 0.216, 0.330),
                Vec3::new(0.890, 0.344, 0.197),
                Vec3::new(0.976, 0.537, 0.039),
                Vec3::new(0.976, 0.759, 0.155),
                Vec3::new(0.988, 0.998, 0.645),
            ],
        ));

        self.register(ColorMap::new(
            "Blues",
            vec![
                Vec3::new(0.969, 0.984, 1.000),
                Vec3::new(0.871, 0.922, 0.969),
                Vec3::new(0.776, 0.859, 0.937),
                Vec3::new(0.620, 0.792, 0.882),
                Vec3::new(0.419, 0.682, 0.839),
                Vec3::new(0.259, 0.573, 0.776),
                Vec3::new(0.129, 0.443, 0.710),
                Vec3::new(0.031, 0.318, 0.612),
                Vec3::new(0.031, 0.188, 0.420),
            ],
        ));

        self.register(ColorMap::new(
            "Reds",
            vec![
                Vec3::new(1.000, 0.961, 0.941),
                Vec3::new(0.996, 0.878, 0.824),
                Vec3::new(0.988, 0.733, 0.631),
                Vec3::new(0.988, 0.573, 0.447),
                Vec3::new(0.984, 0.416, 0.290),
                Vec3::new(0.937, 0.231, 0.173),
                Vec3::new(0.796, 0.094, 0.114),
                Vec3::new(0.647, 0.059, 0.082),
                Vec3::new(0.404, 0.000, 0.051),
            ],
        ));

        self.register(ColorMap::new(
            "Coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));

        self.register(ColorMap::new(
            "Rainbow",
            vec![
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        ));
    }

    /// Registers a color map, replacing any existing map with the same name
    /// in place.
    pub fn register(&mut self, color_map: ColorMap) {
        match self.color_maps.iter_mut().find(|m| m.name == color_map.name) {
            Some(existing) => *existing = color_map,
            None => self.color_maps.push(color_map),
        }
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.iter().find(|m| m.name == name)
    }

    /// Returns all color map names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.iter().map(|m| m.name.as_str())
    }

    /// Returns the number of registered color maps.
    pub fn len(&self) -> usize {
        self.color_maps.len()
    }

    /// Returns true if no color maps are registered.
    pub fn is_empty(&self) -> bool {
        self.color_maps.is_empty()
    }
}

/// The built-in Viridis map, also the source of the default volume colors.
pub fn viridis() -> ColorMap {
    ColorMap::new(
        DEFAULT_COLOR_MAP,
        vec![
            Vec3::new(0.267, 0.004, 0.329),
            Vec3::new(0.282, 0.140, 0.457),
            Vec3::new(0.253, 0.265, 0.529),
            Vec3::new(0.206, 0.371, 0.553),
            Vec3::new(0.163, 0.471, 0.558),
            Vec3::new(0.127, 0.566, 0.550),
            Vec3::new(0.134, 0.658, 0.517),
            Vec3::new(0.266, 0.749, 0.440),
            Vec3::new(0.477, 0.821, 0.318),
            Vec3::new(0.741, 0.873, 0.150),
            Vec3::new(0.993, 0.906, 0.144),
        ],
    )
}
