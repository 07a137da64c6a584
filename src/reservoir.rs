use std::fmt;

pub const DEFAULT_NAME: &str = "Unnamed";
pub const DEFAULT_KIND: &str = "Pond";

/// A single water body: identity, classification and three measurements.
///
/// Area and volume are derived on every call and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservoir {
    name: String,
    kind: String,
    width: f64,
    length: f64,
    max_depth: f64,
}

impl Default for Reservoir {
    fn default() -> Self {
        Reservoir::new(DEFAULT_NAME, DEFAULT_KIND, 0.0, 0.0, 0.0)
    }
}

impl Reservoir {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        width: f64,
        length: f64,
        max_depth: f64,
    ) -> Self {
        Reservoir {
            name: name.into(),
            kind: kind.into(),
            width,
            length,
            max_depth,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn volume(&self) -> f64 {
        self.width * self.length * self.max_depth
    }

    /// Byte-exact, case-sensitive comparison of `kind`.
    pub fn same_kind(&self, other: &Reservoir) -> bool {
        self.kind == other.kind
    }

    /// True only for reservoirs of the same kind with a strictly larger area.
    pub fn greater_area(&self, other: &Reservoir) -> bool {
        self.same_kind(other) && self.area() > other.area()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub fn set_depth(&mut self, max_depth: f64) {
        self.max_depth = max_depth;
    }

    /// Labeled, newline-terminated lines for display.
    pub fn render(&self) -> String {
        format!(
            "Name: {}\nKind: {}\nWidth: {}\nLength: {}\nDepth: {}\nArea: {}\nVolume: {}\n",
            self.name,
            self.kind,
            self.width,
            self.length,
            self.max_depth,
            self.area(),
            self.volume()
        )
    }

    pub fn encode_text(&self) -> String {
        crate::text::encode(self)
    }

    pub fn encode_binary(&self) -> Vec<u8> {
        crate::binary::encode(self)
    }
}

impl fmt::Display for Reservoir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
