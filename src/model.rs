//! Image map data read from the source document.

/// The `<img>` element the map belongs to, with attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub attrs: Vec<(String, String)>,
}

impl SourceImage {
    pub fn new(attrs: Vec<(String, String)>) -> Self {
        Self { attrs }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// A dimension attribute, treating an empty value as absent.
    pub fn dimension(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.trim().is_empty())
    }

    /// Fragment identifier the image points at, without the leading `#`.
    pub fn usemap_name(&self) -> Option<&str> {
        self.attr("usemap")
            .map(|v| v.trim())
            .map(|v| v.strip_prefix('#').unwrap_or(v))
            .filter(|v| !v.is_empty())
    }

    /// Render the image as a start tag, for diagnostics.
    pub fn markup(&self) -> String {
        let mut out = String::from("<img");
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {name}=\"{}\"", crate::markup::escape_attr(value)));
        }
        out.push_str("/>");
        out
    }
}

/// One `<area>` of the map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapArea {
    pub shape: Option<String>,
    pub coords: Option<String>,
    pub href: Option<String>,
    pub alt: Option<String>,
    pub target: Option<String>,
    /// Source start tag, kept for error messages.
    pub markup: String,
}

impl MapArea {
    /// The shape keyword; HTML treats a missing `shape` as `rect`.
    pub fn shape(&self) -> &str {
        self.shape.as_deref().unwrap_or("rect")
    }

    /// Link target, `_self` unless specified.
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or("_self")
    }
}

/// An image together with the areas of its map, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMap {
    pub image: SourceImage,
    pub name: Option<String>,
    pub areas: Vec<MapArea>,
}
