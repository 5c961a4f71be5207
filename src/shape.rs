//! Area shape to SVG shape translation.
//!
//! `<area>` regions describe their geometry with a `shape` keyword and a
//! comma-separated `coords` list. Each maps onto one SVG basic shape:
//!
//! | area      | svg       | attributes                  |
//! |-----------|-----------|-----------------------------|
//! | `circle`  | `circle`  | `cx cy r` verbatim          |
//! | `rect`    | `rect`    | `x y width height` computed |
//! | `poly`    | `polygon` | `points` verbatim           |
//! | `default` | `polygon` | `points` verbatim           |

use crate::error::{Error, Result};

/// SVG element kinds an area can become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgKind {
    Rect,
    Circle,
    Polygon,
}

impl SvgKind {
    /// Map an `<area shape>` keyword to its SVG element.
    ///
    /// Keywords are ASCII case-insensitive and include the legacy HTML
    /// aliases `circ`, `rectangle` and `polygon`.
    pub fn from_area_shape(shape: &str) -> Result<Self> {
        match shape.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(SvgKind::Rect),
            "circle" | "circ" => Ok(SvgKind::Circle),
            "poly" | "polygon" | "default" => Ok(SvgKind::Polygon),
            _ => Err(Error::UnsupportedShape(shape.to_string())),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SvgKind::Rect => "rect",
            SvgKind::Circle => "circle",
            SvgKind::Polygon => "polygon",
        }
    }
}

/// Geometry of one overlay shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgShape {
    Rect {
        x: i64,
        y: i64,
        width: u64,
        height: u64,
    },
    Circle {
        cx: String,
        cy: String,
        r: String,
    },
    Polygon {
        points: String,
    },
}

impl SvgShape {
    pub fn kind(&self) -> SvgKind {
        match self {
            SvgShape::Rect { .. } => SvgKind::Rect,
            SvgShape::Circle { .. } => SvgKind::Circle,
            SvgShape::Polygon { .. } => SvgKind::Polygon,
        }
    }

    /// Geometry attributes in output order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            SvgShape::Rect {
                x,
                y,
                width,
                height,
            } => vec![
                ("x", x.to_string()),
                ("y", y.to_string()),
                ("width", width.to_string()),
                ("height", height.to_string()),
            ],
            SvgShape::Circle { cx, cy, r } => vec![
                ("cx", cx.clone()),
                ("cy", cy.clone()),
                ("r", r.clone()),
            ],
            SvgShape::Polygon { points } => vec![("points", points.clone())],
        }
    }
}

/// Translate an area's `shape` and `coords` into SVG geometry.
pub fn translate(shape: &str, coords: &str) -> Result<SvgShape> {
    match SvgKind::from_area_shape(shape)? {
        SvgKind::Circle => translate_circle(coords),
        SvgKind::Rect => translate_rect(coords),
        SvgKind::Polygon => Ok(SvgShape::Polygon {
            points: coords.to_string(),
        }),
    }
}

fn malformed(coords: &str, reason: impl Into<String>) -> Error {
    Error::MalformedCoordinates {
        coords: coords.to_string(),
        reason: reason.into(),
    }
}

/// `x,y,r`, passed through without numeric interpretation.
fn translate_circle(coords: &str) -> Result<SvgShape> {
    let mut parts = coords.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(cx), Some(cy), Some(r)) => Ok(SvgShape::Circle {
            cx: cx.to_string(),
            cy: cy.to_string(),
            r: r.to_string(),
        }),
        _ => Err(malformed(coords, "circle needs x,y,r")),
    }
}

/// `x1,y1,x2,y2` for two opposite corners.
///
/// Some image map generators emit the bottom-right corner first, so the
/// origin is the smaller coordinate on each axis and the size is the
/// absolute difference.
fn translate_rect(coords: &str) -> Result<SvgShape> {
    let values = coords
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<i64>()
                .map_err(|_| malformed(coords, format!("{:?} is not an integer", p.trim())))
        })
        .collect::<Result<Vec<_>>>()?;

    let [x1, y1, x2, y2] = match values.as_slice() {
        [x1, y1, x2, y2, ..] => [*x1, *y1, *x2, *y2],
        _ => return Err(malformed(coords, "rect needs x1,y1,x2,y2")),
    };

    Ok(SvgShape::Rect {
        x: x1.min(x2),
        y: y1.min(y2),
        width: x2.abs_diff(x1),
        height: y2.abs_diff(y1),
    })
}
