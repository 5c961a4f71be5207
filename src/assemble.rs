//! Building the overlay document.
//!
//! The output wraps the original image and an absolutely positioned `<svg>`
//! of the same size in a relatively positioned `<div>`:
//!
//! ```text
//! <div style="position:relative;display:inline-block">
//!   <img style="max-width:100%;height:auto" .../>
//!   <svg viewBox="0 0 W H" ...>
//!     <defs><style>...</style></defs>
//!     <filter id="blur">...</filter>
//!     <a href=...><rect class="fill" .../><rect class="stroke" .../></a>
//!     ...
//!   </svg>
//! </div>
//! ```
//!
//! Every area yields a blurred `fill` shape that acts as the hover target and,
//! unless outlines are suppressed, a sibling `stroke` shape with the same
//! geometry so the outline stays sharp.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::markup::{Element, Node};
use crate::model::{ImageMap, MapArea};
use crate::options::Options;
use crate::shape::{SvgShape, translate};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const WRAPPER_STYLE: &str = "position:relative;display:inline-block";
const IMAGE_STYLE: &str = "max-width:100%;height:auto";
const OVERLAY_STYLE: &str = "position:absolute;top:0;left:0";

const BLUR_FILTER_ID: &str = "blur";
const BLUR_STD_DEVIATION: &str = "4";

const FILL_CLASS: &str = "fill";
const STROKE_CLASS: &str = "stroke";
const STROKE_VISIBLE_CLASS: &str = "stroke--visible";

/// Hover highlight, hover outline and the pulsing zoom animation.
const OVERLAY_CSS: &str = "
.fill {
    fill: none;
    pointer-events: visible;
    transform-origin: center;
    transform-box: fill-box;
    will-change: scale;
}
.stroke {
    fill: none;
    stroke: none;
}
.fill:hover {
    fill: #e8d71b99;
    animation: zoom-in-zoom-out 1s ease infinite;
}
.fill:hover + .stroke, .stroke.stroke--visible {
    stroke: red;
    stroke-width: 2px;
}
@keyframes zoom-in-zoom-out {
    0% {
        transform: scale(1, 1);
    }
    50% {
        transform: scale(1.1, 1.1);
    }
    100% {
        transform: scale(1, 1);
    }
}
";

/// Assemble the overlay document for an image map.
///
/// Fails before producing anything if the image lacks `width` or `height`,
/// or if any area cannot be translated.
pub fn assemble(map: &ImageMap, options: &Options) -> Result<Element> {
    let image = &map.image;
    let (Some(width), Some(height)) = (image.dimension("width"), image.dimension("height"))
    else {
        return Err(Error::MissingImageDimensions(image.markup()));
    };

    if options.suppress_outlines && options.always_show_outlines {
        warn!("visible outlines requested but outlines are suppressed; ignoring");
    }

    let mut svg = Element::new("svg")
        .with_attr("viewBox", format!("0 0 {width} {height}"))
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr("version", "1.1")
        .with_attr("style", OVERLAY_STYLE)
        .with_child(style_defs())
        .with_child(blur_filter());

    for (index, area) in map.areas.iter().enumerate() {
        let elements = region(area, options)?;
        debug!(
            "area {index}: {} -> {} element(s)",
            area.shape(),
            elements.len()
        );
        for element in elements {
            svg.push(element);
        }
    }

    Ok(Element::new("div")
        .with_attr("style", WRAPPER_STYLE)
        .with_child(overlay_image(map))
        .with_child(svg))
}

/// The source image without `usemap`, sized to scale with its container.
fn overlay_image(map: &ImageMap) -> Element {
    let mut img = Element::new("img");
    for (name, value) in &map.image.attrs {
        if name != "usemap" {
            img.attrs.push((name.clone(), value.clone()));
        }
    }
    img.set_attr("style", IMAGE_STYLE);
    img
}

fn style_defs() -> Element {
    let style = Element::new("style")
        .with_attr("type", "text/css")
        .with_child(Node::CData(OVERLAY_CSS.to_string()));
    Element::new("defs").with_child(style)
}

fn blur_filter() -> Element {
    let blur = Element::new("feGaussianBlur")
        .with_attr("in", "SourceGraphic")
        .with_attr("stdDeviation", BLUR_STD_DEVIATION);
    Element::new("filter")
        .with_attr("id", BLUR_FILTER_ID)
        .with_child(blur)
}

/// Translate one area into its fill shape and optional stroke shape.
///
/// With an `href` both are wrapped in a single `<a>`; otherwise they are
/// returned as siblings.
fn region(area: &MapArea, options: &Options) -> Result<Vec<Element>> {
    let coords = area
        .coords
        .as_deref()
        .ok_or_else(|| Error::MissingCoordinates(area.markup.clone()))?;
    let shape = translate(area.shape(), coords)?;

    let mut shapes = vec![
        shape_element(&shape)
            .with_attr("filter", format!("url(#{BLUR_FILTER_ID})"))
            .with_attr("class", FILL_CLASS),
    ];

    if !options.suppress_outlines {
        let class = if options.always_show_outlines {
            format!("{STROKE_CLASS} {STROKE_VISIBLE_CLASS}")
        } else {
            STROKE_CLASS.to_string()
        };
        shapes.push(
            shape_element(&shape)
                .with_attr("class", class)
                .with_attr("stroke-linejoin", "round"),
        );
    }

    let Some(href) = area.href.as_deref().filter(|h| !h.is_empty()) else {
        return Ok(shapes);
    };

    let mut link = Element::new("a")
        .with_attr("href", href)
        .with_attr("alt", area.alt.as_deref().unwrap_or(""))
        .with_attr("target", area.target());
    for shape in shapes {
        link.push(shape);
    }
    Ok(vec![link])
}

fn shape_element(shape: &SvgShape) -> Element {
    let mut element = Element::new(shape.kind().tag());
    for (name, value) in shape.attributes() {
        element.set_attr(name, value);
    }
    element
}
