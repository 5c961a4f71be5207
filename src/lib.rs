//! # map2svg
//!
//! Convert an HTML image map (`<img usemap>` plus `<map>`/`<area>`) into an
//! SVG overlay stacked on top of the original image. Each area becomes a
//! hoverable, highlighted SVG shape with an optional outline and link.
//!
//! ## Quick Start
//!
//! ```no_run
//! use map2svg::{convert_file, Options};
//!
//! let html = convert_file("floorplan.map", &Options::default()).unwrap();
//! println!("{html}");
//! ```
//!
//! ## Step by step
//!
//! The pipeline is split into loading, assembly and printing so each stage
//! can be used on its own:
//!
//! ```
//! use map2svg::{assemble, parse, render, Options};
//!
//! let markup = r##"<img src="plan.png" width="100" height="50" usemap="#m">
//!     <map name="m"><area shape="rect" coords="10,10,40,30" href="https://a"></map>"##;
//!
//! let map = parse(markup).unwrap();
//! let options = Options::default();
//! let doc = assemble(&map, &options).unwrap();
//! let html = render(&doc, options.indent).unwrap();
//!
//! assert!(html.contains(r#"viewBox="0 0 100 50""#));
//! assert!(html.contains(r#"<rect x="10" y="10" width="30" height="20""#));
//! ```

pub mod assemble;
pub mod dom;
pub mod error;
pub mod loader;
pub mod markup;
pub mod model;
pub mod options;
pub mod printer;
pub mod shape;
pub(crate) mod util;

use std::path::Path;

pub use assemble::assemble;
pub use error::{Error, Result};
pub use loader::{load, parse};
pub use markup::{Element, Node};
pub use model::{ImageMap, MapArea, SourceImage};
pub use options::Options;
pub use printer::{render, write_to};
pub use shape::{SvgKind, SvgShape, translate};

/// Load an image map file and render its overlay document.
pub fn convert_file(path: impl AsRef<Path>, options: &Options) -> Result<String> {
    let map = load(path)?;
    let doc = assemble(&map, options)?;
    render(&doc, options.indent)
}

/// Render the overlay document for image map markup already in memory.
pub fn convert_str(markup: &str, options: &Options) -> Result<String> {
    let map = parse(markup)?;
    let doc = assemble(&map, options)?;
    render(&doc, options.indent)
}
