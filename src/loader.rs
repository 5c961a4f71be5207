//! Reading image maps from `.map` and `.html` files.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::dom::{self, ArenaDom, ArenaNodeId};
use crate::error::{Error, Result};
use crate::model::{ImageMap, MapArea, SourceImage};
use crate::util::{decode_text, extract_meta_charset};

/// Tags whose attributes survive parsing; everything else is structure only.
const STRAINED_TAGS: &[&str] = &["img", "map", "area"];

/// Accepted input file name suffixes.
const EXTENSIONS: &[&str] = &[".map", ".html"];

/// Load the image map from a file on disk.
pub fn load(path: impl AsRef<Path>) -> Result<ImageMap> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let ext_ok = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| EXTENSIONS.iter().any(|ext| name.ends_with(ext)));
    if !ext_ok {
        return Err(Error::InvalidExtension(display));
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(display.clone()),
        _ => Error::Io(e),
    })?;
    debug!("read {} bytes from {display}", bytes.len());

    let text = decode_text(&bytes, extract_meta_charset(&bytes));
    parse(&text)
}

/// Extract the image map from markup.
///
/// Exactly one `<img>` and one `<map>` must be identifiable. When several
/// exist, the image carrying `usemap` and the map it names are chosen;
/// anything still ambiguous is an error rather than a guess.
pub fn parse(markup: &str) -> Result<ImageMap> {
    let dom = dom::parse_strained(markup, STRAINED_TAGS);
    let root = dom.document();

    let img = select_image(&dom, &dom.find_all_by_tag(root, "img"))?;
    let image = SourceImage::new(
        dom.attrs(img)
            .iter()
            .map(|a| (a.name.local.to_string(), a.value.clone()))
            .collect(),
    );

    let map = select_map(&dom, &dom.find_all_by_tag(root, "map"), image.usemap_name())?;
    let name = dom
        .get_attr(map, "name")
        .or_else(|| dom.get_attr(map, "id"))
        .map(str::to_string);

    let areas: Vec<MapArea> = dom
        .find_all_by_tag(map, "area")
        .into_iter()
        .map(|id| read_area(&dom, id))
        .collect();

    info!(
        "found image {:?} with map {:?} ({} areas)",
        image.attr("src").unwrap_or(""),
        name.as_deref().unwrap_or(""),
        areas.len()
    );

    Ok(ImageMap { image, name, areas })
}

fn select_image(dom: &ArenaDom, imgs: &[ArenaNodeId]) -> Result<ArenaNodeId> {
    match imgs {
        [] => Err(Error::MalformedMarkup("no <img> element found".to_string())),
        [only] => Ok(*only),
        _ => {
            let with_usemap: Vec<_> = imgs
                .iter()
                .copied()
                .filter(|&id| dom.get_attr(id, "usemap").is_some())
                .collect();
            match with_usemap.as_slice() {
                [only] => Ok(*only),
                [] => Err(Error::AmbiguousMarkup(format!(
                    "{} <img> elements and none has a usemap attribute",
                    imgs.len()
                ))),
                many => Err(Error::AmbiguousMarkup(format!(
                    "{} <img> elements have a usemap attribute",
                    many.len()
                ))),
            }
        }
    }
}

fn select_map(dom: &ArenaDom, maps: &[ArenaNodeId], usemap: Option<&str>) -> Result<ArenaNodeId> {
    match maps {
        [] => Err(Error::MalformedMarkup("no <map> element found".to_string())),
        [only] => Ok(*only),
        _ => {
            let Some(wanted) = usemap else {
                return Err(Error::AmbiguousMarkup(format!(
                    "{} <map> elements and the image has no usemap to choose between them",
                    maps.len()
                )));
            };
            let named: Vec<_> = maps
                .iter()
                .copied()
                .filter(|&id| {
                    dom.get_attr(id, "name").or_else(|| dom.get_attr(id, "id")) == Some(wanted)
                })
                .collect();
            match named.as_slice() {
                [only] => Ok(*only),
                [] => Err(Error::AmbiguousMarkup(format!(
                    "{} <map> elements and none is named {wanted:?}",
                    maps.len()
                ))),
                many => Err(Error::AmbiguousMarkup(format!(
                    "{} <map> elements are named {wanted:?}",
                    many.len()
                ))),
            }
        }
    }
}

fn read_area(dom: &ArenaDom, id: ArenaNodeId) -> MapArea {
    let attr = |name: &str| dom.get_attr(id, name).map(str::to_string);
    MapArea {
        shape: attr("shape"),
        coords: attr("coords"),
        href: attr("href"),
        alt: attr("alt"),
        target: attr("target"),
        markup: dom.start_tag_markup(id),
    }
}
