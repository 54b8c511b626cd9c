//! Bundled bitmap assets, decoded once at startup.
//!
//! A missing or undecodable asset is not an error: the page falls back to
//! drawn placeholders, so the binary runs with an empty asset directory.

use std::path::Path;

use iced::widget::image::Handle;
use image::ImageReader;

use crate::config::SiteConfig;
use crate::content::{PROJECTS, ProjectImage};

#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub portrait: Option<Handle>,
    project_images: Vec<(u32, Handle)>,
}

impl Assets {
    pub fn load(config: &SiteConfig) -> Self {
        // The portrait gets the greyscale treatment of the original page.
        let portrait = decode(&config.portrait_path(), true);

        let mut project_images = Vec::new();
        for project in &PROJECTS {
            if let ProjectImage::Img { url } = project.image {
                if let Some(handle) = decode(&config.resolve(url), false) {
                    project_images.push((project.id, handle));
                }
            }
        }

        Self {
            portrait,
            project_images,
        }
    }

    pub fn project_image(&self, id: u32) -> Option<&Handle> {
        self.project_images
            .iter()
            .find(|(image_id, _)| *image_id == id)
            .map(|(_, handle)| handle)
    }
}

fn decode(path: &Path, greyscale: bool) -> Option<Handle> {
    let reader = match ImageReader::open(path) {
        Ok(reader) => reader,
        Err(_) => {
            tracing::debug!(path = %path.display(), "asset missing, using placeholder");
            return None;
        }
    };
    let mut decoded = match reader.decode() {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to decode asset: {e}");
            return None;
        }
    };
    if greyscale {
        decoded = decoded.grayscale();
    }
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}
