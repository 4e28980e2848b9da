// SPDX-License-Identifier: MPL-2.0
//! Image geometry probe.
//!
//! External results carry their provider-reported size. Local library files
//! are measured by reading the image header with the `image` crate, without
//! decoding pixels.

use crate::application::port::{ImageProbe, ProbeError};
use crate::domain::results::{ResultItem, ResultKind};
use iced_core::Size;
use image_rs::ImageError;
use std::io;

/// [`ImageProbe`] reading local files from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageProbe;

impl ImageProbe for FsImageProbe {
    #[allow(clippy::cast_precision_loss)]
    fn natural_size(&self, item: &ResultItem) -> Result<Size, ProbeError> {
        match item.kind() {
            ResultKind::External(external) => {
                let (width, height) = external.dimensions();
                if width == 0 || height == 0 {
                    return Err(ProbeError::Unsupported);
                }
                Ok(Size::new(width as f32, height as f32))
            }
            ResultKind::Local(local) => {
                if !local.file_exists {
                    return Err(ProbeError::NotFound);
                }
                let (width, height) =
                    image_rs::image_dimensions(&local.file_path).map_err(|err| match err {
                        ImageError::IoError(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                            ProbeError::NotFound
                        }
                        ImageError::Unsupported(_) => ProbeError::Unsupported,
                        other => ProbeError::Decode(other.to_string()),
                    })?;
                Ok(Size::new(width as f32, height as f32))
            }
        }
    }
}
