//! Image picking for tile drafts.
//!
//! # Invariants
//! - A cancelled pick leaves the draft unchanged.
//! - A picked image replaces the draft icon.

use crate::model::tile::TileDraft;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const CAMERA_PERMISSION_MESSAGE: &str = "Camera permission is required to take photos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

/// Options passed to the platform picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    pub images_only: bool,
    pub allows_editing: bool,
    /// Crop aspect as `(width, height)`.
    pub aspect: (u32, u32),
    pub quality: f32,
    pub camera: CameraFacing,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            images_only: true,
            allows_editing: true,
            aspect: (1, 1),
            quality: 0.8,
            camera: CameraFacing::Back,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked { uri: String },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    PermissionDenied,
    /// Platform picker failed.
    Picker(String),
}

impl Display for MediaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "{CAMERA_PERMISSION_MESSAGE}"),
            Self::Picker(message) => write!(f, "image picker failed: {message}"),
        }
    }
}

impl Error for MediaError {}

/// Platform image picker.
pub trait MediaPicker {
    fn pick_from_library(&self, options: &PickerOptions) -> Result<PickOutcome, MediaError>;
    fn pick_from_camera(&self, options: &PickerOptions) -> Result<PickOutcome, MediaError>;
    /// Returns whether camera access is granted.
    fn request_camera_permission(&self) -> bool;
}

/// Picks a library image into `draft`. Returns whether the draft changed.
pub fn attach_library_image(
    picker: &impl MediaPicker,
    draft: &mut TileDraft,
) -> Result<bool, MediaError> {
    let outcome = picker.pick_from_library(&PickerOptions::default())?;
    Ok(apply_outcome(outcome, draft))
}

/// Takes a photo into `draft`, asking for permission first when required.
pub fn attach_camera_image(
    picker: &impl MediaPicker,
    draft: &mut TileDraft,
    require_permission: bool,
) -> Result<bool, MediaError> {
    if require_permission && !picker.request_camera_permission() {
        warn!("event=camera_pick module=media status=denied");
        return Err(MediaError::PermissionDenied);
    }
    let outcome = picker.pick_from_camera(&PickerOptions::default())?;
    Ok(apply_outcome(outcome, draft))
}

fn apply_outcome(outcome: PickOutcome, draft: &mut TileDraft) -> bool {
    match outcome {
        PickOutcome::Picked { uri } if !uri.trim().is_empty() => {
            draft.image_url = Some(uri);
            draft.icon = None;
            debug!("event=image_pick module=media status=ok");
            true
        }
        _ => false,
    }
}
