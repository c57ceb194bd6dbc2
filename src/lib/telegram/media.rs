use serde::{Deserialize, Serialize};

/// Remote file descriptor shared by every attachment kind.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct File {
    pub file_id: String,
    pub file_size: u64,
    // only filled in by getFile
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file_path: String,
}

impl File {
    pub fn new(file_id: &str) -> Self {
        File {
            file_id: file_id.to_string(),
            ..Default::default()
        }
    }
}

/// A photo, or one size variant of it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    #[serde(flatten)]
    pub file: File,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Audio {
    #[serde(flatten)]
    pub file: File,
    /// Duration in seconds as defined by the sender.
    pub duration: u32,
    pub title: String,
    pub performer: String,
    #[serde(rename = "mime_type")]
    pub mime: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Voice {
    #[serde(flatten)]
    pub file: File,
    pub duration: u32,
    #[serde(rename = "mime_type")]
    pub mime: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

/// A general file, as opposed to photos, voice notes and audio.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Document {
    #[serde(flatten)]
    pub file: File,
    #[serde(rename = "thumb")]
    pub preview: Photo,
    pub file_name: String,
    #[serde(rename = "mime_type")]
    pub mime: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Sticker {
    #[serde(flatten)]
    pub file: File,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "thumb")]
    pub thumbnail: Photo,
    pub emoji: String,
}

/// An MP4 video: the audio fields plus its visual ones.
///
/// The wire object has a single `caption` key owned by the video itself,
/// `audio.caption` is never written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, into = "VideoWire")]
pub struct Video {
    #[serde(flatten)]
    pub audio: Audio,
    pub width: u32,
    pub height: u32,
    pub caption: String,
    #[serde(rename = "thumb")]
    pub thumbnail: Photo,
}

#[derive(Serialize)]
struct VideoWire {
    #[serde(flatten)]
    file: File,
    duration: u32,
    title: String,
    performer: String,
    #[serde(rename = "mime_type")]
    mime: String,
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    caption: String,
    #[serde(rename = "thumb")]
    thumbnail: Photo,
}

impl From<Video> for VideoWire {
    fn from(video: Video) -> Self {
        let Audio {
            file,
            duration,
            title,
            performer,
            mime,
            ..
        } = video.audio;
        VideoWire {
            file,
            duration,
            title,
            performer,
            mime,
            width: video.width,
            height: video.height,
            caption: video.caption,
            thumbnail: video.thumbnail,
        }
    }
}

impl Video {
    pub fn file(&self) -> &File {
        &self.audio.file
    }

    pub fn duration(&self) -> u32 {
        self.audio.duration
    }

    pub fn mime(&self) -> &str {
        &self.audio.mime
    }
}

/// Round video message.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VideoNote {
    #[serde(flatten)]
    pub file: File,
    pub duration: u32,
    #[serde(rename = "thumb")]
    pub thumbnail: Photo,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub user_id: i64,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
}

/// Coordinates are sent by the service with single precision.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    #[serde(rename = "latitude")]
    pub lat: f32,
    #[serde(rename = "longitude")]
    pub lng: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub foursquare_id: String,
}
