use sdp_types::MediaType;
use std::borrow::Cow;

/// Payload type number mapped to an encoding formatted as `name/clock-rate[/channels]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecMapping {
    pub payload: u8,
    pub encoding: Cow<'static, str>,
}

impl CodecMapping {
    pub const fn new(payload: u8, encoding: &'static str) -> Self {
        Self {
            payload,
            encoding: Cow::Borrowed(encoding),
        }
    }

    /// The encoding name, e.g. `OPUS` for `OPUS/48000/2`
    pub fn name(&self) -> &str {
        self.encoding.split('/').next().unwrap_or(&self.encoding)
    }
}

const DEFAULT_AUDIO: [CodecMapping; 3] = [
    CodecMapping::new(98, "OPUS/48000/2"),
    CodecMapping::new(99, "AMR/8000/1"),
    CodecMapping::new(0, "PCMU/8000"),
];

const DEFAULT_VIDEO: [CodecMapping; 4] = [
    CodecMapping::new(96, "H263-1998/90000"),
    CodecMapping::new(97, "VP8/90000"),
    CodecMapping::new(100, "MP4V-ES/90000"),
    CodecMapping::new(101, "H264/90000"),
];

/// Ordered lists of codecs the local side offers and accepts, per media type
///
/// [`Default`] contains the built-in lists. The catalog is read-only during negotiation and can be
/// shared between handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecCatalog {
    audio: Vec<CodecMapping>,
    video: Vec<CodecMapping>,
}

impl Default for CodecCatalog {
    fn default() -> Self {
        Self {
            audio: DEFAULT_AUDIO.to_vec(),
            video: DEFAULT_VIDEO.to_vec(),
        }
    }
}

impl CodecCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            audio: vec![],
            video: vec![],
        }
    }

    pub fn with_audio(mut self, payload: u8, encoding: impl Into<Cow<'static, str>>) -> Self {
        self.add(MediaType::Audio, payload, encoding);
        self
    }

    pub fn with_video(mut self, payload: u8, encoding: impl Into<Cow<'static, str>>) -> Self {
        self.add(MediaType::Video, payload, encoding);
        self
    }

    /// Append a codec to the list of `media_type`. Media types other than audio & video are ignored.
    pub fn add(
        &mut self,
        media_type: MediaType,
        payload: u8,
        encoding: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let mapping = CodecMapping {
            payload,
            encoding: encoding.into(),
        };

        match media_type {
            MediaType::Audio => self.audio.push(mapping),
            MediaType::Video => self.video.push(mapping),
            _ => log::warn!("Ignoring codec {} for {media_type} media", mapping.encoding),
        }

        self
    }

    /// Codecs of the media type in the order they are offered
    pub fn formats_for(&self, media_type: MediaType) -> &[CodecMapping] {
        match media_type {
            MediaType::Audio => &self.audio,
            MediaType::Video => &self.video,
            _ => &[],
        }
    }

    /// Find the codec using the payload type `payload`
    pub fn find(&self, media_type: MediaType, payload: u8) -> Option<&CodecMapping> {
        self.formats_for(media_type)
            .iter()
            .find(|mapping| mapping.payload == payload)
    }

    /// Returns if any codec of the media type matches the encoding, see [`encoding_matches`]
    pub fn supports_encoding(&self, media_type: MediaType, encoding: &str) -> bool {
        self.formats_for(media_type)
            .iter()
            .any(|mapping| encoding_matches(encoding, &mapping.encoding))
    }
}

/// Compare two `name/clock-rate[/channels]` encodings component by component, as far as the
/// shorter one goes. Comparison is case-sensitive.
///
/// `VP8` matches `VP8/90000` and `PCMU/8000/1` matches `PCMU/8000`, but `VP8/180000` does not
/// match `VP8/90000`.
pub fn encoding_matches(a: &str, b: &str) -> bool {
    a.split('/').zip(b.split('/')).all(|(a, b)| a == b)
}
