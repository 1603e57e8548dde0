//! Sound effects for game events

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use game_core::{EventSink, GameEvent};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    PaddleHit,
    WallBounce,
    Score,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::PaddleHit, Sound::WallBounce, Sound::Score];

    pub fn file_name(self) -> &'static str {
        match self {
            Sound::PaddleHit => "paddle_hit.wav",
            Sound::WallBounce => "wall_bounce.wav",
            Sound::Score => "score.wav",
        }
    }

    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::WallHit => Sound::WallBounce,
            GameEvent::PaddleHit(_) => Sound::PaddleHit,
            GameEvent::Scored(_) => Sound::Score,
        }
    }
}

struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Decoded-once clips played on a shared output stream.
///
/// Any sound that failed to load is skipped silently at play time.
pub struct SoundBank {
    output: Option<Output>,
    clips: HashMap<Sound, Arc<[u8]>>,
}

impl SoundBank {
    /// A bank that plays nothing
    pub fn silent() -> Self {
        Self {
            output: None,
            clips: HashMap::new(),
        }
    }

    /// Open the default output device and load every clip from `dir`
    pub fn load(dir: &Path) -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("Sound disabled: {}", AudioError::from(e));
                return Self::silent();
            }
        };

        let clips = load_clips(dir);
        log::info!("Loaded {}/{} sounds from {}", clips.len(), Sound::ALL.len(), dir.display());
        Self { output, clips }
    }

    pub fn play(&self, sound: Sound) {
        let (Some(output), Some(clip)) = (&self.output, self.clips.get(&sound)) else {
            return;
        };
        let Ok(sink) = Sink::try_new(&output.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(clip.clone())) else {
            return;
        };
        sink.append(source);
        sink.detach();
    }
}

impl EventSink for SoundBank {
    fn on_event(&mut self, event: GameEvent) {
        self.play(Sound::for_event(event));
    }
}

fn load_clips(dir: &Path) -> HashMap<Sound, Arc<[u8]>> {
    let mut clips = HashMap::new();
    for sound in Sound::ALL {
        match load_clip(&dir.join(sound.file_name())) {
            Ok(bytes) => {
                clips.insert(sound, bytes);
            }
            Err(e) => log::warn!("Sound {:?} disabled: {}", sound, e),
        }
    }
    clips
}

/// Read a clip and make sure it decodes before keeping it
pub fn load_clip(path: &Path) -> Result<Arc<[u8]>, AudioError> {
    let bytes: Arc<[u8]> = std::fs::read(path)
        .map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .into();

    Decoder::new(Cursor::new(bytes.clone())).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes)
}

/// `assets/` next to the working directory, falling back to the workspace copy
pub fn assets_dir() -> PathBuf {
    let local = PathBuf::from("assets");
    if local.is_dir() {
        return local;
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("assets")
}
