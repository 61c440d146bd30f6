pub mod cli;
pub mod config;
pub mod core;
pub mod sources;
pub mod utils;

pub use crate::core::{
    decode, decode_and_filter, extract_video_id, fetch_video_info, filter, DumpOptions, DumpSink,
    InfoError, InfoSource, RawInfo, VideoId, VideoInfo,
};
pub use crate::sources::YouTubeSource;
