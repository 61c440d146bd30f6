pub mod decoder;
pub mod dump;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod pipeline;

pub use decoder::{decode, decode_and_filter, filter};
pub use dump::{DumpOptions, DumpSink};
pub use error::InfoError;
pub use extractor::{extract_video_id, VideoId};
pub use metadata::{RawInfo, VideoInfo};
pub use pipeline::{fetch_video_info, InfoSource};
