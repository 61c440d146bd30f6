use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

use crate::config::Config;
use crate::core::{fetch_video_info, DumpOptions, DumpSink};
use crate::sources::YouTubeSource;
use crate::utils::render_json;

#[derive(Parser, Debug)]
#[command(name = "ytinfo")]
#[command(about = "Fetch YouTube video info as reduced JSON")]
#[command(version)]
pub struct Cli {
    /// Command to execute on the link (only video info retrieval is
    /// implemented)
    #[arg(value_name = "CMD")]
    pub cmd: String,

    /// Link of the video: a watch/short URL or a bare 11 character video id
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Disable the structured (Debug) dump line
    #[arg(short = 'p', long)]
    pub no_struct_dump: bool,

    /// Disable the JSON dump line
    #[arg(short = 'j', long)]
    pub no_json_dump: bool,

    /// Debug log FILE, ignored unless '-d' is present
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = "ytinfo_debug.txt")]
    pub debug_file: PathBuf,

    /// Write debug logs to FILE
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Log level, ignored unless '-d' is present
    #[arg(short = 'l', long, value_enum, default_value = "debug")]
    pub log_level: LogLevel,

    /// Separate the dumps from the log and append them to DUMPS_FILE,
    /// ignored unless '-d' is present
    #[arg(short = 's', long = "separate-dumps", value_name = "DUMPS_FILE")]
    pub dumps: Option<PathBuf>,

    /// Do not overwrite the dumps file on startup, append instead
    #[arg(short = 'n', long)]
    pub no_overwrite: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
}

impl LogLevel {
    fn as_level(self) -> tracing::Level {
        match self {
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Cli {
    /// Sets up the tracing subscriber. With '-d' logs go to the debug file,
    /// which is created fresh each run; otherwise the default stderr
    /// subscriber is used.
    pub fn init_tracing(&self) -> Result<()> {
        if self.debug {
            let file = File::create(&self.debug_file)?;
            tracing_subscriber::fmt()
                .with_max_level(self.log_level.as_level())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        } else {
            tracing_subscriber::fmt::init();
        }
        Ok(())
    }

    pub async fn run(&self) -> Result<()> {
        if self.debug {
            debug!("parsed options: {:?}", self);

            // Wipe the dumps file unless append mode was requested.
            if let Some(path) = &self.dumps {
                if !self.no_overwrite {
                    std::fs::write(path, "")?;
                }
            }
        }

        let options = self.dump_options();
        let config = Config::load()?;
        let source = YouTubeSource::new(&config);

        let info = fetch_video_info(&source, &self.link, &options).await?;
        println!("{}", render_json(&info)?);

        Ok(())
    }

    fn dump_options(&self) -> DumpOptions {
        DumpOptions {
            structured: !self.no_struct_dump,
            json: !self.no_json_dump,
            sink: match &self.dumps {
                Some(path) => DumpSink::File(path.clone()),
                None => DumpSink::Log,
            },
        }
    }
}
