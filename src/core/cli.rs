//! Command line interface for the atlas generation pipeline
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs before any generation work starts.

use clap::Parser;
use std::path::PathBuf;

/// sdf-fontgen CLI arguments
///
/// Examples:
///   sdf-fontgen                          # Convert everything in ./font-src
///   sdf-fontgen --font-src assets/fonts  # Read sources from another directory
///   sdf-fontgen --tool ./bin/msdf-bmfont # Use a specific tool binary
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "sdf-fontgen",
    version,
    about = "Batch MSDF/SSDF font atlas generation",
    long_about = "Converts every vector font in the source directory into a pair of signed-distance-field bitmap atlases (msdf and ssdf) by driving the external msdf-bmfont tool, then renames the results into the destination directory."
)]
pub struct CliArgs {
    /// Directory holding the font sources, overrides.json and charset.txt
    #[clap(
        long = "font-src",
        default_value = "font-src",
        help = "Source directory with font files"
    )]
    pub font_src: PathBuf,

    /// Directory the finished atlases are written into (created if absent)
    #[clap(
        long = "font-dst",
        default_value = "font-dst",
        help = "Destination directory for generated atlases"
    )]
    pub font_dst: PathBuf,

    /// Name or path of the external atlas generation binary
    #[clap(
        long = "tool",
        default_value = "msdf-bmfont",
        help = "Atlas generation tool to invoke"
    )]
    pub tool: String,

    /// Charset file passed verbatim to the tool
    ///
    /// Defaults to `<font-src>/charset.txt`.
    #[clap(long = "charset", help = "Charset file for the tool")]
    pub charset: Option<PathBuf>,

    /// Per-font parameter overrides document
    ///
    /// Defaults to `<font-src>/overrides.json`. The document is required;
    /// a run cannot start without it.
    #[clap(long = "overrides", help = "Overrides JSON document")]
    pub overrides: Option<PathBuf>,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures the source directory exists before the pipeline starts,
    /// providing a clear error message for the most common mistake.
    pub fn validate(&self) -> Result<(), String> {
        if !self.font_src.exists() {
            return Err(format!(
                "Source directory does not exist: {}\nMake sure the path is correct, or pass --font-src.",
                self.font_src.display()
            ));
        }
        if !self.font_src.is_dir() {
            return Err(format!(
                "Source path is not a directory: {}",
                self.font_src.display()
            ));
        }
        Ok(())
    }

    /// Charset path, defaulting into the source directory
    pub fn charset_path(&self) -> PathBuf {
        self.charset
            .clone()
            .unwrap_or_else(|| self.font_src.join("charset.txt"))
    }

    /// Overrides document path, defaulting into the source directory
    pub fn overrides_path(&self) -> PathBuf {
        self.overrides
            .clone()
            .unwrap_or_else(|| self.font_src.join("overrides.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(src: PathBuf) -> CliArgs {
        CliArgs {
            font_src: src,
            font_dst: PathBuf::from("font-dst"),
            tool: "msdf-bmfont".to_string(),
            charset: None,
            overrides: None,
        }
    }

    #[test]
    fn validate_rejects_missing_source_directory() {
        let args = args_for(PathBuf::from("/definitely/not/here"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("font-src");
        std::fs::write(&file, "").unwrap();
        let args = args_for(file);
        assert!(args.validate().is_err());
    }

    #[test]
    fn charset_and_overrides_default_into_source_directory() {
        let args = args_for(PathBuf::from("assets"));
        assert_eq!(args.charset_path(), PathBuf::from("assets/charset.txt"));
        assert_eq!(args.overrides_path(), PathBuf::from("assets/overrides.json"));
    }

    #[test]
    fn explicit_charset_and_overrides_win() {
        let mut args = args_for(PathBuf::from("assets"));
        args.charset = Some(PathBuf::from("/etc/charset.txt"));
        args.overrides = Some(PathBuf::from("/etc/overrides.json"));
        assert_eq!(args.charset_path(), PathBuf::from("/etc/charset.txt"));
        assert_eq!(args.overrides_path(), PathBuf::from("/etc/overrides.json"));
    }
}
