//! Running Circos on a configuration.

use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::str::FromStr;

use tempfile::NamedTempFile;
use tracing::debug;
use tracing::info;

use crate::config::Circos;

/// The directory images are written to by default.
const DEFAULT_DIRECTORY: &str = ".";

/// An error related to running Circos.
#[derive(Debug)]
pub enum Error {
    /// An I/O error (including a missing Circos executable).
    Io(io::Error),

    /// Circos exited unsuccessfully.
    ExitStatus(ExitStatus),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::ExitStatus(status) => write!(f, "circos failed: {status}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// An error where an image format is not supported.
#[derive(Debug, PartialEq)]
pub struct ParseFormatError(String);

impl std::fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported image format: {}", self.0)
    }
}

impl std::error::Error for ParseFormatError {}

/// The format of the produced image.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    /// A PNG image.
    Png,
    /// An SVG image.
    #[default]
    Svg,
}

impl Format {
    /// Gets the file extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "png" => Ok(Format::Png),
            "svg" => Ok(Format::Svg),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Runs a Circos installation on configurations.
///
/// # Examples
///
/// ```
/// use circosconf::render::Format;
/// use circosconf::render::Renderer;
///
/// let renderer = Renderer::new("/opt/circos").format(Format::Png).directory("plots");
/// let command = renderer.command("circos.conf", "genome");
///
/// assert_eq!(command.get_program(), "/opt/circos/bin/circos");
/// assert_eq!(
///     command.get_args().collect::<Vec<_>>(),
///     ["-config", "circos.conf", "-png", "-dir", "plots", "-file", "genome"]
/// );
/// assert_eq!(renderer.output("genome").to_str(), Some("plots/genome.png"));
/// ```
#[derive(Clone, Debug)]
pub struct Renderer {
    /// The root of the Circos installation.
    circos_path: PathBuf,
    /// The image format.
    format: Format,
    /// The directory images are written to.
    directory: PathBuf,
}

impl Renderer {
    /// Creates a renderer for the Circos installation rooted at
    /// `circos_path`.
    pub fn new(circos_path: impl Into<PathBuf>) -> Self {
        Self {
            circos_path: circos_path.into(),
            format: Format::default(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
        }
    }

    /// Sets the image format.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the directory images are written to.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Gets the path of the Circos executable.
    pub fn executable(&self) -> PathBuf {
        self.circos_path.join("bin").join("circos")
    }

    /// Gets the path of the image named `name`.
    pub fn output(&self, name: &str) -> PathBuf {
        self.directory
            .join(format!("{name}.{}", self.format.extension()))
    }

    /// Builds the command that renders the configuration at `config` to the
    /// image named `name`.
    pub fn command(&self, config: impl AsRef<Path>, name: &str) -> Command {
        let mut command = Command::new(self.executable());

        command
            .arg("-config")
            .arg(config.as_ref())
            .arg(format!("-{}", self.format.extension()))
            .arg("-dir")
            .arg(&self.directory)
            .arg("-file")
            .arg(name);

        command
    }

    /// Renders `circos` to the image named `name` and returns the path of the
    /// image.
    ///
    /// The configuration is written to a temporary file that is removed once
    /// Circos exits.
    pub fn render(&self, circos: &Circos, name: &str) -> Result<PathBuf> {
        let mut config = NamedTempFile::new().map_err(Error::Io)?;
        write!(config, "{circos}").map_err(Error::Io)?;
        config.flush().map_err(Error::Io)?;

        let mut command = self.command(config.path(), name);
        debug!(?command, "running circos");

        let status = command.status().map_err(Error::Io)?;

        if !status.success() {
            return Err(Error::ExitStatus(status));
        }

        let output = self.output(name);
        info!(output = %output.display(), "rendered image");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use crate::Karyotype;
    use crate::config::circos::Builder;
    use crate::karyotype::Chromosome;
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!("png".parse::<Format>(), Ok(Format::Png));
        assert_eq!("svg".parse::<Format>(), Ok(Format::Svg));
        assert_eq!(
            "gif".parse::<Format>(),
            Err(ParseFormatError(String::from("gif")))
        );
        assert_eq!(Format::default().to_string(), "svg");
    }

    #[test]
    fn test_default_directory() {
        let renderer = Renderer::new("circos-0.69");
        assert_eq!(renderer.output("plot"), Path::new("./plot.svg"));
        assert_eq!(
            renderer.executable(),
            Path::new("circos-0.69").join("bin").join("circos")
        );
    }

    #[test]
    fn test_missing_executable() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let directory = tempfile::tempdir()?;
        let circos = Builder::default()
            .karyotype(Karyotype::from(vec![
                Chromosome::new("hs1", "1", 0, 100, "red").into(),
            ]))
            .try_build()?;

        let err = Renderer::new(directory.path())
            .render(&circos, "plot")
            .unwrap_err();
        assert!(matches!(err, Error::Io(ref err) if err.kind() == io::ErrorKind::NotFound));

        Ok(())
    }
}
