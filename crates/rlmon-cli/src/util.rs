use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use rlmon_metrics::{episode::EpisodeDataset, metrics_log::MetricsLog};

/// Where a command writes its JSON result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Missing parent directories are created.
    File(PathBuf),
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        output_path
            .map_or(Output::Stdout, Output::File)
            .write_json(value)
    }

    fn write_json<T>(&self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        match self {
            Output::Stdout => write_pretty_json(io::stdout().lock(), value)
                .context("Failed to write JSON to stdout"),
            Output::File(path) => {
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    fs::create_dir_all(dir).with_context(|| {
                        format!("Failed to create output directory: {}", dir.display())
                    })?;
                }
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_pretty_json(BufWriter::new(file), value)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
                tracing::info!("wrote {}", path.display());
                Ok(())
            }
        }
    }
}

fn write_pretty_json<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

/// How a command presents its result on stdout.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as a table or as JSON.
///
/// When `output_path` is given the JSON goes to that file and nothing is
/// printed, whatever `format` says.
pub fn present<T, F>(
    value: &T,
    format: OutputFormat,
    output_path: Option<PathBuf>,
    print_table: F,
) -> anyhow::Result<()>
where
    T: serde::Serialize,
    F: FnOnce(&T),
{
    match (format, output_path) {
        (OutputFormat::Table, None) => {
            print_table(value);
            Ok(())
        }
        (_, output_path) => Output::save_json(value, output_path),
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {file_kind} file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Read a trainer metrics log and validate it into an episode dataset
///
/// A recorded best episode that disagrees with the records is logged as a
/// warning; the records win.
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed, or if any episode
/// record is invalid
pub fn read_metrics_file<P>(path: P) -> anyhow::Result<EpisodeDataset>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let log: MetricsLog = read_json_file("metrics", path)?;
    let dataset = log
        .to_dataset()
        .with_context(|| format!("Invalid episode data in {}", path.display()))?;

    if let Some(mismatch) = log.check_best(&dataset) {
        tracing::warn!("{}: {mismatch}", path.display());
    }
    tracing::info!(
        episodes = dataset.num_episodes(),
        "loaded metrics log {}",
        path.display()
    );

    Ok(dataset)
}
