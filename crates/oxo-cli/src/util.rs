use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::Context as _;

/// Destination of a JSON report: stdout, or a file when a path is given.
#[derive(Debug)]
pub enum Output {
    Stdout,
    File { writer: BufWriter<File>, path: PathBuf },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Output::Stdout);
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let display_path = self.display_path();
        let result = match self {
            Output::Stdout => write_json_to(&mut io::stdout().lock(), value),
            Output::File { writer, .. } => write_json_to(writer, value),
        };
        result.with_context(|| format!("Failed to write JSON to {display_path}"))
    }
}

fn write_json_to<W, T>(writer: &mut W, value: &T) -> anyhow::Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
