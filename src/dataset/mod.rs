//! Numeric dataset loading and validation.
//!
//! Accepts either a JSON array of numbers or plain text in which numbers are
//! separated by whitespace, commas or semicolons. `#` starts a comment.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{BoxChartError, Result};

/// A validated, non-empty sequence of finite values in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Validates raw values.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the values are empty or any value is not finite.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(BoxChartError::InvalidInput(
                "dataset is empty".to_string(),
            ));
        }
        if let Some(position) = values.iter().position(|v| !v.is_finite()) {
            return Err(BoxChartError::InvalidInput(format!(
                "value #{} is not a finite number",
                position + 1
            )));
        }
        Ok(Self { values })
    }

    /// Parses a dataset from text, detecting the JSON array form.
    ///
    /// # Errors
    /// Returns an error if a token is not a number, the JSON is malformed,
    /// or the resulting dataset is invalid.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        let values = if trimmed.starts_with('[') {
            serde_json::from_str::<Vec<f64>>(trimmed)?
        } else {
            parse_delimited(text)?
        };
        Self::from_values(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

}

fn parse_delimited(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or_default();
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|token| !token.is_empty())
        {
            let value = token
                .parse::<f64>()
                .map_err(|_| BoxChartError::ParseNumber {
                    line: index + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Stdin,
    File(PathBuf),
}

impl DatasetSource {
    /// `-` selects standard input, anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Reads and parses the dataset.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or does not hold a valid dataset.
    pub fn load(&self) -> Result<Dataset> {
        let text = match self {
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|source| BoxChartError::FileRead {
                    path: path.clone(),
                    source,
                })?
            }
        };

        let dataset = Dataset::parse(&text)?;
        tracing::debug!(source = %self, values = dataset.len(), "loaded dataset");
        Ok(dataset)
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
