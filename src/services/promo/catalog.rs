use std::{collections::HashMap, io, path::Path};

use rust_decimal::Decimal;

use crate::models::promo::PromoResult;

use super::interface::{PromoError, PromoLookup};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read promo file: {0}")]
    Io(#[from] io::Error),

    #[error("promo file header is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("invalid promo row on line {line}: {content}")]
    InvalidRow { line: usize, content: String },
}

/// Promo codes loaded from a `code,discount` CSV file.
#[derive(Debug, Default)]
pub struct PromoCatalog {
    codes: HashMap<String, Decimal>,
}

impl PromoCatalog {
    /// Reads the catalog. A missing file is not an error; every code is then invalid.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let catalog = Self::parse(&contents)?;
                log::info!(
                    "Loaded {} promo codes from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(catalog)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("Promo file {} not found, no promo codes will be accepted", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Rows are split on bare commas. Quoted fields are not supported, so codes and
    /// discounts must not contain commas.
    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let header: Vec<String> = match lines.next() {
            Some((_, header)) => header
                .split(',')
                .map(|column| column.trim().to_lowercase())
                .collect(),
            None => return Ok(Self::default()),
        };
        let code_idx = column_index(&header, "code")?;
        let discount_idx = column_index(&header, "discount")?;

        let mut codes = HashMap::new();
        for (line, row) in lines {
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            let invalid = || CatalogError::InvalidRow {
                line,
                content: row.to_string(),
            };

            let code = fields
                .get(code_idx)
                .filter(|code| !code.is_empty())
                .ok_or_else(invalid)?;
            let discount: Decimal = fields
                .get(discount_idx)
                .and_then(|discount| discount.parse().ok())
                .filter(|discount| *discount >= Decimal::ZERO && *discount <= Decimal::ONE_HUNDRED)
                .ok_or_else(invalid)?;

            // First entry wins, matching a top-down scan of the file
            codes.entry(normalize(code)).or_insert(discount);
        }

        Ok(Self { codes })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn validate(&self, code: &str) -> PromoResult {
        match self.codes.get(&normalize(code)) {
            Some(discount) => PromoResult::valid(*discount),
            None => PromoResult::invalid(),
        }
    }
}

impl PromoLookup for PromoCatalog {
    async fn lookup(&self, code: &str) -> Result<PromoResult, PromoError> {
        Ok(self.validate(code))
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

fn column_index(header: &[String], name: &'static str) -> Result<usize, CatalogError> {
    header
        .iter()
        .position(|column| column == name)
        .ok_or(CatalogError::MissingColumn(name))
}
