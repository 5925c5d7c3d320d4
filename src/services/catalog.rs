// src/services/catalog.rs

//! Static class catalog and its display classification.

use crate::error::{AppError, Result};
use crate::models::{Category, CategoryGroup, Unit, UnitGroup, YearClass};

/// Class identifiers, in display order. Each one names a sheet.
pub const YEARS: [&str; 16] = [
    // Fundamental
    "6-ANO",
    "7-ANO",
    "8-ANO",
    "9-ANO",
    // Médio diurno
    "1-REG-DIURNO",
    "2-REG-DIURNO",
    "3-REG-DIURNO",
    // Médio noturno
    "1-REG-NOT-M",
    "2-REG-NOT-M",
    "3-REG-NOT-M",
    "1-REG-NOT-S",
    "2-REG-NOT-S",
    "3-REG-NOT-S",
    // EJA
    "2-EJA-S",
    "3-EJA-S",
    "2-EJA-M",
];

const fn class(year: &'static str, unit: Unit, category: Category) -> YearClass {
    YearClass {
        year,
        unit,
        category,
    }
}

/// Unit and category of every class in [`YEARS`].
pub const CLASSIFICATION: [YearClass; 16] = [
    class("6-ANO", Unit::Sede, Category::Fundamental),
    class("7-ANO", Unit::Sede, Category::Fundamental),
    class("8-ANO", Unit::Sede, Category::Fundamental),
    class("9-ANO", Unit::Sede, Category::Fundamental),
    class("1-REG-DIURNO", Unit::Sede, Category::MedioDiurno),
    class("2-REG-DIURNO", Unit::Sede, Category::MedioDiurno),
    class("3-REG-DIURNO", Unit::Sede, Category::MedioDiurno),
    class("1-REG-NOT-M", Unit::MoradaNova, Category::MedioNoturno),
    class("2-REG-NOT-M", Unit::MoradaNova, Category::MedioNoturno),
    class("3-REG-NOT-M", Unit::MoradaNova, Category::MedioNoturno),
    class("1-REG-NOT-S", Unit::Sede, Category::MedioNoturno),
    class("2-REG-NOT-S", Unit::Sede, Category::MedioNoturno),
    class("3-REG-NOT-S", Unit::Sede, Category::MedioNoturno),
    class("2-EJA-S", Unit::Sede, Category::Eja),
    class("3-EJA-S", Unit::Sede, Category::Eja),
    class("2-EJA-M", Unit::MoradaNova, Category::Eja),
];

/// Class list checked against its classification table.
#[derive(Debug, Clone)]
pub struct YearCatalog {
    years: &'static [&'static str],
    table: &'static [YearClass],
}

impl YearCatalog {
    /// Build the built-in catalog.
    pub fn new() -> Result<Self> {
        Self::with_table(&YEARS, &CLASSIFICATION)
    }

    /// Build a catalog from a class list and a classification table.
    ///
    /// Every class must be classified exactly once and the table may not
    /// name classes outside the list, so nothing silently drops out of the
    /// grouped display.
    pub fn with_table(
        years: &'static [&'static str],
        table: &'static [YearClass],
    ) -> Result<Self> {
        for (i, year) in years.iter().enumerate() {
            if years[..i].contains(year) {
                return Err(AppError::catalog(format!("class '{year}' is listed twice")));
            }
            match table.iter().filter(|entry| entry.year == *year).count() {
                1 => {}
                0 => {
                    return Err(AppError::catalog(format!(
                        "class '{year}' has no unit/category"
                    )));
                }
                n => {
                    return Err(AppError::catalog(format!(
                        "class '{year}' is classified {n} times"
                    )));
                }
            }
        }

        if let Some(stray) = table.iter().find(|entry| !years.contains(&entry.year)) {
            return Err(AppError::catalog(format!(
                "classification names unknown class '{}'",
                stray.year
            )));
        }

        Ok(Self { years, table })
    }

    /// Class identifiers in display order.
    pub fn years(&self) -> &'static [&'static str] {
        self.years
    }

    pub fn contains(&self, year: &str) -> bool {
        self.years.contains(&year)
    }

    pub fn classify(&self, year: &str) -> Option<&YearClass> {
        self.table.iter().find(|entry| entry.year == year)
    }

    /// Classes grouped by unit and category for display. Units and
    /// categories follow their display order; empty categories and units are
    /// left out.
    pub fn groups(&self) -> Vec<UnitGroup> {
        Unit::ALL
            .iter()
            .filter_map(|&unit| {
                let categories: Vec<CategoryGroup> = Category::ALL
                    .iter()
                    .filter_map(|&category| {
                        let years: Vec<&'static str> = self
                            .years
                            .iter()
                            .copied()
                            .filter(|year| {
                                self.classify(year).is_some_and(|entry| {
                                    entry.unit == unit && entry.category == category
                                })
                            })
                            .collect();
                        (!years.is_empty()).then_some(CategoryGroup { category, years })
                    })
                    .collect();
                (!categories.is_empty()).then_some(UnitGroup { unit, categories })
            })
            .collect()
    }
}
