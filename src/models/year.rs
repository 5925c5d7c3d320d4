//! Class (year) classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// School unit a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    Sede,
    MoradaNova,
}

impl Unit {
    /// Display order of units.
    pub const ALL: [Unit; 2] = [Unit::Sede, Unit::MoradaNova];

    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Sede => "Sede",
            Unit::MoradaNova => "Morada Nova",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Teaching category inside a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Fundamental,
    MedioDiurno,
    MedioNoturno,
    Eja,
}

impl Category {
    /// Display order of categories within a unit.
    pub const ALL: [Category; 4] = [
        Category::Fundamental,
        Category::MedioDiurno,
        Category::MedioNoturno,
        Category::Eja,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fundamental => "Ensino Fundamental",
            Category::MedioDiurno => "Ensino Médio - Diurno",
            Category::MedioNoturno => "Ensino Médio - Noturno",
            Category::Eja => "EJA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the class classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearClass {
    pub year: &'static str,
    pub unit: Unit,
    pub category: Category,
}

/// Classes of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub years: Vec<&'static str>,
}

/// Non-empty categories of one unit, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitGroup {
    pub unit: Unit,
    pub categories: Vec<CategoryGroup>,
}
