//! Region codes and the state picker
//!
//! A region is a Brazilian federative unit (UF) identified by its two-letter
//! abbreviation. The code is the cache key and the path segment of the
//! geography service request.

pub mod region_events;
pub mod region_render;
pub mod region_state;

pub use region_state::RegionState;

use std::fmt;

use crate::error::MuniError;

/// A federative unit: abbreviation plus display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub code: &'static str,
    pub name: &'static str,
}

/// All 27 federative units, ordered by code
pub const STATES: [State; 27] = [
    State { code: "AC", name: "Acre" },
    State { code: "AL", name: "Alagoas" },
    State { code: "AM", name: "Amazonas" },
    State { code: "AP", name: "Amapá" },
    State { code: "BA", name: "Bahia" },
    State { code: "CE", name: "Ceará" },
    State { code: "DF", name: "Distrito Federal" },
    State { code: "ES", name: "Espírito Santo" },
    State { code: "GO", name: "Goiás" },
    State { code: "MA", name: "Maranhão" },
    State { code: "MG", name: "Minas Gerais" },
    State { code: "MS", name: "Mato Grosso do Sul" },
    State { code: "MT", name: "Mato Grosso" },
    State { code: "PA", name: "Pará" },
    State { code: "PB", name: "Paraíba" },
    State { code: "PE", name: "Pernambuco" },
    State { code: "PI", name: "Piauí" },
    State { code: "PR", name: "Paraná" },
    State { code: "RJ", name: "Rio de Janeiro" },
    State { code: "RN", name: "Rio Grande do Norte" },
    State { code: "RO", name: "Rondônia" },
    State { code: "RR", name: "Roraima" },
    State { code: "RS", name: "Rio Grande do Sul" },
    State { code: "SC", name: "Santa Catarina" },
    State { code: "SE", name: "Sergipe" },
    State { code: "SP", name: "São Paulo" },
    State { code: "TO", name: "Tocantins" },
];

/// Two-letter state abbreviation, always uppercase and always one of [`STATES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionCode(&'static str);

impl RegionCode {
    /// Parse a code case-insensitively, surrounding whitespace ignored
    pub fn parse(input: &str) -> Result<Self, MuniError> {
        let trimmed = input.trim();
        STATES
            .iter()
            .find(|state| state.code.eq_ignore_ascii_case(trimmed))
            .map(|state| RegionCode(state.code))
            .ok_or_else(|| MuniError::InvalidRegion(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Position of this code within [`STATES`]
    pub fn index(&self) -> usize {
        STATES
            .iter()
            .position(|state| state.code == self.0)
            .unwrap_or(0)
    }

    pub fn state(&self) -> State {
        STATES[self.index()]
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<State> for RegionCode {
    fn from(state: State) -> Self {
        RegionCode(state.code)
    }
}
