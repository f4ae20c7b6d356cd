//! The process-wide registry of valid unit strings.
//!
//! Built once on first access by folding every category's values together
//! with the standalone constants. Strings appearing in more than one
//! category (e.g. "m" is both meters and months) collapse into a single
//! entry; the registry tracks membership only, not provenance. Read-only
//! after construction, so it is freely shared across threads.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::units::catalog::*;

lazy_static! {
    static ref UNITS_OF_MEASURE: HashSet<&'static str> = {
        let mut units = HashSet::new();
        units.extend(UnitOfApparentPower::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfPower::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfEnergy::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfElectricCurrent::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfElectricPotential::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfTemperature::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfTime::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfFrequency::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfPressure::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfVolume::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfVolumeFlowRate::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfLength::ALL.iter().map(|u| u.value()));
        units.extend(UnitOfMass::ALL.iter().map(|u| u.value()));
        units.extend(STANDALONE_UNITS);
        units
    };
}

/// Check whether `candidate` is a registered unit. Exact, case-sensitive.
pub fn contains(candidate: &str) -> bool {
    UNITS_OF_MEASURE.contains(candidate)
}

/// Look up the registry's stored string for `candidate`, if registered.
pub fn canonical(candidate: &str) -> Option<&'static str> {
    UNITS_OF_MEASURE.get(candidate).copied()
}

/// Every canonical unit string, sorted for stable diagnostics.
pub fn canonical_units() -> Vec<&'static str> {
    let mut units: Vec<&'static str> = UNITS_OF_MEASURE.iter().copied().collect();
    units.sort_unstable();
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_member_is_registered() {
        for unit in UnitOfTemperature::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfMass::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfPressure::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfPower::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfApparentPower::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfElectricCurrent::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfElectricPotential::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfFrequency::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfVolumeFlowRate::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfVolume::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfTime::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfLength::ALL {
            assert!(contains(unit.value()));
        }
        for unit in UnitOfEnergy::ALL {
            assert!(contains(unit.value()));
        }
        for unit in STANDALONE_UNITS {
            assert!(contains(unit));
        }
    }

    #[test]
    fn test_duplicates_across_categories_collapse() {
        // "m" is both UnitOfLength::Meters and UnitOfTime::Months
        assert_eq!(UnitOfLength::Meters.value(), UnitOfTime::Months.value());
        let units = canonical_units();
        assert_eq!(units.iter().filter(|u| **u == "m").count(), 1);
    }

    #[test]
    fn test_canonical_returns_stored_string() {
        assert_eq!(canonical("W"), Some("W"));
        assert_eq!(canonical("%"), Some("%"));
        assert_eq!(canonical("fakeunit"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(contains("kWh"));
        assert!(!contains("kwh"));
        assert!(!contains("KWH"));
        assert!(contains("%"));
        assert!(!contains("% "));
        assert!(!contains(" %"));
    }

    #[test]
    fn test_enumeration_is_sorted_and_unique() {
        let units = canonical_units();
        let mut sorted = units.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(units, sorted);
    }
}
