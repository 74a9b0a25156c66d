//! Entity definitions: per-resource tables and their filter sets.

use crate::error::{Error, Result};

/// Comparison semantics for a filter. Membership-in-set is the only kind
/// the list endpoints expose today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Row matches when the target column's value is a member of the
    /// supplied candidate list.
    MemberOf,
}

/// One named, optional, field-targeted predicate.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    /// Public filter name, as exposed on the list endpoints.
    pub name: &'static str,
    /// Column the filter compares against.
    pub column: &'static str,
    pub kind: FilterKind,
}

const fn member_of(name: &'static str, column: &'static str) -> FilterSpec {
    FilterSpec {
        name,
        column,
        kind: FilterKind::MemberOf,
    }
}

/// A resource type: its table plus the complete filter set valid for it.
#[derive(Debug, Clone, Copy)]
pub struct EntityDef {
    pub resource: &'static str,
    pub table: &'static str,
    pub filters: &'static [FilterSpec],
}

impl EntityDef {
    /// Looks up a filter specification by its public name.
    pub fn filter(&self, name: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|spec| spec.name == name)
    }
}

pub const AIRPORTS: EntityDef = EntityDef {
    resource: "airports",
    table: "airports",
    filters: &[
        member_of("airport_id", "id"),
        member_of("city", "city"),
        member_of("country", "country"),
    ],
};

pub const AIRLINES: EntityDef = EntityDef {
    resource: "airlines",
    table: "airlines",
    filters: &[
        member_of("airline_id", "id"),
        member_of("name", "name"),
        member_of("alliance", "alliance"),
    ],
};

// Airport filters are supplied as IATA codes and resolved to ids before
// composition, hence the id-typed target columns.
pub const FLIGHTS: EntityDef = EntityDef {
    resource: "flights",
    table: "flights",
    filters: &[
        member_of("departure_airport", "departure_airport_id"),
        member_of("arrival_airport", "arrival_airport_id"),
        member_of("departure_date", "departure_date"),
        member_of("arrival_date", "arrival_date"),
    ],
};

pub const PASSENGERS: EntityDef = EntityDef {
    resource: "passengers",
    table: "passengers",
    filters: &[
        member_of("passenger_id", "id"),
        member_of("first_name", "first_name"),
        member_of("last_name", "last_name"),
        member_of("passport_number", "passport_number"),
    ],
};

const BUILTIN: &[EntityDef] = &[AIRPORTS, AIRLINES, FLIGHTS, PASSENGERS];

/// Immutable registry mapping resource names to their definitions.
///
/// The entity set is fixed at compile time; the registry exists so callers
/// resolve resources through one strict lookup path.
#[derive(Debug, Clone, Copy)]
pub struct EntityRegistry {
    defs: &'static [EntityDef],
}

impl EntityRegistry {
    pub fn builtin() -> Self {
        Self { defs: BUILTIN }
    }

    /// Resolves a resource name, failing for anything not registered.
    pub fn get(&self, resource: &str) -> Result<&'static EntityDef> {
        self.defs
            .iter()
            .find(|def| def.resource == resource)
            .ok_or_else(|| Error::InvalidResourceType(resource.to_string()))
    }

    pub fn resources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|def| def.resource)
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_all_builtin_resources() {
        let registry = EntityRegistry::builtin();
        for resource in ["airports", "airlines", "flights", "passengers"] {
            let def = registry.get(resource).unwrap();
            assert_eq!(def.resource, resource);
        }
        assert_eq!(registry.resources().count(), 4);
    }

    #[test]
    fn unknown_resource_is_rejected() {
        let registry = EntityRegistry::builtin();
        let err = registry.get("bookings").unwrap_err();
        assert!(matches!(err, Error::InvalidResourceType(ref r) if r == "bookings"));
    }

    #[test]
    fn filter_sets_match_the_documented_contract() {
        let names = |def: &EntityDef| -> Vec<&str> {
            def.filters.iter().map(|s| s.name).collect()
        };
        assert_eq!(names(&AIRPORTS), ["airport_id", "city", "country"]);
        assert_eq!(names(&AIRLINES), ["airline_id", "name", "alliance"]);
        assert_eq!(
            names(&FLIGHTS),
            ["departure_airport", "arrival_airport", "departure_date", "arrival_date"]
        );
        assert_eq!(
            names(&PASSENGERS),
            ["passenger_id", "first_name", "last_name", "passport_number"]
        );
    }

    #[test]
    fn filter_lookup_targets_the_right_column() {
        let spec = FLIGHTS.filter("departure_airport").unwrap();
        assert_eq!(spec.column, "departure_airport_id");
        assert_eq!(spec.kind, FilterKind::MemberOf);
        assert!(FLIGHTS.filter("fare").is_none());
    }
}
