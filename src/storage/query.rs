//! Conjunctive filter composition for list queries.
//!
//! One mechanism serves every resource type: start from the full collection,
//! append one `column = ANY(...)` conjunct per supplied filter, then bound
//! the result size. A filter that was not supplied contributes nothing; a
//! filter supplied with an empty candidate list binds an empty array and
//! matches nothing. Rows always come back in primary-key ascending order so
//! repeated identical calls against an unchanged store return identical
//! sequences.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::{EntityDef, FilterKind, FilterMap, FilterValue};
use crate::error::{Error, Result};

/// Row cap applied when a caller does not supply one.
pub const DEFAULT_CAP: u32 = 100;

/// Hard upper bound on the number of rows a single list call may return.
/// Caller-supplied caps are clamped, not rejected.
pub const MAX_CAP: u32 = 1_000;

pub(crate) fn effective_cap(cap: u32) -> i64 {
    i64::from(cap.min(MAX_CAP))
}

/// Builds the minimal query applying exactly the supplied filters, in AND
/// combination. Filter names not in the resource's filter set are rejected.
pub fn build_list_query(
    def: &EntityDef,
    filters: &FilterMap,
    cap: u32,
) -> Result<QueryBuilder<'static, Postgres>> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM ");
    qb.push(def.table);

    let mut first = true;
    for (name, value) in filters.iter() {
        let spec = def
            .filter(name)
            .ok_or_else(|| Error::invalid_filter(def.resource, name))?;
        qb.push(if first { " WHERE " } else { " AND " });
        first = false;

        match spec.kind {
            FilterKind::MemberOf => {
                qb.push(spec.column);
                qb.push(" = ANY(");
                match value {
                    FilterValue::Ints(values) => qb.push_bind(values.clone()),
                    FilterValue::Texts(values) => qb.push_bind(values.clone()),
                };
                qb.push(")");
            }
        }
    }

    qb.push(" ORDER BY id ASC LIMIT ");
    qb.push_bind(effective_cap(cap));
    Ok(qb)
}
