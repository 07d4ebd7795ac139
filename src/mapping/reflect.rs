//! Field introspection over declared mappings
//!
//! Entities describe their fields through [`Mapped`]; this module turns
//! those declarations into column lists, literal value lists and the
//! projection clauses used by generated statements. Destination types get a
//! column-to-position map that is built once per type and cached.

use super::encode::encode;
use crate::model::{FieldSpec, FromRow, Mapped, Policy, V};
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::sync::{Arc, OnceLock, RwLock};

/// Mapped columns of an entity, in declared order
pub fn columns<M: Mapped + ?Sized>(entity: &M) -> Vec<&'static str> {
    entity
        .field_specs()
        .iter()
        .filter(|spec| spec.is_mapped())
        .map(|spec| spec.column)
        .collect()
}

/// Mapped columns and their current values rendered as literals.
///
/// Both lists have one entry per mapped field, in declared order. Values are
/// encoded without any identifier policy.
pub fn extract<M: Mapped + ?Sized>(entity: &M) -> (Vec<&'static str>, Vec<String>) {
    let specs = entity.field_specs();
    let values = entity.field_values();

    let mut columns = Vec::with_capacity(specs.len());
    let mut literals = Vec::with_capacity(specs.len());
    for (spec, value) in specs.iter().zip(values.iter()) {
        if spec.is_mapped() {
            columns.push(spec.column);
            literals.push(encode(value, Policy::None));
        }
    }
    (columns, literals)
}

/// `col as col` for every column, comma separated
pub fn yield_clause(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{} as {}", c, c))
        .collect::<Vec<_>>()
        .join(",")
}

/// `v.<tag>.col as col` for every column, comma separated
pub fn vertex_return_clause(tag: &str, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("{}.{}.{} as {}", V, tag, c, c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Column name to field position for one destination type
#[derive(Debug, Default)]
pub struct ColumnMap {
    positions: FxHashMap<&'static str, usize>,
}

impl ColumnMap {
    /// Build from declared fields; unmapped fields are left out
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        let positions = specs
            .iter()
            .enumerate()
            .filter(|(_, spec)| spec.is_mapped())
            .map(|(pos, spec)| (spec.column, pos))
            .collect();
        Self { positions }
    }

    /// Field position for a column, if the column is mapped
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

type ColumnMapCache = RwLock<FxHashMap<TypeId, Arc<ColumnMap>>>;

fn cache() -> &'static ColumnMapCache {
    static CACHE: OnceLock<ColumnMapCache> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Column map for `T`, computed on first use
pub fn column_map<T: FromRow>() -> Arc<ColumnMap> {
    let key = TypeId::of::<T>();

    {
        let guard = cache().read().unwrap_or_else(|e| e.into_inner());
        if let Some(map) = guard.get(&key) {
            return Arc::clone(map);
        }
    }

    let mut guard = cache().write().unwrap_or_else(|e| e.into_inner());
    Arc::clone(
        guard
            .entry(key)
            .or_insert_with(|| Arc::new(ColumnMap::from_specs(T::specs()))),
    )
}
