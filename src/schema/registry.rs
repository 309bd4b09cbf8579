//! Ordered, read-mostly registry of tables, fields and functions

use std::collections::HashMap;

use super::capability::{FieldExtractor, FunctionExecutor, TableProvider};
use super::errors::{RegistryError, RegistryResult};

/// One registered table and its fields in registration order
struct TableEntry<S, R> {
    provider: Box<dyn TableProvider<S, R>>,
    fields: Vec<(String, Box<dyn FieldExtractor<R>>)>,
    field_index: HashMap<String, usize>,
}

/// Maps names to host-supplied capabilities.
///
/// `S` is the source handle passed to [`QueryExecutor::execute`], `R` the
/// row handle produced by providers and consumed by extractors. Every
/// table in one registry shares these types; a host with heterogeneous
/// records uses an enum for `R`.
///
/// [`QueryExecutor::execute`]: crate::executor::QueryExecutor::execute
pub struct SchemaRegistry<S, R> {
    tables: HashMap<String, TableEntry<S, R>>,
    functions: HashMap<String, Box<dyn FunctionExecutor>>,
}

impl<S, R> SchemaRegistry<S, R> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Registers a table and the provider that expands sources into its rows
    pub fn register_table<P>(&mut self, name: impl Into<String>, provider: P) -> RegistryResult<()>
    where
        P: TableProvider<S, R> + 'static,
    {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(RegistryError::DuplicateTable(name));
        }

        self.tables.insert(
            name,
            TableEntry {
                provider: Box::new(provider),
                fields: Vec::new(),
                field_index: HashMap::new(),
            },
        );
        Ok(())
    }

    /// Registers a field on an existing table.
    ///
    /// Fields keep the order in which they are registered.
    pub fn register_field<E>(
        &mut self,
        table: &str,
        field: impl Into<String>,
        extractor: E,
    ) -> RegistryResult<()>
    where
        E: FieldExtractor<R> + 'static,
    {
        let entry = self
            .tables
            .get_mut(table)
            .ok_or_else(|| RegistryError::UnknownTable(table.to_string()))?;

        let field = field.into();
        if entry.field_index.contains_key(&field) {
            return Err(RegistryError::DuplicateField {
                table: table.to_string(),
                field,
            });
        }

        entry.field_index.insert(field.clone(), entry.fields.len());
        entry.fields.push((field, Box::new(extractor)));
        Ok(())
    }

    /// Registers a function callable from any query
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F) -> RegistryResult<()>
    where
        F: FunctionExecutor + 'static,
    {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(RegistryError::DuplicateFunction(name));
        }
        self.functions.insert(name, Box::new(function));
        Ok(())
    }

    pub fn resolve_table(&self, name: &str) -> Option<&dyn TableProvider<S, R>> {
        self.tables.get(name).map(|entry| entry.provider.as_ref())
    }

    pub fn resolve_field(&self, table: &str, field: &str) -> Option<&dyn FieldExtractor<R>> {
        let entry = self.tables.get(table)?;
        let idx = *entry.field_index.get(field)?;
        Some(entry.fields[idx].1.as_ref())
    }

    pub fn resolve_function(&self, name: &str) -> Option<&dyn FunctionExecutor> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    /// Field names of `table` in registration order.
    ///
    /// Returns `None` if the table is not registered.
    pub fn fields_of(&self, table: &str) -> Option<Vec<&str>> {
        self.tables
            .get(table)
            .map(|entry| entry.fields.iter().map(|(name, _)| name.as_str()).collect())
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl<S, R> Default for SchemaRegistry<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FunctionFailure;
    use crate::value::Value;

    fn provider(n: &usize) -> Vec<usize> {
        (0..*n).collect()
    }

    fn registry_with_table() -> SchemaRegistry<usize, usize> {
        let mut registry = SchemaRegistry::new();
        registry.register_table("test", provider).unwrap();
        registry
    }

    #[test]
    fn test_fields_keep_registration_order() {
        let mut registry = registry_with_table();
        for name in ["zeta", "alpha", "mid"] {
            registry
                .register_field("test", name, |r: &usize| Value::from(*r as u32))
                .unwrap();
        }

        assert_eq!(registry.fields_of("test").unwrap(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_resolve_missing_names() {
        let registry = registry_with_table();
        assert!(registry.resolve_table("test").is_some());
        assert!(registry.resolve_table("nope").is_none());
        assert!(registry.resolve_field("test", "c1").is_none());
        assert!(registry.resolve_field("nope", "c1").is_none());
        assert!(registry.resolve_function("concat").is_none());
        assert!(registry.fields_of("nope").is_none());
    }

    #[test]
    fn test_resolve_field_extracts() {
        let mut registry = registry_with_table();
        registry
            .register_field("test", "c1", |r: &usize| Value::number(*r as f64 * 2.0))
            .unwrap();

        let extractor = registry.resolve_field("test", "c1").unwrap();
        assert_eq!(extractor.extract(&3), Value::number(6.0));

        let rows = registry.resolve_table("test").unwrap().provide(&4);
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_registrations_rejected() {
        let mut registry = registry_with_table();

        assert_eq!(
            registry.register_table("test", provider),
            Err(RegistryError::DuplicateTable("test".into()))
        );

        registry
            .register_field("test", "c1", |_: &usize| Value::boolean(true))
            .unwrap();
        assert!(matches!(
            registry.register_field("test", "c1", |_: &usize| Value::boolean(false)),
            Err(RegistryError::DuplicateField { .. })
        ));

        let noop = |_: &[Value]| -> Result<Value, FunctionFailure> { Ok(Value::boolean(true)) };
        registry.register_function("noop", noop).unwrap();
        assert_eq!(
            registry.register_function("noop", noop),
            Err(RegistryError::DuplicateFunction("noop".into()))
        );
        assert_eq!(registry.function_count(), 1);
    }

    #[test]
    fn test_field_on_unknown_table() {
        let mut registry: SchemaRegistry<usize, usize> = SchemaRegistry::new();
        let err = registry
            .register_field("ghost", "c1", |_: &usize| Value::boolean(true))
            .unwrap_err();
        assert_eq!(err, RegistryError::UnknownTable("ghost".into()));
        assert_eq!(registry.table_count(), 0);
    }
}
