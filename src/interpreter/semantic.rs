/// The static scope checker.
///
/// Walks the syntax tree, builds one scope per program or procedure body and
/// verifies that every variable and type reference resolves through the
/// visible scope chain.
pub mod core;
/// Scopes and the arena that owns them.
///
/// Each scope maps names to symbols and points at its enclosing scope by
/// index. Chain lookups walk those parent links outward to the global scope.
pub mod scope;
/// Symbols stored in scopes.
///
/// Variables, procedure signatures and the built-in types `INTEGER` and
/// `REAL`.
pub mod symbol;
